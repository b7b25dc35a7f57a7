use tracing::info;

use crate::errors::AppError;
use crate::models::assessment::TraitVector;
use crate::models::career::NewCareer;
use crate::store::Store;

/// Inserts the built-in catalog when the store has no careers yet.
/// Returns how many careers were inserted (0 when the catalog already existed).
pub async fn seed_catalog_if_empty(store: &dyn Store) -> Result<usize, AppError> {
    let existing = store.get_all_careers().await?;
    if !existing.is_empty() {
        info!(
            "Career catalog already holds {} careers; skipping seed",
            existing.len()
        );
        return Ok(0);
    }

    let catalog = default_catalog();
    let count = catalog.len();
    for career in catalog {
        store.create_career(career).await?;
    }

    info!("Career catalog seeded with {count} careers");
    Ok(count)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn roadmap(steps: &[&str]) -> Option<String> {
    Some(
        steps
            .iter()
            .map(|step| format!("• {step}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

pub fn default_catalog() -> Vec<NewCareer> {
    vec![
        NewCareer {
            title: "UX Designer".to_string(),
            description: "Create intuitive and beautiful user experiences for digital products"
                .to_string(),
            salary_min: Some(65_000),
            salary_max: Some(120_000),
            growth_rate: Some(0.22),
            education_level: Some("Bachelor's".to_string()),
            remote_work: true,
            skills: strings(&[
                "User Research",
                "Wireframing",
                "Prototyping",
                "Figma",
                "Usability Testing",
                "Design Systems",
            ]),
            interests: strings(&["creativity", "technology", "problem_solving", "design"]),
            personality_vector: Some(TraitVector::new(0.8, 0.7, 0.6, 0.7, 0.3)),
            roadmap_year1: roadmap(&[
                "Learn design fundamentals (color theory, typography, layout)",
                "Master design tools (Figma, Adobe XD, Sketch)",
                "Build first portfolio with 3-5 projects",
                "Take online courses (Google UX Design Certificate)",
                "Join design communities and follow industry blogs",
            ]),
            roadmap_year2: roadmap(&[
                "Focus on UX research methods and usability testing",
                "Learn prototyping and interaction design",
                "Work on real client projects or internships",
                "Develop expertise in mobile and web design",
                "Network with professionals and attend design events",
            ]),
            roadmap_year3: roadmap(&[
                "Apply for junior UX designer positions",
                "Lead design projects from concept to completion",
                "Develop business acumen and strategy skills",
                "Mentor other aspiring designers",
                "Consider pursuing advanced certifications",
            ]),
            icon_class: Some("fas fa-palette".to_string()),
            color_scheme: Some("gradient-bg".to_string()),
        },
        NewCareer {
            title: "Software Developer".to_string(),
            description: "Build applications and systems that solve real-world problems"
                .to_string(),
            salary_min: Some(70_000),
            salary_max: Some(130_000),
            growth_rate: Some(0.25),
            education_level: Some("Bachelor's".to_string()),
            remote_work: true,
            skills: strings(&[
                "Programming",
                "Problem Solving",
                "Software Architecture",
                "Database Design",
                "Testing",
                "Version Control",
            ]),
            interests: strings(&["technology", "problem_solving", "learning", "logic"]),
            personality_vector: Some(TraitVector::new(0.7, 0.8, 0.4, 0.6, 0.3)),
            roadmap_year1: roadmap(&[
                "Learn programming fundamentals (Python, JavaScript)",
                "Build basic projects and portfolio",
                "Study computer science concepts",
                "Practice on coding platforms",
                "Join coding communities",
            ]),
            roadmap_year2: roadmap(&[
                "Master web development frameworks",
                "Learn database management",
                "Contribute to open source projects",
                "Build complex applications",
                "Network with developers",
            ]),
            roadmap_year3: roadmap(&[
                "Apply for junior developer positions",
                "Specialize in specific technologies",
                "Lead development projects",
                "Mentor junior developers",
                "Consider advanced certifications",
            ]),
            icon_class: Some("fas fa-code".to_string()),
            color_scheme: Some("gradient-card".to_string()),
        },
        NewCareer {
            title: "Graphic Designer".to_string(),
            description: "Create visual content to communicate messages and engage audiences"
                .to_string(),
            salary_min: Some(45_000),
            salary_max: Some(85_000),
            growth_rate: Some(0.08),
            education_level: Some("Bachelor's".to_string()),
            remote_work: true,
            skills: strings(&[
                "Visual Design",
                "Typography",
                "Branding",
                "Adobe Creative Suite",
                "Layout Design",
                "Color Theory",
            ]),
            interests: strings(&["creativity", "art", "communication", "visual"]),
            personality_vector: Some(TraitVector::new(0.9, 0.6, 0.5, 0.6, 0.4)),
            roadmap_year1: roadmap(&[
                "Master Adobe Creative Suite",
                "Learn design principles",
                "Build portfolio with diverse projects",
                "Study typography and color theory",
                "Follow design trends and inspiration",
            ]),
            roadmap_year2: roadmap(&[
                "Specialize in branding or digital design",
                "Work with real clients",
                "Develop business understanding",
                "Network with other creatives",
                "Expand technical skills",
            ]),
            roadmap_year3: roadmap(&[
                "Apply for designer positions",
                "Build strong client relationships",
                "Consider freelance opportunities",
                "Mentor aspiring designers",
                "Explore creative direction roles",
            ]),
            icon_class: Some("fas fa-paint-brush".to_string()),
            color_scheme: Some("bg-accent".to_string()),
        },
        NewCareer {
            title: "Data Scientist".to_string(),
            description:
                "Extract insights from data to drive business decisions and solve complex problems"
                    .to_string(),
            salary_min: Some(85_000),
            salary_max: Some(150_000),
            growth_rate: Some(0.35),
            education_level: Some("Bachelor's".to_string()),
            remote_work: true,
            skills: strings(&[
                "Statistics",
                "Machine Learning",
                "Python/R",
                "Data Visualization",
                "SQL",
                "Critical Thinking",
            ]),
            interests: strings(&["analysis", "mathematics", "problem_solving", "research"]),
            personality_vector: Some(TraitVector::new(0.8, 0.9, 0.4, 0.5, 0.2)),
            roadmap_year1: roadmap(&[
                "Learn statistics and mathematics",
                "Master Python and R programming",
                "Study machine learning basics",
                "Work with real datasets",
                "Build analytical projects",
            ]),
            roadmap_year2: roadmap(&[
                "Advanced machine learning techniques",
                "Data visualization mastery",
                "Domain expertise development",
                "Internships or projects",
                "Kaggle competitions",
            ]),
            roadmap_year3: roadmap(&[
                "Apply for data scientist roles",
                "Specialize in specific industries",
                "Lead data projects",
                "Present findings to stakeholders",
                "Consider advanced degrees",
            ]),
            icon_class: Some("fas fa-chart-bar".to_string()),
            color_scheme: Some("bg-secondary".to_string()),
        },
        NewCareer {
            title: "Marketing Specialist".to_string(),
            description: "Create and execute marketing strategies to promote products and services"
                .to_string(),
            salary_min: Some(50_000),
            salary_max: Some(90_000),
            growth_rate: Some(0.18),
            education_level: Some("Bachelor's".to_string()),
            remote_work: true,
            skills: strings(&[
                "Digital Marketing",
                "Content Creation",
                "SEO/SEM",
                "Social Media",
                "Analytics",
                "Communication",
            ]),
            interests: strings(&["communication", "creativity", "psychology", "business"]),
            personality_vector: Some(TraitVector::new(0.7, 0.7, 0.8, 0.7, 0.3)),
            roadmap_year1: roadmap(&[
                "Learn digital marketing fundamentals",
                "Master social media platforms",
                "Study consumer psychology",
                "Create content portfolio",
                "Get marketing certifications",
            ]),
            roadmap_year2: roadmap(&[
                "Specialize in specific channels",
                "Work on real campaigns",
                "Learn analytics tools",
                "Build professional network",
                "Gain industry experience",
            ]),
            roadmap_year3: roadmap(&[
                "Apply for marketing positions",
                "Lead campaign strategies",
                "Develop team leadership skills",
                "Focus on ROI optimization",
                "Consider specialization areas",
            ]),
            icon_class: Some("fas fa-bullhorn".to_string()),
            color_scheme: Some("bg-primary".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::Trait;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        assert_eq!(seed_catalog_if_empty(&store).await.unwrap(), 5);
        assert_eq!(seed_catalog_if_empty(&store).await.unwrap(), 0);
        assert_eq!(store.get_all_careers().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_seed_preserves_catalog_order() {
        let store = MemoryStore::new();
        seed_catalog_if_empty(&store).await.unwrap();
        let titles: Vec<_> = store
            .get_all_careers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "UX Designer",
                "Software Developer",
                "Graphic Designer",
                "Data Scientist",
                "Marketing Specialist"
            ]
        );
    }

    #[test]
    fn test_catalog_vectors_in_range() {
        for career in default_catalog() {
            let vector = career
                .personality_vector
                .expect("every seeded career has a vector");
            for dimension in Trait::ALL {
                assert!((0.0..=1.0).contains(&vector.get(dimension)));
            }
        }
    }

    #[test]
    fn test_roadmap_is_bulleted() {
        let text = roadmap(&["one", "two"]).unwrap();
        assert_eq!(text, "• one\n• two");
    }
}
