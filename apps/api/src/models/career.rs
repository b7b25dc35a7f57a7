use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::assessment::TraitVector;

/// A catalog career. Seeded once and never mutated by the scoring pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub growth_rate: Option<f64>,
    pub education_level: Option<String>,
    pub remote_work: bool,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub personality_vector: Option<Json<TraitVector>>,
    pub roadmap_year1: Option<String>,
    pub roadmap_year2: Option<String>,
    pub roadmap_year3: Option<String>,
    pub icon_class: Option<String>,
    pub color_scheme: Option<String>,
}

impl CareerRecord {
    /// Reference personality for this career, if the catalog defines one.
    pub fn reference_traits(&self) -> Option<&TraitVector> {
        self.personality_vector.as_ref().map(|v| &v.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCareer {
    pub title: String,
    pub description: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub growth_rate: Option<f64>,
    pub education_level: Option<String>,
    pub remote_work: bool,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub personality_vector: Option<TraitVector>,
    pub roadmap_year1: Option<String>,
    pub roadmap_year2: Option<String>,
    pub roadmap_year3: Option<String>,
    pub icon_class: Option<String>,
    pub color_scheme: Option<String>,
}

impl NewCareer {
    pub fn into_record(self, id: Uuid) -> CareerRecord {
        CareerRecord {
            id,
            title: self.title,
            description: self.description,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            growth_rate: self.growth_rate,
            education_level: self.education_level,
            remote_work: self.remote_work,
            skills: self.skills,
            interests: self.interests,
            personality_vector: self.personality_vector.map(Json),
            roadmap_year1: self.roadmap_year1,
            roadmap_year2: self.roadmap_year2,
            roadmap_year3: self.roadmap_year3,
            icon_class: self.icon_class,
            color_scheme: self.color_scheme,
        }
    }
}
