//! Trigger tables for theme and skill detection.
//!
//! Each label owns a list of lower-case stems. A stem matches when it starts a
//! word (`\b` on the left only), so `lead` hits "leading" and "leadership" but
//! `art` does not hit "start". Tables are evaluated in declaration order, which
//! is the order labels appear in the output.

use std::sync::LazyLock;

use regex::Regex;

pub const THEME_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "creativity",
        &[
            "creat",
            "design",
            "art",
            "draw",
            "paint",
            "music",
            "write",
            "imagination",
        ],
    ),
    (
        "technology",
        &[
            "code", "program", "computer", "tech", "digital", "software", "app", "web",
        ],
    ),
    (
        "leadership",
        &[
            "lead",
            "manage",
            "organize",
            "team",
            "group",
            "direct",
            "coordinate",
        ],
    ),
    (
        "helping",
        &[
            "help",
            "assist",
            "support",
            "care",
            "volunteer",
            "community",
            "service",
        ],
    ),
    (
        "problem_solving",
        &[
            "solve",
            "fix",
            "challenge",
            "puzzle",
            "analyze",
            "think",
            "logic",
        ],
    ),
    (
        "communication",
        &[
            "talk", "speak", "present", "explain", "teach", "share", "discuss",
        ],
    ),
    (
        "learning",
        &[
            "learn",
            "study",
            "research",
            "discover",
            "explore",
            "understand",
        ],
    ),
    (
        "collaboration",
        &[
            "team",
            "group",
            "together",
            "cooperate",
            "work with",
            "collaborate",
        ],
    ),
];

pub const SKILL_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "code",
            "program",
            "javascript",
            "python",
            "html",
            "css",
            "react",
            "node",
        ],
    ),
    (
        "design",
        &[
            "design",
            "photoshop",
            "illustrator",
            "figma",
            "sketch",
            "ui",
            "ux",
        ],
    ),
    (
        "writing",
        &["write", "blog", "article", "story", "content", "copy"],
    ),
    (
        "analysis",
        &["analyze", "data", "research", "investigate", "examine"],
    ),
    (
        "presentation",
        &["present", "speak", "pitch", "demonstrate", "show"],
    ),
    (
        "project_management",
        &["organize", "plan", "schedule", "coordinate", "manage"],
    ),
    (
        "customer_service",
        &["customer", "client", "service", "support", "help"],
    ),
    (
        "sales",
        &["sell", "sales", "market", "promote", "advertise"],
    ),
    (
        "teaching",
        &["teach", "tutor", "mentor", "explain", "instruct"],
    ),
    (
        "leadership",
        &["lead", "manage", "supervise", "direct", "guide"],
    ),
];

/// A label paired with its compiled trigger expression.
#[derive(Debug)]
pub struct LabelMatcher {
    pub label: &'static str,
    regex: Regex,
}

impl LabelMatcher {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

pub static THEME_MATCHERS: LazyLock<Vec<LabelMatcher>> =
    LazyLock::new(|| compile_table(THEME_TRIGGERS));

pub static SKILL_MATCHERS: LazyLock<Vec<LabelMatcher>> =
    LazyLock::new(|| compile_table(SKILL_TRIGGERS));

fn compile_table(table: &[(&'static str, &[&str])]) -> Vec<LabelMatcher> {
    table
        .iter()
        .map(|(label, stems)| {
            let alternation = stems
                .iter()
                .map(|stem| regex::escape(stem))
                .collect::<Vec<_>>()
                .join("|");
            let regex = Regex::new(&format!(r"(?i)\b(?:{alternation})"))
                .expect("trigger tables contain only escaped literals");
            LabelMatcher { label, regex }
        })
        .collect()
}

/// Labels from `matchers` whose triggers occur in `text`, in table order.
pub fn matching_labels(matchers: &[LabelMatcher], text: &str) -> Vec<String> {
    matchers
        .iter()
        .filter(|m| m.is_match(text))
        .map(|m| m.label.to_string())
        .collect()
}
