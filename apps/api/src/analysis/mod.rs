// Rule-based journal text analysis: keywords, themes and skills.

pub mod patterns;
pub mod signals;
