// Personality questionnaire: static question bank, trait normalization, HTTP surface.

pub mod handlers;
pub mod normalizer;
pub mod questions;
