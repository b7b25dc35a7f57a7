// Recommendation engine: profile aggregation, similarity scoring, ranking and persistence.

pub mod generator;
pub mod handlers;
pub mod profile;
pub mod scoring;
