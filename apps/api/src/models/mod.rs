pub mod assessment;
pub mod career;
pub mod journal;
pub mod recommendation;
