// Per-user dashboard summary.

pub mod handlers;
pub mod stats;
