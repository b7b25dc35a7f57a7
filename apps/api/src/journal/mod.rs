// Journal entries: creation, listing, and the detached analysis/regeneration follow-up.

pub mod followup;
pub mod handlers;
