// Career catalog: startup seeding and read-only lookup endpoints.

pub mod handlers;
pub mod seed;
