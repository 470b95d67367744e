//! Sports catalog: events with a status derived from their advertised window

mod model;
mod repo;
mod seed;
mod service;
mod status;

pub use model::{Event, EventFilter, EVENT_COLUMNS};
pub use repo::{SportsRepo, SportsRepository};
pub use seed::seed_events;
pub use service::SportsService;
pub use status::EventStatus;
