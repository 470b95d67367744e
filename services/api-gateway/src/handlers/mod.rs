pub mod events;
pub mod health;
pub mod races;

pub use events::{get_event, list_events};
pub use health::{health, readiness};
pub use races::list_races;
