//! Racing catalog: races listed by meeting and visibility

mod model;
mod repo;
mod seed;
mod service;

pub use model::{Race, RaceFilter, RACE_COLUMNS};
pub use repo::{RacesRepo, RacesRepository};
pub use seed::seed_races;
pub use service::RacingService;
