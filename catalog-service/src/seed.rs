//! Demo data generation shared by the catalog seeders

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Number of rows each catalog is seeded with
pub const SEED_ROWS: i64 = 100;

const PLACES: &[&str] = &[
    "Ballarat", "Bendigo", "Caulfield", "Doomben", "Eagle Farm", "Flemington",
    "Geelong", "Hawkesbury", "Ipswich", "Kembla", "Moonee Valley", "Morphettville",
    "Pakenham", "Randwick", "Rosehill", "Sandown", "Townsville", "Warrnambool",
];

const MASCOTS: &[&str] = &[
    "Bulldogs", "Chargers", "Comets", "Eagles", "Falcons", "Giants", "Hawks",
    "Kings", "Lions", "Magpies", "Panthers", "Raiders", "Rockets", "Sharks",
    "Storm", "Tigers", "Titans", "Wolves",
];

/// A made-up team name such as "Geelong Falcons"
pub fn team_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let place = PLACES.choose(rng).copied().unwrap_or("Unnamed");
    let mascot = MASCOTS.choose(rng).copied().unwrap_or("Club");
    format!("{} {}", place, mascot)
}

/// A whole-second instant in `[from, to]`
pub fn instant_between<R: Rng + ?Sized>(
    rng: &mut R,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> DateTime<Utc> {
    let (low, high) = (from.timestamp(), to.timestamp());
    if high <= low {
        return from;
    }
    let secs = rng.random_range(low..=high);
    DateTime::from_timestamp(secs, 0).unwrap_or(from)
}

/// `now` shifted by whole days
pub fn days_from(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now + Duration::days(days)
}
