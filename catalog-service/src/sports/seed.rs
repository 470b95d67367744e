//! Table creation and demo rows for the sports catalog

use chrono::Utc;
use rand::Rng;
use sqlx::sqlite::SqlitePool;

use crate::repository::{format_instant, RepositoryResult};
use crate::seed::{days_from, instant_between, team_name, SEED_ROWS};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS events (\
    id INTEGER PRIMARY KEY, \
    name TEXT, \
    venue_id INTEGER, \
    sport_id INTEGER, \
    participants_id INTEGER, \
    advertised_start_time DATETIME, \
    advertised_end_time DATETIME)";

const INSERT_ROW: &str = "INSERT OR IGNORE INTO events \
    (id, name, venue_id, sport_id, participants_id, advertised_start_time, advertised_end_time) \
    VALUES (?, ?, ?, ?, ?, ?, ?)";

struct SeedEvent {
    id: i64,
    name: String,
    venue_id: i64,
    sport_id: i64,
    participants_id: i64,
    advertised_start_time: String,
    advertised_end_time: String,
}

fn generate() -> Vec<SeedEvent> {
    let mut rng = rand::rng();
    let now = Utc::now();

    (1..=SEED_ROWS)
        .map(|id| {
            let start = instant_between(&mut rng, days_from(now, -5), days_from(now, 2));
            let end = instant_between(&mut rng, days_from(now, 3), days_from(now, 5));
            SeedEvent {
                id,
                name: team_name(&mut rng),
                venue_id: rng.random_range(1..=30),
                sport_id: rng.random_range(1..=20),
                participants_id: rng.random_range(1..=10),
                advertised_start_time: format_instant(start),
                advertised_end_time: format_instant(end),
            }
        })
        .collect()
}

/// Create the `events` table and insert the demo rows, keeping existing ids
pub async fn seed_events(pool: &SqlitePool) -> RepositoryResult<()> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;

    let rows = generate();
    for event in &rows {
        sqlx::query(INSERT_ROW)
            .bind(event.id)
            .bind(event.name.as_str())
            .bind(event.venue_id)
            .bind(event.sport_id)
            .bind(event.participants_id)
            .bind(event.advertised_start_time.as_str())
            .bind(event.advertised_end_time.as_str())
            .execute(pool)
            .await?;
    }

    tracing::info!(rows = rows.len(), "Seeded events");
    Ok(())
}
