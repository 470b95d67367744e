//! Table creation and demo rows for the racing catalog

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::sqlite::SqlitePool;

use crate::repository::{format_instant, RepositoryResult};
use crate::seed::{days_from, instant_between, team_name, SEED_ROWS};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS races (\
    id INTEGER PRIMARY KEY, \
    meeting_id INTEGER, \
    name TEXT, \
    number INTEGER, \
    visible INTEGER, \
    advertised_start_time DATETIME)";

const INSERT_ROW: &str = "INSERT OR IGNORE INTO races \
    (id, meeting_id, name, number, visible, advertised_start_time) VALUES (?, ?, ?, ?, ?, ?)";

const SET_START: &str = "UPDATE races SET advertised_start_time = ? WHERE id = ?";

struct SeedRace {
    id: i64,
    meeting_id: i64,
    name: String,
    number: i64,
    visible: i64,
    advertised_start_time: String,
}

fn generate() -> Vec<SeedRace> {
    let mut rng = rand::rng();
    let now = Utc::now();
    let (from, to) = (days_from(now, -1), days_from(now, 2));

    (1..=SEED_ROWS)
        .map(|id| SeedRace {
            id,
            meeting_id: rng.random_range(1..=10),
            name: team_name(&mut rng),
            number: rng.random_range(1..=12),
            visible: rng.random_range(0..=1),
            advertised_start_time: format_instant(instant_between(&mut rng, from, to)),
        })
        .collect()
}

/// Create the `races` table and insert the demo rows
///
/// Existing ids are left untouched, so seeding an already populated store is a
/// no-op apart from the last race, which is always moved an hour into the
/// future so at least one race is upcoming.
pub async fn seed_races(pool: &SqlitePool) -> RepositoryResult<()> {
    sqlx::query(CREATE_TABLE).execute(pool).await?;

    let rows = generate();
    for race in &rows {
        sqlx::query(INSERT_ROW)
            .bind(race.id)
            .bind(race.meeting_id)
            .bind(race.name.as_str())
            .bind(race.number)
            .bind(race.visible)
            .bind(race.advertised_start_time.as_str())
            .execute(pool)
            .await?;
    }

    let upcoming = format_instant(Utc::now() + Duration::hours(1));
    sqlx::query(SET_START)
        .bind(upcoming)
        .bind(SEED_ROWS)
        .execute(pool)
        .await?;

    tracing::info!(rows = rows.len(), "Seeded races");
    Ok(())
}
