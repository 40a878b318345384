use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("duplicate result for driver {driver_id} in race {race_id}")]
    DuplicateResult { race_id: Uuid, driver_id: Uuid },

    #[error("race {race_id} ends before it starts ({end} < {start})")]
    InvalidDateRange {
        race_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    },
}

pub type Result<T> = std::result::Result<T, StandingsError>;
