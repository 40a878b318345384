use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StandingsError};
use crate::models::RaceResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Mountain,
    Rally,
    Karting,
    Acceleration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub race_id: Uuid,
    pub name: String,
    /// Calendar date of the event. Kept naive: these are local dates, and
    /// applying a UTC offset shifts evening races across midnight.
    pub date: NaiveDate,
    /// Set for multi-day events.
    pub end_date: Option<NaiveDate>,
    pub discipline: Discipline,
    pub organizer: Option<String>,
    pub championship_id: Uuid,
    pub results: Vec<RaceResult>,
}

impl Race {
    /// Checks the invariants upstream loaders are expected to enforce: one
    /// result per driver and a coherent date range.
    pub fn validate(&self) -> Result<()> {
        if let Some(end) = self.end_date
            && end < self.date
        {
            return Err(StandingsError::InvalidDateRange {
                race_id: self.race_id,
                start: self.date,
                end,
            });
        }

        let mut seen = HashSet::new();
        for result in &self.results {
            if !seen.insert(result.driver_id) {
                return Err(StandingsError::DuplicateResult {
                    race_id: self.race_id,
                    driver_id: result.driver_id,
                });
            }
        }

        Ok(())
    }

    pub fn result_for(&self, driver_id: Uuid) -> Option<&RaceResult> {
        self.results.iter().find(|r| r.driver_id == driver_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(race_id: Uuid, driver_id: Uuid) -> RaceResult {
        RaceResult {
            race_id,
            driver_id,
            position: 1,
            points: 10,
            time: None,
            dnf: false,
            car_model: None,
            category: None,
            bonus_points: None,
        }
    }

    fn race(results: Vec<RaceResult>) -> Race {
        Race {
            race_id: Uuid::new_v4(),
            name: "Course de côte test".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: None,
            discipline: Discipline::Mountain,
            organizer: None,
            championship_id: Uuid::new_v4(),
            results,
        }
    }

    #[test]
    fn validate_accepts_distinct_drivers() {
        let race_id = Uuid::new_v4();
        let race = race(vec![
            result(race_id, Uuid::new_v4()),
            result(race_id, Uuid::new_v4()),
        ]);
        assert!(race.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_driver() {
        let race_id = Uuid::new_v4();
        let driver_id = Uuid::new_v4();
        let race = race(vec![result(race_id, driver_id), result(race_id, driver_id)]);
        assert!(matches!(
            race.validate(),
            Err(StandingsError::DuplicateResult { driver_id: d, .. }) if d == driver_id
        ));
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let mut race = race(vec![]);
        race.end_date = Some(race.date.pred_opt().unwrap());
        assert!(matches!(
            race.validate(),
            Err(StandingsError::InvalidDateRange { .. })
        ));
    }
}
