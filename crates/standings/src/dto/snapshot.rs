use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::{Standing, StandingCategory};

/// A named, persisted copy of one classification, used only as the
/// comparison baseline for evolution deltas. Drivers are matched to the
/// current computation by id, never by name, so renames keep history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub snapshot_id: Uuid,
    pub championship_id: Uuid,
    pub name: String,
    pub category: StandingCategory,
    pub created_at: NaiveDateTime,
    pub standings: Vec<Standing>,
}

impl Snapshot {
    /// Captures a freshly ranked list as the future baseline for
    /// `category`. Each record's slot for that category is overwritten
    /// with the rank it holds right now; slots for other categories ride
    /// along untouched.
    pub fn capture(
        name: impl Into<String>,
        championship_id: Uuid,
        category: StandingCategory,
        created_at: NaiveDateTime,
        standings: &[Standing],
    ) -> Self {
        let standings = standings
            .iter()
            .cloned()
            .map(|mut standing| {
                standing.previous_positions.insert(category, standing.rank);
                standing
            })
            .collect();

        Self {
            snapshot_id: Uuid::new_v4(),
            championship_id,
            name: name.into(),
            category,
            created_at,
            standings,
        }
    }

    /// Picks the latest snapshot saved for `category`, the only one that
    /// serves as "previous standings" input for a computation.
    pub fn most_recent<'a>(
        snapshots: &'a [Snapshot],
        category: StandingCategory,
    ) -> Option<&'a Snapshot> {
        snapshots
            .iter()
            .filter(|s| s.category == category)
            .max_by_key(|s| s.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn standing(name: &str, rank: u32) -> Standing {
        Standing {
            driver_id: Uuid::new_v4(),
            driver_name: name.to_string(),
            mountain_points: 0,
            rally_points: 0,
            total_points: 0,
            rank,
            previous_positions: std::collections::BTreeMap::new(),
            position_change: 0,
        }
    }

    fn timestamp(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn capture_stamps_the_active_slot() {
        let mut ranked = standing("Martin", 3);
        ranked
            .previous_positions
            .insert(StandingCategory::Mountain, 7);

        let snapshot = Snapshot::capture(
            "après manche 4",
            Uuid::new_v4(),
            StandingCategory::General,
            timestamp(1),
            &[ranked],
        );

        let saved = &snapshot.standings[0];
        assert_eq!(
            saved.previous_positions.get(&StandingCategory::General),
            Some(&3)
        );
        // untouched history from another classification
        assert_eq!(
            saved.previous_positions.get(&StandingCategory::Mountain),
            Some(&7)
        );
    }

    #[test]
    fn most_recent_prefers_latest_matching_category() {
        let championship_id = Uuid::new_v4();
        let old = Snapshot::capture(
            "old",
            championship_id,
            StandingCategory::General,
            timestamp(1),
            &[],
        );
        let newer = Snapshot::capture(
            "newer",
            championship_id,
            StandingCategory::General,
            timestamp(8),
            &[],
        );
        let other = Snapshot::capture(
            "rally",
            championship_id,
            StandingCategory::Rally,
            timestamp(9),
            &[],
        );

        let snapshots = vec![old, newer.clone(), other];
        let picked = Snapshot::most_recent(&snapshots, StandingCategory::General).unwrap();
        assert_eq!(picked.snapshot_id, newer.snapshot_id);
    }
}
