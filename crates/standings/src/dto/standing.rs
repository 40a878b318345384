use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tag identifying one classification. Previous-position history is keyed
/// by this tag, so one driver carries independent history for every
/// classification at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StandingCategory {
    General,
    Mountain,
    Rally,
    VehicleTrophy,
}

/// One line of a classification. Ephemeral: recomputed from drivers and
/// results on every query, never the source of truth. Only snapshots
/// persist copies of it, as the baseline for the next evolution diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub driver_id: Uuid,
    pub driver_name: String,
    pub mountain_points: u32,
    pub rally_points: u32,
    pub total_points: u32,
    /// 1-based dense rank. Zero until the ranking pass assigns it.
    pub rank: u32,
    /// Rank held per classification when the previous snapshot was saved.
    /// No entry means the driver was not ranked there before.
    pub previous_positions: BTreeMap<StandingCategory, u32>,
    /// Previous rank minus current rank for the active classification;
    /// positive means the driver moved up. Zero covers both "unchanged"
    /// and "new entrant" — consumers tell them apart by whether the
    /// matching previous-position entry exists.
    pub position_change: i32,
}
