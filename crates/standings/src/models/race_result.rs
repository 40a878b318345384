use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One driver's outcome in one race. At most one result may exist per
/// (race, driver) pair; `Race::validate` enforces this on loaded data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    pub race_id: Uuid,
    pub driver_id: Uuid,
    /// 1-based finishing position.
    pub position: u32,
    /// Points earned. Settable independently of `position`; organizers
    /// apply penalties and coefficients before the data reaches us.
    pub points: u32,
    pub time: Option<String>,
    pub dnf: bool,
    /// Model actually driven in this race, when it differs from the
    /// driver's profile.
    pub car_model: Option<String>,
    /// Free-text category label, used for karting sub-class matching.
    pub category: Option<String>,
    pub bonus_points: Option<u32>,
}

impl RaceResult {
    /// `points + bonus`, the value category-aggregate totals count.
    pub fn points_with_bonus(&self) -> u32 {
        self.points + self.bonus_points.unwrap_or(0)
    }
}
