use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a person scores as a driver or as a co-driver.
///
/// The two roles are independent classification universes: a driver and a
/// co-driver are never ranked against each other, even when they share the
/// same underlying race results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriverRole {
    Driver,
    CoDriver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub driver_id: Uuid,
    pub name: String,
    pub team: Option<String>,
    /// Default vehicle model from the driver's profile. Trophy eligibility
    /// never reads this field; it looks at the per-result model instead.
    pub car_model: Option<String>,
    pub race_number: Option<i32>,
    pub role: DriverRole,
    pub championship_id: Uuid,
}
