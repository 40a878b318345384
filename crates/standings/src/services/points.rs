use uuid::Uuid;

use crate::models::Race;
use crate::services::classifiers::{KartingCategory, VehicleTrophy};

/// Sums the points a driver earned across `races`. Races where the driver
/// has no result contribute zero. Pure function of its inputs.
pub fn driver_points<'a, I>(driver_id: Uuid, races: I) -> u32
where
    I: IntoIterator<Item = &'a Race>,
{
    races
        .into_iter()
        .flat_map(|race| &race.results)
        .filter(|result| result.driver_id == driver_id)
        .map(|result| result.points)
        .sum()
}

/// Trophy variant: only results whose per-race model matches the trophy
/// count toward the sum. The driver's profile model is deliberately
/// ignored — eligibility is about what was actually driven in that race,
/// and a result with no model recorded earns nothing here.
pub fn vehicle_trophy_points<'a, I>(driver_id: Uuid, races: I, trophy: &VehicleTrophy) -> u32
where
    I: IntoIterator<Item = &'a Race>,
{
    races
        .into_iter()
        .flat_map(|race| &race.results)
        .filter(|result| result.driver_id == driver_id)
        .filter(|result| {
            result
                .car_model
                .as_deref()
                .is_some_and(|model| trophy.matches(model))
        })
        .map(|result| result.points)
        .sum()
}

/// Karting variant: counts `points + bonus` for results whose free-text
/// category label matches `category`. Missing or unmatched labels
/// contribute zero.
pub fn karting_category_points<'a, I>(driver_id: Uuid, races: I, category: KartingCategory) -> u32
where
    I: IntoIterator<Item = &'a Race>,
{
    races
        .into_iter()
        .flat_map(|race| &race.results)
        .filter(|result| result.driver_id == driver_id)
        .filter(|result| {
            result
                .category
                .as_deref()
                .is_some_and(|label| category.matches(label))
        })
        .map(|result| result.points_with_bonus())
        .sum()
}
