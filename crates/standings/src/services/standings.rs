//! Per-classification pipelines. Every function takes the previous
//! snapshot list as an explicit argument; nothing here reads ambient
//! state, so a computation can be replayed from its inputs alone.

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::dto::{Standing, StandingCategory};
use crate::models::{Discipline, Driver, DriverRole, Race};
use crate::services::builder::build_standing;
use crate::services::classifiers::{KartingCategory, VehicleTrophy, with_role};
use crate::services::evolution::apply_evolution;
use crate::services::points::{driver_points, karting_category_points, vehicle_trophy_points};
use crate::services::ranking::{RankingKey, rank_scoring_standings, rank_standings};

/// General classification: mountain and rally points combined, everyone
/// with the driver role listed, zero scorers included.
pub fn general_standings(
    drivers: &[Driver],
    races: &[Race],
    previous: &[Standing],
) -> Vec<Standing> {
    let standings = discipline_totals(drivers, races, previous);
    let mut ranked = rank_standings(standings, RankingKey::Total);
    apply_evolution(&mut ranked, StandingCategory::General);
    debug!(entries = ranked.len(), "computed general standings");
    ranked
}

/// Mountain-only board. Drivers with zero mountain points do not appear,
/// even when they hold a general classification line.
pub fn mountain_standings(
    drivers: &[Driver],
    races: &[Race],
    previous: &[Standing],
) -> Vec<Standing> {
    let standings = discipline_totals(drivers, races, previous);
    let mut ranked = rank_scoring_standings(standings, RankingKey::Mountain);
    apply_evolution(&mut ranked, StandingCategory::Mountain);
    debug!(entries = ranked.len(), "computed mountain standings");
    ranked
}

/// Rally-only board, zero scorers excluded.
pub fn rally_standings(drivers: &[Driver], races: &[Race], previous: &[Standing]) -> Vec<Standing> {
    let standings = discipline_totals(drivers, races, previous);
    let mut ranked = rank_scoring_standings(standings, RankingKey::Rally);
    apply_evolution(&mut ranked, StandingCategory::Rally);
    debug!(entries = ranked.len(), "computed rally standings");
    ranked
}

/// Vehicle-restricted trophy: only points scored at the wheel of the
/// trophy's model count, across both disciplines. Drivers without a single
/// eligible result are left off the board.
pub fn vehicle_trophy_standings(
    drivers: &[Driver],
    races: &[Race],
    trophy: &VehicleTrophy,
    previous: &[Standing],
) -> Vec<Standing> {
    let previous = previous_by_driver(previous);
    let standings = with_role(drivers, DriverRole::Driver)
        .map(|driver| {
            let mountain = vehicle_trophy_points(
                driver.driver_id,
                of_discipline(races, Discipline::Mountain),
                trophy,
            );
            let rally = vehicle_trophy_points(
                driver.driver_id,
                of_discipline(races, Discipline::Rally),
                trophy,
            );
            build_standing(
                driver,
                mountain,
                rally,
                previous.get(&driver.driver_id).copied(),
            )
        })
        .collect();
    let mut ranked = rank_scoring_standings(standings, RankingKey::Total);
    apply_evolution(&mut ranked, StandingCategory::VehicleTrophy);
    debug!(entries = ranked.len(), "computed vehicle trophy standings");
    ranked
}

/// Co-driver classification: its own universe, scored on rally results
/// only (co-drivers are not scored in the mountain discipline). Evolution
/// diffs against the general slot; the role partition keeps that slot free
/// of driver history.
pub fn codriver_standings(
    drivers: &[Driver],
    races: &[Race],
    previous: &[Standing],
) -> Vec<Standing> {
    let previous = previous_by_driver(previous);
    let standings = with_role(drivers, DriverRole::CoDriver)
        .map(|codriver| {
            let rally = driver_points(
                codriver.driver_id,
                of_discipline(races, Discipline::Rally),
            );
            build_standing(
                codriver,
                0,
                rally,
                previous.get(&codriver.driver_id).copied(),
            )
        })
        .collect();
    let mut ranked = rank_standings(standings, RankingKey::Total);
    apply_evolution(&mut ranked, StandingCategory::General);
    debug!(entries = ranked.len(), "computed co-driver standings");
    ranked
}

/// One karting sub-class board, `points + bonus` over karting races.
/// Karting carries no snapshot slot, so there is no previous input and
/// every delta stays zero.
pub fn karting_standings(
    drivers: &[Driver],
    races: &[Race],
    category: KartingCategory,
) -> Vec<Standing> {
    let standings = with_role(drivers, DriverRole::Driver)
        .map(|driver| {
            let points = karting_category_points(
                driver.driver_id,
                of_discipline(races, Discipline::Karting),
                category,
            );
            let mut standing = build_standing(driver, 0, 0, None);
            // karting boards carry a single aggregate; the discipline split stays zero
            standing.total_points = points;
            standing
        })
        .collect();
    let ranked = rank_scoring_standings(standings, RankingKey::Total);
    debug!(?category, entries = ranked.len(), "computed karting standings");
    ranked
}

fn discipline_totals(drivers: &[Driver], races: &[Race], previous: &[Standing]) -> Vec<Standing> {
    let previous = previous_by_driver(previous);
    with_role(drivers, DriverRole::Driver)
        .map(|driver| {
            let mountain = driver_points(
                driver.driver_id,
                of_discipline(races, Discipline::Mountain),
            );
            let rally = driver_points(driver.driver_id, of_discipline(races, Discipline::Rally));
            build_standing(
                driver,
                mountain,
                rally,
                previous.get(&driver.driver_id).copied(),
            )
        })
        .collect()
}

/// Snapshot records are matched to current drivers by id, never by name.
fn previous_by_driver(previous: &[Standing]) -> HashMap<Uuid, &Standing> {
    previous.iter().map(|s| (s.driver_id, s)).collect()
}

fn of_discipline(races: &[Race], discipline: Discipline) -> impl Iterator<Item = &Race> {
    races.iter().filter(move |race| race.discipline == discipline)
}
