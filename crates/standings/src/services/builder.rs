use crate::dto::Standing;
use crate::models::Driver;

/// Assembles the unranked standing record for one driver.
///
/// Rank and evolution stay at their zero values here: sorting and delta
/// computation happen once, in `ranking` and `evolution`, for every
/// classification alike. The previous snapshot record (matched by driver
/// id) only contributes its previous-position slots, carried over verbatim
/// so the evolution pass can diff against them.
pub fn build_standing(
    driver: &Driver,
    mountain_points: u32,
    rally_points: u32,
    previous: Option<&Standing>,
) -> Standing {
    Standing {
        driver_id: driver.driver_id,
        driver_name: driver.name.clone(),
        mountain_points,
        rally_points,
        total_points: mountain_points + rally_points,
        rank: 0,
        previous_positions: previous
            .map(|p| p.previous_positions.clone())
            .unwrap_or_default(),
        position_change: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::StandingCategory;
    use crate::models::DriverRole;
    use uuid::Uuid;

    fn driver(name: &str) -> Driver {
        Driver {
            driver_id: Uuid::new_v4(),
            name: name.to_string(),
            team: None,
            car_model: None,
            race_number: None,
            role: DriverRole::Driver,
            championship_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn totals_are_the_sum_of_both_disciplines() {
        let standing = build_standing(&driver("Martin"), 25, 18, None);
        assert_eq!(standing.total_points, 43);
        assert_eq!(standing.rank, 0);
        assert_eq!(standing.position_change, 0);
        assert!(standing.previous_positions.is_empty());
    }

    #[test]
    fn previous_slots_are_copied_verbatim() {
        let d = driver("Martin");
        let mut previous = build_standing(&d, 0, 0, None);
        previous
            .previous_positions
            .insert(StandingCategory::General, 2);
        previous
            .previous_positions
            .insert(StandingCategory::Rally, 5);

        let standing = build_standing(&d, 10, 0, Some(&previous));
        assert_eq!(standing.previous_positions, previous.previous_positions);
    }
}
