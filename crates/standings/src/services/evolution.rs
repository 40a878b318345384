use crate::dto::{Standing, StandingCategory};

/// Fills in `position_change` against the previous-position slot for
/// `category`, once ranks have been assigned. A missing slot means the
/// driver is a new entrant in that classification and reads as delta zero;
/// renderers that want to show "NEW" check the slot itself.
pub fn apply_evolution(standings: &mut [Standing], category: StandingCategory) {
    for standing in standings.iter_mut() {
        standing.position_change = match standing.previous_positions.get(&category) {
            Some(&previous) => previous as i32 - standing.rank as i32,
            None => 0,
        };
    }
}
