use std::cmp::Ordering;

use crate::dto::Standing;

/// Which point total orders a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingKey {
    Total,
    Mountain,
    Rally,
}

impl RankingKey {
    pub fn points(self, standing: &Standing) -> u32 {
        match self {
            Self::Total => standing.total_points,
            Self::Mountain => standing.mountain_points,
            Self::Rally => standing.rally_points,
        }
    }
}

/// Sorts by the chosen key, highest first, ties broken by name so equal
/// scores still land in a deterministic order, then assigns dense 1-based
/// ranks. Consumes the input and returns a fresh vector, so the same
/// source list can feed several classifications without aliasing.
pub fn rank_standings(mut standings: Vec<Standing>, key: RankingKey) -> Vec<Standing> {
    standings.sort_by(|a, b| compare(a, b, key));
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index as u32 + 1;
    }
    standings
}

/// Same as [`rank_standings`], after dropping records whose key total is
/// exactly zero: a driver who scored nothing in a discipline does not
/// appear on that discipline's board at all.
pub fn rank_scoring_standings(standings: Vec<Standing>, key: RankingKey) -> Vec<Standing> {
    let scoring = standings
        .into_iter()
        .filter(|standing| key.points(standing) > 0)
        .collect();
    rank_standings(scoring, key)
}

fn compare(a: &Standing, b: &Standing, key: RankingKey) -> Ordering {
    key.points(b)
        .cmp(&key.points(a))
        .then_with(|| a.driver_name.to_lowercase().cmp(&b.driver_name.to_lowercase()))
}
