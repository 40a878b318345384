use crate::models::{Driver, DriverRole};

/// Karting sub-classes, matched fuzzily against the free-text category
/// label carried by each result.
///
/// The same predicate serves both aggregation and tab grouping. If the two
/// call sites ever diverged, a driver could be listed under a tab whose
/// totals do not include their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KartingCategory {
    Mini60,
    SeniorMasterGentleman,
    Kz2,
}

impl KartingCategory {
    /// Fuzzy match against a result's category label.
    pub fn matches(self, label: &str) -> bool {
        let label = label.to_lowercase();
        match self {
            Self::Mini60 => label.contains("mini") && label.contains("60"),
            Self::SeniorMasterGentleman => ["senior", "master", "gentleman"]
                .iter()
                .any(|token| label.contains(token)),
            Self::Kz2 => label.contains("kz2") || label.contains("kz 2"),
        }
    }

    /// Resolves a label to a sub-class, probing mini-60, then
    /// senior/master/gentleman, then kz2. First match wins, so ambiguous
    /// labels like "Kz-2 Gentleman" resolve the same way everywhere.
    pub fn classify(label: &str) -> Option<Self> {
        [Self::Mini60, Self::SeniorMasterGentleman, Self::Kz2]
            .into_iter()
            .find(|category| category.matches(label))
    }
}

/// A classification restricted to one vehicle model, described by the
/// tokens its designation must contain (e.g. "c2" and "r2" for the
/// Citroën C2 R2 trophy).
#[derive(Debug, Clone)]
pub struct VehicleTrophy {
    tokens: Vec<String>,
}

impl VehicleTrophy {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| token.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Case-insensitive containment of every token.
    pub fn matches(&self, model: &str) -> bool {
        let model = model.to_lowercase();
        !self.tokens.is_empty() && self.tokens.iter().all(|token| model.contains(token))
    }
}

/// Keeps only the drivers holding `role`. Every classification applies
/// this partition before aggregating anything.
pub fn with_role(drivers: &[Driver], role: DriverRole) -> impl Iterator<Item = &Driver> {
    drivers.iter().filter(move |driver| driver.role == role)
}
