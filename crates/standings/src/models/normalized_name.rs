use crate::models::DriverRole;

/// A newtype that gives driver names a canonical lookup form so imported
/// result rows can be matched to existing drivers even when casing, accents
/// or spacing differ ("José  DUPONT" vs "jose dupont").
///
/// The role is part of the key: a driver and a co-driver may legitimately
/// share a name and must resolve to different identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedDriverName {
    key: String,
    role: DriverRole,
}

impl NormalizedDriverName {
    /// Creates the canonical form: lower-cased, accents folded to their
    /// base letter, runs of whitespace collapsed to a single space.
    pub fn new(name: &str, role: DriverRole) -> Self {
        let folded: String = name
            .chars()
            .flat_map(char::to_lowercase)
            .map(fold_accent)
            .collect();
        let key = folded.split_whitespace().collect::<Vec<_>>().join(" ");
        Self { key, role }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn role(&self) -> DriverRole {
        self.role
    }
}

/// Maps the accented letters seen in French entry lists to their base
/// letter. Anything else passes through unchanged.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' => 'i',
        'ô' | 'ö' => 'o',
        'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        _ => c,
    }
}
