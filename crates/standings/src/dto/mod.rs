mod snapshot;
mod standing;

pub use snapshot::Snapshot;
pub use standing::{Standing, StandingCategory};
