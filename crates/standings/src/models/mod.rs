mod driver;
mod normalized_name;
mod race;
mod race_result;

pub use driver::{Driver, DriverRole};
pub use normalized_name::NormalizedDriverName;
pub use race::{Discipline, Race};
pub use race_result::RaceResult;
