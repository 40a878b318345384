pub mod builder;
pub mod classifiers;
pub mod evolution;
pub mod points;
pub mod ranking;
pub mod standings;
