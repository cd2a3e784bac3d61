pub mod adapter;
pub mod provider;

pub use adapter::{datetime_to_julian_day, SwissEphemeris, EPHEMERIS_PATH_ENV};
pub use provider::{compute_positions, LongitudeProvider, Positions};
