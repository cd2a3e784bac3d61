//! Natal and transit horoscope readings, sign compatibility, message cards and
//! the chart wheel renderer.

pub mod cards;
pub mod chart;
pub mod compat;
pub mod ephemeris;
pub mod error;
pub mod interpret;
pub mod reading;
pub mod rendering;
pub mod time;
pub mod zodiac;

pub use chart::Chart;
pub use ephemeris::{LongitudeProvider, Positions, SwissEphemeris};
pub use error::{LunaError, Result};
pub use time::TimezoneChoice;
pub use zodiac::{build_houses, map_longitude, Body, Element, House, Placement, Sign};
