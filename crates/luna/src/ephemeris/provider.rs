use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{LunaError, Result};
use crate::zodiac::{normalize_longitude, Body};

/// Source of geocentric ecliptic longitudes.
///
/// Implementations may return any finite angle; callers normalize.
pub trait LongitudeProvider {
    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64>;
}

/// Normalized longitudes for every body at one instant, in listing order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub instant: DateTime<Utc>,
    pub longitudes: BTreeMap<Body, f64>,
}

impl Positions {
    pub fn get(&self, body: Body) -> Option<f64> {
        self.longitudes.get(&body).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, f64)> + '_ {
        self.longitudes.iter().map(|(b, lon)| (*b, *lon))
    }
}

/// Evaluate every body at `instant`. The first provider failure aborts the whole set.
pub fn compute_positions(
    provider: &dyn LongitudeProvider,
    instant: DateTime<Utc>,
) -> Result<Positions> {
    let mut longitudes = BTreeMap::new();
    for body in Body::ALL {
        let raw = provider.longitude(body, instant)?;
        if !raw.is_finite() {
            return Err(LunaError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("provider returned non-finite longitude {}", raw),
            });
        }
        log::debug!("{:?} at {}: {:.4}°", body, instant, raw);
        longitudes.insert(body, normalize_longitude(raw));
    }
    Ok(Positions {
        instant,
        longitudes,
    })
}
