//! Longitude to sign/degree mapping.
//!
//! The ecliptic is split into twelve half-open 30° sectors starting at 0° Aries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LunaError, Result};
use crate::zodiac::types::Sign;

/// Width of one zodiac sector in degrees
pub const SIGN_SPAN: f64 = 30.0;

/// A longitude expressed as a sign plus the degree inside that sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub sign: Sign,
    /// 0 <= degree < 30
    pub degree: f64,
}

impl Placement {
    /// Absolute longitude in [0, 360)
    pub fn longitude(&self) -> f64 {
        self.sign.index() as f64 * SIGN_SPAN + self.degree
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}°", self.sign.name_ja(), self.degree)
    }
}

/// Wrap any finite longitude into [0, 360) with a true modulo, so -10 becomes 350.
pub fn normalize_longitude(deg: f64) -> f64 {
    let normalized = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Map a longitude to its sign and degree-within-sign.
pub fn map_longitude(deg: f64) -> Result<Placement> {
    if !deg.is_finite() {
        return Err(LunaError::invalid(
            "longitude",
            format!("expected a finite number of degrees, got {}", deg),
        ));
    }

    let normalized = normalize_longitude(deg);
    let degree = normalized % SIGN_SPAN;
    // normalized - degree is an exact multiple of 30
    let index = ((normalized - degree) / SIGN_SPAN).round() as usize;

    Ok(Placement {
        sign: Sign::from_index(index),
        degree,
    })
}
