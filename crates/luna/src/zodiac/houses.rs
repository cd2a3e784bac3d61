//! Symbolic equal houses.
//!
//! House 1 always starts at 0° Aries; the wheel is never rotated to an ascendant.

use serde::{Deserialize, Serialize};

use crate::zodiac::mapper::SIGN_SPAN;
use crate::zodiac::types::Sign;

pub const HOUSE_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1..=12
    pub number: u8,
    /// Cusp longitude in degrees
    pub cusp: f64,
    pub sign: Sign,
}

pub fn build_houses() -> Vec<House> {
    (0..HOUSE_COUNT)
        .map(|i| House {
            number: (i + 1) as u8,
            cusp: i as f64 * SIGN_SPAN,
            sign: Sign::from_index(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last_house() {
        let houses = build_houses();
        assert_eq!(houses.len(), 12);
        assert_eq!(houses[0].number, 1);
        assert_eq!(houses[0].cusp, 0.0);
        assert_eq!(houses[0].sign, Sign::Aries);
        assert_eq!(houses[11].number, 12);
        assert_eq!(houses[11].cusp, 330.0);
        assert_eq!(houses[11].sign, Sign::Pisces);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(build_houses(), build_houses());
    }
}
