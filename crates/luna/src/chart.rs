use serde::{Deserialize, Serialize};

use crate::ephemeris::Positions;
use crate::zodiac::{build_houses, House};

/// Everything the wheel renderer consumes. Built per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub natal: Positions,
    pub transit: Option<Positions>,
    pub houses: Vec<House>,
}

impl Chart {
    pub fn new(natal: Positions, transit: Option<Positions>) -> Self {
        Self {
            natal,
            transit,
            houses: build_houses(),
        }
    }
}
