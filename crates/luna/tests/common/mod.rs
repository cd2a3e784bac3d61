#![allow(dead_code)]

use chrono::{DateTime, Utc};
use luna::{Body, LongitudeProvider, LunaError, Result};
use std::cell::RefCell;

/// Provider returning fixed longitudes and recording every request
pub struct RecordingProvider {
    pub longitudes: [f64; 10],
    pub calls: RefCell<Vec<(Body, DateTime<Utc>)>>,
}

impl RecordingProvider {
    pub fn new(longitudes: [f64; 10]) -> Self {
        Self {
            longitudes,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Sun 65° (Gemini), Moon 40° (Taurus), planets spread around the wheel
    pub fn sample() -> Self {
        Self::new([65.0, 40.0, 80.5, 20.25, -10.0, 190.0, 300.0, 410.0, 355.0, 235.75])
    }

    pub fn instants(&self) -> Vec<DateTime<Utc>> {
        let mut seen: Vec<DateTime<Utc>> = Vec::new();
        for (_, at) in self.calls.borrow().iter() {
            if !seen.contains(at) {
                seen.push(*at);
            }
        }
        seen
    }
}

impl LongitudeProvider for RecordingProvider {
    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64> {
        self.calls.borrow_mut().push((body, instant));
        let index = Body::ALL.iter().position(|b| *b == body).unwrap_or(0);
        Ok(self.longitudes[index])
    }
}

/// Provider whose backing data is missing
pub struct UnavailableProvider;

impl LongitudeProvider for UnavailableProvider {
    fn longitude(&self, _body: Body, _instant: DateTime<Utc>) -> Result<f64> {
        Err(LunaError::EphemerisUnavailable {
            path: "/missing".to_string(),
            message: "no data".to_string(),
        })
    }
}
