use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::zodiac::Body;

/// Errors that can occur while building a reading or a chart
#[derive(Error, Debug)]
pub enum LunaError {
    #[error("Invalid {field}: {message}")]
    InvalidInput { field: String, message: String },
    #[error("Ephemeris data not found at path: {path}. {message}")]
    EphemerisUnavailable { path: String, message: String },
    #[error("Failed to calculate longitude for {body:?} at {datetime}: {message}")]
    CalculationFailed {
        body: Body,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("Chart rendering failed: {message}")]
    Render { message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LunaError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        LunaError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for failures of the longitude provider, which abort the whole request
    pub fn is_ephemeris_failure(&self) -> bool {
        matches!(
            self,
            LunaError::EphemerisUnavailable { .. } | LunaError::CalculationFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LunaError>;
