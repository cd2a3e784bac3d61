use chrono::{DateTime, Datelike, Timelike, Utc};
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, julday};

use crate::ephemeris::provider::LongitudeProvider;
use crate::error::{LunaError, Result};
use crate::zodiac::Body;

/// Use Swiss Ephemeris data files
const FLG_SWIEPH: i32 = 2;
/// Built-in analytic Moshier ephemeris, no data files needed
const FLG_MOSEPH: i32 = 4;
/// Gregorian calendar for julday
const GREG_CAL: i32 = 1;

/// Environment fallback for the data directory
pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";

/// Search path the Swiss Ephemeris library reads on its first calculation
const LIBRARY_PATH_ENV: &str = "SE_EPHE_PATH";

/// Years covered by one Swiss data file
const FILE_SPAN_YEARS: i32 = 600;

/// Swiss Ephemeris body codes
fn body_code(body: Body) -> u32 {
    match body {
        Body::Sun => 0,
        Body::Moon => 1,
        Body::Mercury => 2,
        Body::Venus => 3,
        Body::Mars => 4,
        Body::Jupiter => 5,
        Body::Saturn => 6,
        Body::Uranus => 7,
        Body::Neptune => 8,
        Body::Pluto => 9,
    }
}

/// Data files needed for `body` in `year`: `sepl_18.se1` holds the planets
/// for 1800-2399, `semo_18.se1` the Moon. Years before 0 use `seplm06` etc.
pub fn data_file_name(body: Body, year: i32) -> String {
    let prefix = if body == Body::Moon { "semo" } else { "sepl" };
    let century = year.div_euclid(FILE_SPAN_YEARS) * 6;
    if century < 0 {
        format!("{}m{:02}.se1", prefix, -century)
    } else {
        format!("{}_{:02}.se1", prefix, century)
    }
}

fn unavailable(path: &Path, message: impl Into<String>) -> LunaError {
    LunaError::EphemerisUnavailable {
        path: path.display().to_string(),
        message: message.into(),
    }
}

fn has_data_files(dir: &Path) -> Result<bool> {
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name();
        if name.to_string_lossy().ends_with(".se1") {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Process-wide ephemeris handle.
///
/// Opened once by the entry point and lent to every computation. The data
/// directory is published to the library on open and withdrawn on drop.
#[derive(Debug)]
pub struct SwissEphemeris {
    ephemeris_path: Option<PathBuf>,
    flags: i32,
    /// Whether open set `SE_EPHE_PATH`, so drop must clear it
    owns_library_path: bool,
}

impl SwissEphemeris {
    /// Open the ephemeris.
    ///
    /// With an explicit path (or `SWISS_EPHEMERIS_PATH`) the directory must
    /// hold Swiss `.se1` data files, and every later calculation requires the
    /// file covering its year. Without a path the Moshier model is used.
    pub fn open(ephemeris_path: Option<PathBuf>) -> Result<Self> {
        let path = ephemeris_path.or_else(|| std::env::var(EPHEMERIS_PATH_ENV).ok().map(PathBuf::from));

        let (flags, owns_library_path) = match &path {
            Some(p) => {
                if !p.is_dir() {
                    return Err(unavailable(
                        p,
                        "Ephemeris directory does not exist. Please ensure Swiss Ephemeris data files are installed.",
                    ));
                }
                if !has_data_files(p)? {
                    return Err(unavailable(p, "No Swiss Ephemeris .se1 data files in directory."));
                }
                // swe_set_ephe_path(NULL) runs on the first calculation and prefers this variable
                std::env::set_var(LIBRARY_PATH_ENV, p);
                (FLG_SWIEPH, true)
            }
            None => (FLG_MOSEPH, false),
        };

        log::info!(
            "Ephemeris opened ({})",
            path.as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in Moshier".to_string())
        );

        Ok(Self {
            ephemeris_path: path,
            flags,
            owns_library_path,
        })
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        self.ephemeris_path.as_deref()
    }

    pub fn uses_data_files(&self) -> bool {
        self.flags == FLG_SWIEPH
    }

    /// Refuse instants whose data file is absent; the library would otherwise
    /// fall back to Moshier without telling us.
    fn check_coverage(&self, body: Body, instant: DateTime<Utc>) -> Result<()> {
        let Some(dir) = self.ephemeris_path.as_deref() else {
            return Ok(());
        };
        let file = data_file_name(body, instant.year());
        if !dir.join(&file).is_file() {
            return Err(unavailable(dir, format!("Missing data file {} for {}", file, instant)));
        }
        Ok(())
    }
}

impl LongitudeProvider for SwissEphemeris {
    fn longitude(&self, body: Body, instant: DateTime<Utc>) -> Result<f64> {
        if self.uses_data_files() {
            self.check_coverage(body, instant)?;
        }
        let jd = datetime_to_julian_day(instant);
        let result = calc_ut(jd, body_code(body), self.flags as u32).map_err(|e| {
            LunaError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;
        Ok(result.out[0])
    }
}

impl Drop for SwissEphemeris {
    fn drop(&mut self) {
        if self.owns_library_path {
            std::env::remove_var(LIBRARY_PATH_ENV);
        }
        log::debug!("Ephemeris handle released");
    }
}

/// Convert UTC datetime to Julian Day (UT)
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREG_CAL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_missing_path_is_unavailable() {
        let err = SwissEphemeris::open(Some(PathBuf::from("/nonexistent/luna/ephe"))).unwrap_err();
        assert!(err.is_ephemeris_failure());
        assert!(matches!(err, LunaError::EphemerisUnavailable { .. }));
    }

    #[test]
    fn test_empty_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = SwissEphemeris::open(Some(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, LunaError::EphemerisUnavailable { .. }));
    }

    #[test]
    fn test_plain_file_is_unavailable() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = SwissEphemeris::open(Some(file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, LunaError::EphemerisUnavailable { .. }));
    }

    #[test]
    fn test_uncovered_year_is_unavailable_before_calculation() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("sepl_18.se1"), b"").unwrap();
        std::fs::write(dir.path().join("semo_18.se1"), b"").unwrap();

        let ephemeris = SwissEphemeris::open(Some(dir.path().to_path_buf())).unwrap();
        assert!(ephemeris.uses_data_files());
        assert_eq!(ephemeris.ephemeris_path(), Some(dir.path()));

        let medieval = Utc.with_ymd_and_hms(1500, 3, 1, 0, 0, 0).unwrap();
        let err = ephemeris.longitude(Body::Moon, medieval).unwrap_err();
        assert!(matches!(err, LunaError::EphemerisUnavailable { .. }));
        assert!(err.to_string().contains("semo_12.se1"));
    }

    #[test]
    fn test_data_file_names() {
        assert_eq!(data_file_name(Body::Sun, 1968), "sepl_18.se1");
        assert_eq!(data_file_name(Body::Moon, 2100), "semo_18.se1");
        assert_eq!(data_file_name(Body::Pluto, 1799), "sepl_12.se1");
        assert_eq!(data_file_name(Body::Mars, 2400), "sepl_24.se1");
        assert_eq!(data_file_name(Body::Venus, -1), "seplm06.se1");
    }

    #[test]
    fn test_julian_day_j2000() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert!((datetime_to_julian_day(dt) - 2_451_545.0).abs() < 1e-6);
    }

    #[test]
    fn test_body_codes_are_distinct() {
        let mut codes: Vec<u32> = Body::ALL.iter().map(|b| body_code(*b)).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }
}
