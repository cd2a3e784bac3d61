//! Local birth data to UTC instants, and the accepted input ranges.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LunaError, Result};

/// The two supported birthplace timezones. Fixed offsets only, no DST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimezoneChoice {
    /// Japan Standard Time, UTC+9
    #[default]
    Jst,
    Utc,
}

impl TimezoneChoice {
    pub fn offset_hours(self) -> i64 {
        match self {
            TimezoneChoice::Jst => 9,
            TimezoneChoice::Utc => 0,
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            TimezoneChoice::Jst => "日本（JST = UTC+9）",
            TimezoneChoice::Utc => "世界時で計算（UTC・よく分からない場合）",
        }
    }
}

impl FromStr for TimezoneChoice {
    type Err = LunaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "jst" | "japan" | "+9" | "utc+9" => Ok(TimezoneChoice::Jst),
            "utc" | "gmt" | "0" | "+0" => Ok(TimezoneChoice::Utc),
            other => Err(LunaError::invalid(
                "timezone",
                format!("unknown timezone '{}', expected 'jst' or 'utc'", other),
            )),
        }
    }
}

impl fmt::Display for TimezoneChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimezoneChoice::Jst => f.write_str("jst"),
            TimezoneChoice::Utc => f.write_str("utc"),
        }
    }
}

pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn latest_transit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2100, 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Convert a wall-clock birth time to the UTC instant handed to the ephemeris.
pub fn local_to_utc(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    tz: TimezoneChoice,
) -> Result<DateTime<Utc>> {
    validate_clock(hour, minute)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| LunaError::invalid("time", format!("{:02}:{:02}", hour, minute)))?;
    let local = date.and_time(time);
    let utc = local - Duration::hours(tz.offset_hours());
    Ok(Utc.from_utc_datetime(&utc))
}

pub fn validate_clock(hour: u32, minute: u32) -> Result<()> {
    if hour > 23 {
        return Err(LunaError::invalid("hour", format!("{} is outside 0-23", hour)));
    }
    if minute > 59 {
        return Err(LunaError::invalid("minute", format!("{} is outside 0-59", minute)));
    }
    Ok(())
}

/// Birth dates run from 1900-01-01 up to and including `today`.
pub fn validate_birth_date(date: NaiveDate, today: NaiveDate) -> Result<()> {
    validate_range("birth date", date, earliest_date(), today)
}

/// Transit dates run from 1900-01-01 to 2100-12-31.
pub fn validate_transit_date(date: NaiveDate) -> Result<()> {
    validate_range("transit date", date, earliest_date(), latest_transit_date())
}

fn validate_range(field: &str, date: NaiveDate, min: NaiveDate, max: NaiveDate) -> Result<()> {
    if date < min || date > max {
        return Err(LunaError::invalid(
            field,
            format!("{} is outside {} .. {}", date, min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_jst_midnight_is_previous_day_utc() {
        let utc = local_to_utc(date(1968, 5, 27), 0, 0, TimezoneChoice::Jst).unwrap();
        assert_eq!((utc.year(), utc.month(), utc.day()), (1968, 5, 26));
        assert_eq!((utc.hour(), utc.minute()), (15, 0));
    }

    #[test]
    fn test_utc_choice_is_identity() {
        let utc = local_to_utc(date(2000, 1, 1), 12, 30, TimezoneChoice::Utc).unwrap();
        assert_eq!((utc.hour(), utc.minute()), (12, 30));
    }

    #[test]
    fn test_out_of_range_clock() {
        assert!(local_to_utc(date(2000, 1, 1), 24, 0, TimezoneChoice::Utc).is_err());
        assert!(local_to_utc(date(2000, 1, 1), 0, 60, TimezoneChoice::Utc).is_err());
    }

    #[test]
    fn test_birth_date_bounds() {
        let today = date(2024, 6, 1);
        assert!(validate_birth_date(date(1900, 1, 1), today).is_ok());
        assert!(validate_birth_date(today, today).is_ok());
        assert!(validate_birth_date(date(1899, 12, 31), today).is_err());
        assert!(validate_birth_date(date(2024, 6, 2), today).is_err());
    }

    #[test]
    fn test_transit_date_bounds() {
        assert!(validate_transit_date(date(2100, 12, 31)).is_ok());
        assert!(validate_transit_date(date(2101, 1, 1)).is_err());
        assert!(validate_transit_date(date(1899, 12, 31)).is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!("JST".parse::<TimezoneChoice>().unwrap(), TimezoneChoice::Jst);
        assert_eq!("utc".parse::<TimezoneChoice>().unwrap(), TimezoneChoice::Utc);
        assert!("pst".parse::<TimezoneChoice>().is_err());
    }
}
