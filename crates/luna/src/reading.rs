//! End-to-end readings: validated user input in, text and chart out.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::Chart;
use crate::compat::{compatibility, compatibility_bucket, CompatibilityBucket};
use crate::ephemeris::{compute_positions, LongitudeProvider, Positions};
use crate::error::{LunaError, Result};
use crate::interpret::{house_message, moon_message, planet_message, simple_compare, sun_message};
use crate::time::{
    local_to_utc, validate_birth_date, validate_clock, validate_transit_date, TimezoneChoice,
};
use crate::zodiac::{map_longitude, Body, Placement, Sign};

/// Transit positions are read at local noon of the chosen day
pub const TRANSIT_HOUR: u32 = 12;

/// Whose chart is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectMode {
    #[default]
    OwnReading,
    OtherPerson,
}

impl SubjectMode {
    /// Label naming who the reading is for
    pub fn target_label(self, name: &str) -> String {
        match self {
            SubjectMode::OwnReading => "あなた".to_string(),
            SubjectMode::OtherPerson if name.is_empty() => "この方".to_string(),
            SubjectMode::OtherPerson => name.to_string(),
        }
    }
}

/// Birth data for a natal reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub mode: SubjectMode,
    pub name: String,
    pub birth_date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub timezone: TimezoneChoice,
}

impl BirthInput {
    /// Pre-filled input for a subject mode
    pub fn with_defaults(mode: SubjectMode) -> Self {
        let (name, (y, m, d), hour) = match mode {
            SubjectMode::OwnReading => ("Luna", (1968, 5, 27), 0),
            SubjectMode::OtherPerson => ("", (1990, 1, 1), 12),
        };
        Self {
            mode,
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
            hour,
            minute: 0,
            timezone: TimezoneChoice::Jst,
        }
    }

    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        validate_birth_date(self.birth_date, today)?;
        validate_clock(self.hour, self.minute)
    }

    pub fn instant(&self) -> Result<DateTime<Utc>> {
        local_to_utc(self.birth_date, self.hour, self.minute, self.timezone)
    }
}

/// Instant used for the transit layer of a reading
pub fn transit_instant(date: NaiveDate, tz: TimezoneChoice) -> Result<DateTime<Utc>> {
    local_to_utc(date, TRANSIT_HOUR, 0, tz)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    pub placement: Placement,
    /// Formatted as "牡羊座 10.00°"
    pub text: String,
}

impl BodyPlacement {
    fn new(body: Body, longitude: f64) -> Result<Self> {
        let placement = map_longitude(longitude)?;
        Ok(Self {
            body,
            placement,
            text: placement.to_string(),
        })
    }
}

fn placement_of(positions: &Positions, body: Body) -> Result<BodyPlacement> {
    let lon = positions.get(body).ok_or_else(|| LunaError::CalculationFailed {
        body,
        datetime: positions.instant,
        message: "body missing from position set".to_string(),
    })?;
    BodyPlacement::new(body, lon)
}

/// Every body in listing order with its formatted placement
pub fn placement_listing(positions: &Positions) -> Result<Vec<BodyPlacement>> {
    positions
        .iter()
        .map(|(body, lon)| BodyPlacement::new(body, lon))
        .collect()
}

/// Mercury through Pluto, formatted
pub fn planet_placements(positions: &Positions) -> Result<Vec<BodyPlacement>> {
    Body::PLANETS
        .iter()
        .map(|body| placement_of(positions, *body))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetNote {
    pub placement: BodyPlacement,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalReading {
    pub target_label: String,
    pub input: BirthInput,
    pub transit_date: NaiveDate,

    pub sun: BodyPlacement,
    pub sun_message: String,
    pub moon: BodyPlacement,
    pub moon_message: String,

    pub transit_sun: BodyPlacement,
    pub transit_moon: BodyPlacement,
    pub sun_comparison: String,
    pub moon_comparison: String,
    pub major_transits: Vec<BodyPlacement>,

    pub planets: Vec<PlanetNote>,
    pub house_messages: Vec<String>,

    pub natal_listing: Vec<BodyPlacement>,
    pub transit_listing: Vec<BodyPlacement>,

    pub chart: Chart,
}

/// Build the natal + transit reading. Input is validated before the ephemeris is touched.
pub fn natal_reading(
    provider: &dyn LongitudeProvider,
    input: &BirthInput,
    transit_date: NaiveDate,
    today: NaiveDate,
) -> Result<NatalReading> {
    input.validate(today)?;
    validate_transit_date(transit_date)?;

    let natal_at = input.instant()?;
    let transit_at = transit_instant(transit_date, input.timezone)?;
    log::info!("Natal instant {}, transit instant {}", natal_at, transit_at);

    let natal = compute_positions(provider, natal_at)?;
    let transit = compute_positions(provider, transit_at)?;

    let sun = placement_of(&natal, Body::Sun)?;
    let moon = placement_of(&natal, Body::Moon)?;
    let transit_sun = placement_of(&transit, Body::Sun)?;
    let transit_moon = placement_of(&transit, Body::Moon)?;

    let sun_comparison = simple_compare(&sun.text, &transit_sun.text, Body::Sun.name_ja());
    let moon_comparison = simple_compare(&moon.text, &transit_moon.text, Body::Moon.name_ja());

    let major_transits = Body::MAJOR_TRANSITS
        .iter()
        .map(|b| placement_of(&transit, *b))
        .collect::<Result<Vec<_>>>()?;

    let planets = planet_placements(&natal)?
        .into_iter()
        .map(|placement| PlanetNote {
            message: planet_message(placement.body).to_string(),
            placement,
        })
        .collect();

    let chart = Chart::new(natal, Some(transit));
    let house_messages = chart
        .houses
        .iter()
        .map(|h| house_message(h.number, h.sign))
        .collect();

    let natal_listing = placement_listing(&chart.natal)?;
    let transit_listing = match &chart.transit {
        Some(t) => placement_listing(t)?,
        None => Vec::new(),
    };

    Ok(NatalReading {
        target_label: input.mode.target_label(&input.name),
        input: input.clone(),
        transit_date,
        sun_message: sun_message(sun.placement.sign).to_string(),
        sun,
        moon_message: moon_message(moon.placement.sign).to_string(),
        moon,
        transit_sun,
        transit_moon,
        sun_comparison,
        moon_comparison,
        major_transits,
        planets,
        house_messages,
        natal_listing,
        transit_listing,
        chart,
    })
}

/// One side of a compatibility reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerSigns {
    pub display_name: String,
    pub birth_date: NaiveDate,
    pub sun: Sign,
    pub moon: Sign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReading {
    pub first: PartnerSigns,
    pub second: PartnerSigns,
    pub bucket: CompatibilityBucket,
    pub message: String,
}

/// Sun and Moon signs for a birthdate, read at local noon JST
pub fn signs_for_date(provider: &dyn LongitudeProvider, date: NaiveDate) -> Result<(Sign, Sign)> {
    let at = local_to_utc(date, 12, 0, TimezoneChoice::Jst)?;
    let sun = map_longitude(provider.longitude(Body::Sun, at)?)?;
    let moon = map_longitude(provider.longitude(Body::Moon, at)?)?;
    Ok((sun.sign, moon.sign))
}

fn partner(
    provider: &dyn LongitudeProvider,
    input: &PartnerInput,
    fallback_name: &str,
) -> Result<PartnerSigns> {
    let (sun, moon) = signs_for_date(provider, input.birth_date)?;
    let display_name = if input.name.is_empty() {
        fallback_name.to_string()
    } else {
        input.name.clone()
    };
    Ok(PartnerSigns {
        display_name,
        birth_date: input.birth_date,
        sun,
        moon,
    })
}

pub fn compatibility_reading(
    provider: &dyn LongitudeProvider,
    first: &PartnerInput,
    second: &PartnerInput,
    today: NaiveDate,
) -> Result<CompatibilityReading> {
    // Both dates are checked before the ephemeris is touched
    validate_birth_date(first.birth_date, today)?;
    validate_birth_date(second.birth_date, today)?;

    let first = partner(provider, first, "Aさん")?;
    let second = partner(provider, second, "Bさん")?;

    let message = compatibility(
        first.sun,
        second.sun,
        first.moon,
        second.moon,
        &first.display_name,
        &second.display_name,
    );

    Ok(CompatibilityReading {
        bucket: compatibility_bucket(first.sun, second.sun),
        message,
        first,
        second,
    })
}
