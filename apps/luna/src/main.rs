mod output;

use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use luna::reading::{compatibility_reading, natal_reading, BirthInput, PartnerInput, SubjectMode};
use luna::rendering::{export_png, render, VisualConfig};
use luna::{SwissEphemeris, TimezoneChoice};
use luna_config::LunaSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "luna",
    about = "Natal and transit horoscope readings with a chart wheel image",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: configs/luna.toml if present)
    #[arg(long, global = true, env = "LUNA_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Debug logging
    #[arg(long, global = true, short = 'v')]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Reading for yourself
    Own,
    /// Reading for someone else
    Other,
}

impl From<Mode> for SubjectMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Own => SubjectMode::OwnReading,
            Mode::Other => SubjectMode::OtherPerson,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart, today's transits and the chart wheel image
    Chart {
        #[arg(long, value_enum, default_value = "own")]
        mode: Mode,

        /// Display name (defaults depend on the mode)
        #[arg(long)]
        name: Option<String>,

        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth_date: Option<NaiveDate>,

        #[arg(long)]
        hour: Option<u32>,

        #[arg(long)]
        minute: Option<u32>,

        /// Birthplace timezone: jst or utc
        #[arg(long)]
        tz: Option<TimezoneChoice>,

        /// Transit date, YYYY-MM-DD (default: today)
        #[arg(long)]
        transit_date: Option<NaiveDate>,

        /// PNG path (default from config)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Skip writing the chart image
        #[arg(long)]
        no_image: bool,
    },

    /// Sun-sign compatibility of two people
    Compat {
        #[arg(long, default_value = "")]
        name1: String,

        /// First birth date, YYYY-MM-DD
        #[arg(long)]
        date1: NaiveDate,

        #[arg(long, default_value = "")]
        name2: String,

        /// Second birth date, YYYY-MM-DD
        #[arg(long)]
        date2: NaiveDate,
    },

    /// Draw a message card
    Card {
        /// Fixed seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = luna_config::load_settings(cli.config.as_deref())?;
    log::debug!("Settings: {:?}", settings);
    let json = cli.json;

    match cli.command {
        Commands::Chart {
            mode,
            name,
            birth_date,
            hour,
            minute,
            tz,
            transit_date,
            output,
            no_image,
        } => {
            let default_tz: TimezoneChoice = settings.timezone.parse()?;
            let mut input = BirthInput::with_defaults(mode.into());
            input.timezone = tz.unwrap_or(default_tz);
            if let Some(name) = name {
                input.name = name;
            }
            if let Some(date) = birth_date {
                input.birth_date = date;
            }
            if let Some(hour) = hour {
                input.hour = hour;
            }
            if let Some(minute) = minute {
                input.minute = minute;
            }

            let today = today_in(input.timezone);
            let transit_date = transit_date.unwrap_or(today);

            let ephemeris = open_ephemeris(&settings)?;
            let reading = natal_reading(&ephemeris, &input, transit_date, today)?;

            let image = if no_image {
                None
            } else {
                let path = output.unwrap_or_else(|| settings.output_file.clone());
                let spec = render(&reading.chart, &VisualConfig::default(), settings.image_size);
                export_png(&spec, &path)
                    .with_context(|| format!("Failed to write chart image {}", path.display()))?;
                Some(path)
            };

            if json {
                output::print_json(&reading)?;
            } else {
                output::print_reading(&reading);
                if let Some(path) = image {
                    println!("\nチャート画像: {}", path.display());
                }
            }
        }

        Commands::Compat {
            name1,
            date1,
            name2,
            date2,
        } => {
            let ephemeris = open_ephemeris(&settings)?;
            let first = PartnerInput {
                name: name1,
                birth_date: date1,
            };
            let second = PartnerInput {
                name: name2,
                birth_date: date2,
            };
            let today = today_in(TimezoneChoice::Jst);
            let reading = compatibility_reading(&ephemeris, &first, &second, today)?;

            if json {
                output::print_json(&reading)?;
            } else {
                output::print_compatibility(&reading);
            }
        }

        Commands::Card { seed } => {
            let card = match seed {
                Some(seed) => luna::cards::draw_card(&mut StdRng::seed_from_u64(seed)),
                None => luna::cards::draw_card(&mut rand::thread_rng()),
            };

            if json {
                output::print_json(card)?;
            } else {
                output::print_card(card);
            }
        }
    }

    Ok(())
}

fn open_ephemeris(settings: &LunaSettings) -> anyhow::Result<SwissEphemeris> {
    SwissEphemeris::open(settings.ephemeris_path.clone()).context("Failed to open the ephemeris")
}

/// Calendar date right now at the given fixed offset
fn today_in(tz: TimezoneChoice) -> NaiveDate {
    (Utc::now() + Duration::hours(tz.offset_hours())).date_naive()
}
