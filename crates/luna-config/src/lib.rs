use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_IMAGE_SIZE: u32 = 560;
pub const MIN_IMAGE_SIZE: u32 = 200;
pub const MAX_IMAGE_SIZE: u32 = 4000;
pub const DEFAULT_OUTPUT_FILE: &str = "luna_horoscope.png";
pub const DEFAULT_TIMEZONE: &str = "jst";

/// Probed in order when no explicit config path is given.
pub const CONFIG_PATHS: [&str; 2] = ["configs/luna.toml", "../../configs/luna.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct LunaSettings {
    /// Swiss Ephemeris data directory; `None` selects the built-in Moshier model
    pub ephemeris_path: Option<PathBuf>,
    pub image_size: u32,
    pub output_file: PathBuf,
    /// `jst` or `utc`
    pub timezone: String,
}

impl Default for LunaSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            image_size: DEFAULT_IMAGE_SIZE,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LunaToml {
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default = "default_image_size")]
    image_size: u32,
    #[serde(default = "default_output_file")]
    output_file: PathBuf,
    #[serde(default = "default_timezone")]
    timezone: String,
}

fn default_image_size() -> u32 {
    DEFAULT_IMAGE_SIZE
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    luna: Option<LunaToml>,
}

/// Read the config text from `explicit`, or the first common relative path that exists.
///
/// `Ok(None)` means no file was found and defaults apply. An explicit path must exist.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    for p in &CONFIG_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

/// Parse `[luna]` settings from TOML text. A missing table yields defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<LunaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse luna.toml: {e}"))?;
    let Some(cfg) = root.luna else {
        return Ok(LunaSettings::default());
    };
    let LunaToml {
        ephemeris_path,
        image_size,
        output_file,
        timezone,
    } = cfg;

    if !(MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&image_size) {
        anyhow::bail!(
            "luna.image_size must be between {} and {} (got {})",
            MIN_IMAGE_SIZE,
            MAX_IMAGE_SIZE,
            image_size
        );
    }
    let timezone = timezone.trim().to_ascii_lowercase();
    if timezone != "jst" && timezone != "utc" {
        anyhow::bail!("luna.timezone must be \"jst\" or \"utc\" (got {:?})", timezone);
    }
    if output_file.as_os_str().is_empty() {
        anyhow::bail!("luna.output_file must not be empty");
    }

    Ok(LunaSettings {
        ephemeris_path,
        image_size,
        output_file,
        timezone,
    })
}

/// Load settings from `explicit` or the probed default paths.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<LunaSettings> {
    match read_config_text(explicit)? {
        Some((path, text)) => {
            log::info!("Loading config from {}", path.display());
            parse_settings(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))
        }
        None => {
            log::debug!("No luna.toml found in {:?}, using defaults", CONFIG_PATHS);
            Ok(LunaSettings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), LunaSettings::default());
    }

    #[test]
    fn test_full_table() {
        let text = r#"
[luna]
ephemeris_path = "/opt/ephe"
image_size = 800
output_file = "chart.png"
timezone = "UTC"
"#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/opt/ephe")));
        assert_eq!(settings.image_size, 800);
        assert_eq!(settings.output_file, PathBuf::from("chart.png"));
        assert_eq!(settings.timezone, "utc");
    }

    #[test]
    fn test_partial_table_fills_defaults() {
        let settings = parse_settings("[luna]\nimage_size = 300\n").unwrap();
        assert_eq!(settings.image_size, 300);
        assert_eq!(settings.timezone, "jst");
        assert_eq!(settings.ephemeris_path, None);
    }

    #[test]
    fn test_rejects_out_of_range_size() {
        assert!(parse_settings("[luna]\nimage_size = 100\n").is_err());
        assert!(parse_settings("[luna]\nimage_size = 5000\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let err = parse_settings("[luna]\ntimezone = \"pst\"\n").unwrap_err();
        assert!(err.to_string().contains("timezone"));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[luna]\noutput_file = \"out.png\"").unwrap();
        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.output_file, PathBuf::from("out.png"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
