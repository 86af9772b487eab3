// iconsmith - platform/config.rs
//
// Platform config directory resolution and config.toml loading with
// validation against named constants. Invalid values never abort the run:
// they produce a warning and fall back to the built-in default.

use crate::core::plan::IconSet;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for iconsmith configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/iconsmith/ or %APPDATA%\iconsmith\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Path of config.toml inside the platform config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are ignored so newer config files work with older binaries.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[source]` section.
    pub source: SourceSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Path of the SVG to render.
    pub path: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory the PNGs are written into.
    pub directory: Option<String>,
    /// Standard icon sizes.
    pub sizes: Option<Vec<u32>>,
    /// Maskable icon sizes.
    pub maskable_sizes: Option<Vec<u32>>,
    /// Safe-area inset for maskable icons, fraction of the edge per side.
    pub maskable_padding: Option<f32>,
    /// Also write manifest-icons.json.
    pub write_manifest: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from config.toml.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Source SVG override.
    pub source_path: Option<PathBuf>,
    /// Output directory override.
    pub output_dir: Option<PathBuf>,
    /// Size tables and maskable padding.
    pub icon_set: IconSet,
    /// Write the manifest fragment after the PNGs.
    pub write_manifest: bool,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate config.toml at `path`.
///
/// Returns the validated config and a list of non-fatal warnings.
/// When `required` is false (the file was not named explicitly), a missing
/// file yields defaults and an unreadable or unparseable one yields
/// defaults plus a warning. When `required` is true those cases are errors.
pub fn load_config(path: &Path, required: bool) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let mut warnings: Vec<String> = Vec::new();

    if !required && !path.exists() {
        tracing::debug!(path = %path.display(), "No config.toml found; using defaults");
        return Ok((AppConfig::default(), warnings));
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            };
            if required {
                return Err(err);
            }
            warnings.push(format!("{err}. Using defaults."));
            return Ok((AppConfig::default(), warnings));
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: path.to_path_buf(),
                source: e,
            };
            if required {
                return Err(err);
            }
            warnings.push(format!(
                "{err}. Using defaults. See config.example.toml for the expected format."
            ));
            return Ok((AppConfig::default(), warnings));
        }
    };

    tracing::info!(path = %path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    Ok((config, warnings))
}

/// Validate each field against named constants, accumulating all warnings.
fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Source: path --
    if let Some(path) = raw.source.path.filter(|p| !p.is_empty()) {
        config.source_path = Some(PathBuf::from(path));
    }

    // -- Output: directory --
    if let Some(dir) = raw.output.directory.filter(|d| !d.is_empty()) {
        config.output_dir = Some(PathBuf::from(dir));
    }

    // -- Output: sizes --
    if let Some(sizes) = raw.output.sizes {
        match validate_sizes("output.sizes", &sizes) {
            Ok(()) => config.icon_set.sizes = sizes,
            Err(e) => warnings.push(format!("{e}. Using default {:?}.", constants::STANDARD_SIZES)),
        }
    }

    // -- Output: maskable_sizes (may be empty to skip maskable icons) --
    if let Some(sizes) = raw.output.maskable_sizes {
        let result = if sizes.is_empty() {
            Ok(())
        } else {
            validate_sizes("output.maskable_sizes", &sizes)
        };
        match result {
            Ok(()) => config.icon_set.maskable_sizes = sizes,
            Err(e) => warnings.push(format!("{e}. Using default {:?}.", constants::MASKABLE_SIZES)),
        }
    }

    // -- Output: maskable_padding --
    if let Some(padding) = raw.output.maskable_padding {
        if (0.0..=constants::MAX_MASKABLE_PADDING).contains(&padding) {
            config.icon_set.maskable_padding = padding;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "output.maskable_padding".to_string(),
                value: padding.to_string(),
                expected: format!("0.0-{}", constants::MAX_MASKABLE_PADDING),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_MASKABLE_PADDING
            ));
        }
    }

    // -- Output: write_manifest --
    if let Some(flag) = raw.output.write_manifest {
        config.write_manifest = flag;
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    config
}

/// A size list must be non-empty, bounded in length, and every entry in
/// `1..=MAX_ICON_SIZE`.
fn validate_sizes(field: &str, sizes: &[u32]) -> Result<(), ConfigError> {
    let out_of_range = |value: String, expected: String| ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value,
        expected,
    };

    if sizes.is_empty() || sizes.len() > constants::MAX_SIZES_PER_LIST {
        return Err(out_of_range(
            format!("{} entries", sizes.len()),
            format!("1-{} entries", constants::MAX_SIZES_PER_LIST),
        ));
    }

    if let Some(bad) = sizes
        .iter()
        .find(|s| !(1..=constants::MAX_ICON_SIZE).contains(*s))
    {
        return Err(out_of_range(
            bad.to_string(),
            format!("1-{}", constants::MAX_ICON_SIZE),
        ));
    }

    Ok(())
}
