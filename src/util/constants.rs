// iconsmith - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Icon sizes and file names live here so the generator stays table-driven.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "iconsmith";

/// Application identifier used for the platform config directory.
pub const APP_ID: &str = "iconsmith";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Default locations
// =============================================================================

/// Source SVG rendered when neither the CLI nor config.toml names one.
pub const DEFAULT_SOURCE_PATH: &str = "client/public/favicon.svg";

/// Directory the PNGs are written into by default.
pub const DEFAULT_OUTPUT_DIR: &str = "client/public";

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Icon tables
// =============================================================================

/// Square sizes of the standard PWA icon set, in generation order.
pub const STANDARD_SIZES: &[u32] = &[72, 96, 128, 144, 152, 167, 180, 192, 384, 512];

/// Square sizes of the maskable icon set, in generation order.
pub const MASKABLE_SIZES: &[u32] = &[192, 512];

/// Apple touch icon edge length.
pub const APPLE_TOUCH_SIZE: u32 = 180;

/// Favicon edge lengths, largest first.
pub const FAVICON_SIZES: &[u32] = &[32, 16];

/// Fixed name of the Apple touch icon.
pub const APPLE_TOUCH_FILE_NAME: &str = "apple-touch-icon.png";

/// Name of the optional web-manifest `icons` fragment.
pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// MIME type recorded in the manifest fragment.
pub const PNG_MIME_TYPE: &str = "image/png";

// =============================================================================
// Validation limits
// =============================================================================

/// Largest icon edge accepted from config.toml.
pub const MAX_ICON_SIZE: u32 = 4096;

/// Maximum number of entries in a configured size list.
pub const MAX_SIZES_PER_LIST: usize = 64;

/// Default safe-area padding for maskable icons (fraction of the edge per side).
/// Zero renders maskable icons exactly like standard ones.
pub const DEFAULT_MASKABLE_PADDING: f32 = 0.0;

/// Upper bound on maskable padding; beyond this nothing meaningful is left to draw.
pub const MAX_MASKABLE_PADDING: f32 = 0.4;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config sets one.
/// Kept at "warn" so stdout progress lines are not interleaved with info logs.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
