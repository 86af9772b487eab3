// iconsmith - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every failure keeps the path or size it concerns so the final
// message tells the operator exactly where the run stopped.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all iconsmith operations.
#[derive(Debug)]
pub enum IconsmithError {
    /// Loading or rendering the source SVG failed.
    Render(RenderError),

    /// Writing one of the generated outputs failed.
    Generate(GenerateError),

    /// Configuration loading failed.
    Config(ConfigError),
}

impl fmt::Display for IconsmithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "Rasterization failed: {e}"),
            Self::Generate(e) => write!(f, "Icon generation failed: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for IconsmithError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Generate(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors raised while parsing the SVG or rasterising it.
#[derive(Debug)]
pub enum RenderError {
    /// The source file could not be read.
    SourceRead { path: PathBuf, source: io::Error },

    /// The source is not a valid SVG document.
    SvgParse {
        path: PathBuf,
        source: resvg::usvg::Error,
    },

    /// The requested safe-area inset leaves no room to draw.
    InvalidPadding { padding: f32, max: f32 },

    /// A pixmap of the requested size could not be allocated.
    PixmapAlloc { width: u32, height: u32 },

    /// The rendered pixmap could not be encoded as PNG.
    PngEncode {
        width: u32,
        height: u32,
        reason: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceRead { path, source } => {
                write!(f, "cannot read SVG '{}': {source}", path.display())
            }
            Self::SvgParse { path, source } => {
                write!(f, "cannot parse SVG '{}': {source}", path.display())
            }
            Self::InvalidPadding { padding, max } => {
                write!(f, "padding {padding} is outside the supported range 0-{max}")
            }
            Self::PixmapAlloc { width, height } => {
                write!(f, "cannot allocate a {width}x{height} pixmap")
            }
            Self::PngEncode {
                width,
                height,
                reason,
            } => write!(f, "cannot encode {width}x{height} PNG: {reason}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceRead { source, .. } => Some(source),
            Self::SvgParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RenderError> for IconsmithError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Generate errors
// ---------------------------------------------------------------------------

/// Errors raised while producing the output files.
#[derive(Debug)]
pub enum GenerateError {
    /// Rendering a specific target failed.
    Render {
        file_name: String,
        source: RenderError,
    },

    /// The output directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// A PNG could not be written.
    Write { path: PathBuf, source: io::Error },

    /// The manifest fragment could not be serialised or written.
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render { file_name, source } => {
                write!(f, "rendering '{file_name}': {source}")
            }
            Self::CreateDir { path, source } => write!(
                f,
                "cannot create output directory '{}': {source}",
                path.display()
            ),
            Self::Write { path, source } => {
                write!(f, "cannot write '{}': {source}", path.display())
            }
            Self::Manifest { path, source } => {
                write!(f, "cannot write manifest '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render { source, .. } => Some(source),
            Self::CreateDir { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Manifest { source, .. } => Some(source),
        }
    }
}

impl From<GenerateError> for IconsmithError {
    fn from(e: GenerateError) -> Self {
        Self::Generate(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for IconsmithError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for iconsmith results.
pub type Result<T> = std::result::Result<T, IconsmithError>;
