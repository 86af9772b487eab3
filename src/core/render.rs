// iconsmith - core/render.rs
//
// SVG rasterisation. The source is parsed once with usvg, then rendered
// into a fresh tiny-skia pixmap per requested size and encoded as PNG.

use crate::util::constants;
use crate::util::error::RenderError;
use resvg::{tiny_skia, usvg};
use std::path::Path;
use std::sync::Arc;

/// Something that can turn one source image into PNG bytes at any size.
///
/// The generator only depends on this trait so tests can substitute a
/// rasteriser that fails on demand.
pub trait Rasterizer {
    /// Render the source into a `width` x `height` PNG.
    ///
    /// `padding` is the transparent inset kept on every side, as a fraction
    /// of the corresponding edge (0.0 fills the whole canvas).
    fn render_png(&self, width: u32, height: u32, padding: f32) -> Result<Vec<u8>, RenderError>;
}

/// Options controlling how the source SVG is loaded.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Load installed system fonts so `<text>` elements render.
    pub load_system_fonts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
        }
    }
}

/// `Rasterizer` backed by resvg.
pub struct SvgRasterizer {
    tree: usvg::Tree,
}

impl SvgRasterizer {
    /// Read and parse the SVG at `path`.
    pub fn open(path: &Path, options: &RenderOptions) -> Result<Self, RenderError> {
        let data = std::fs::read(path).map_err(|e| RenderError::SourceRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_data(&data, path, options)
    }

    /// Parse SVG bytes. `path` is used for error messages and to resolve
    /// relative `href`s.
    pub fn from_data(data: &[u8], path: &Path, options: &RenderOptions) -> Result<Self, RenderError> {
        let mut opt = usvg::Options {
            resources_dir: path.parent().map(Path::to_path_buf),
            ..usvg::Options::default()
        };
        if options.load_system_fonts {
            Arc::make_mut(&mut opt.fontdb).load_system_fonts();
        }

        let tree = usvg::Tree::from_data(data, &opt).map_err(|e| RenderError::SvgParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = tree.size();
        tracing::debug!(
            path = %path.display(),
            width = size.width(),
            height = size.height(),
            "Parsed source SVG"
        );

        Ok(Self { tree })
    }

    /// Scale the tree uniformly into the padded canvas and center it.
    fn fit_transform(&self, width: u32, height: u32, padding: f32) -> tiny_skia::Transform {
        let size = self.tree.size();
        let inner_w = width as f32 * (1.0 - 2.0 * padding);
        let inner_h = height as f32 * (1.0 - 2.0 * padding);
        let scale = (inner_w / size.width()).min(inner_h / size.height());
        let tx = (width as f32 - size.width() * scale) / 2.0;
        let ty = (height as f32 - size.height() * scale) / 2.0;
        tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty)
    }
}

impl Rasterizer for SvgRasterizer {
    fn render_png(&self, width: u32, height: u32, padding: f32) -> Result<Vec<u8>, RenderError> {
        if !(0.0..=constants::MAX_MASKABLE_PADDING).contains(&padding) {
            return Err(RenderError::InvalidPadding {
                padding,
                max: constants::MAX_MASKABLE_PADDING,
            });
        }

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(RenderError::PixmapAlloc { width, height })?;

        let transform = self.fit_transform(width, height, padding);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        pixmap.encode_png().map_err(|e| RenderError::PngEncode {
            width,
            height,
            reason: e.to_string(),
        })
    }
}
