// iconsmith - core/generate.rs
//
// Executes an icon plan: render each target in order, write it, report it.
// Fail-fast: the first error stops the run and files already written stay.

use crate::core::plan::{IconKind, IconPlan, IconTarget};
use crate::core::render::Rasterizer;
use crate::util::error::GenerateError;
use std::path::{Path, PathBuf};

/// Progress line emitted once both favicons are written.
pub const FAVICONS_DONE_LINE: &str = "Generated favicon PNGs";

/// Final line emitted after a successful run.
pub const ALL_DONE_LINE: &str = "All icons generated successfully!";

/// Files produced by a run, in the order they were written.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub written: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Render and write every target of `plan` into `out_dir`.
///
/// `progress` receives one human-readable line per confirmation:
/// `Generated <path>` for standard and maskable icons,
/// `Generated apple-touch-icon.png` for the touch icon, and a single
/// combined line after the last favicon.
pub fn generate_icons<R, F>(
    plan: &IconPlan,
    rasterizer: &R,
    out_dir: &Path,
    mut progress: F,
) -> Result<GenerateReport, GenerateError>
where
    R: Rasterizer + ?Sized,
    F: FnMut(&str),
{
    let mut report = GenerateReport::default();
    let mut targets = plan.targets().iter().peekable();

    while let Some(target) = targets.next() {
        let path = write_target(target, rasterizer, out_dir)?;

        match target.kind {
            IconKind::Standard | IconKind::Maskable => {
                progress(&format!("Generated {}", path.display()));
            }
            IconKind::AppleTouch => {
                progress(&format!("Generated {}", target.file_name));
            }
            IconKind::Favicon => {
                let more_favicons = targets
                    .peek()
                    .is_some_and(|next| next.kind == IconKind::Favicon);
                if !more_favicons {
                    progress(FAVICONS_DONE_LINE);
                }
            }
        }

        report.written.push(path);
    }

    tracing::info!(
        count = report.written.len(),
        dir = %out_dir.display(),
        "Icon plan complete"
    );
    Ok(report)
}

fn write_target<R>(target: &IconTarget, rasterizer: &R, out_dir: &Path) -> Result<PathBuf, GenerateError>
where
    R: Rasterizer + ?Sized,
{
    let png = rasterizer
        .render_png(target.width, target.height, target.padding)
        .map_err(|e| GenerateError::Render {
            file_name: target.file_name.clone(),
            source: e,
        })?;

    let path = out_dir.join(&target.file_name);
    std::fs::write(&path, &png).map_err(|e| GenerateError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(
        path = %path.display(),
        kind = target.kind.label(),
        width = target.width,
        height = target.height,
        bytes = png.len(),
        "Wrote icon"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::RenderError;
    use std::cell::RefCell;

    /// Emits a fixed payload and records the sizes it was asked for.
    /// Fails on the `fail_at`-th call when set.
    struct FakeRasterizer {
        calls: RefCell<Vec<(u32, u32)>>,
        fail_at: Option<usize>,
    }

    impl FakeRasterizer {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_at,
            }
        }
    }

    impl Rasterizer for FakeRasterizer {
        fn render_png(&self, width: u32, height: u32, _padding: f32) -> Result<Vec<u8>, RenderError> {
            let mut calls = self.calls.borrow_mut();
            if self.fail_at == Some(calls.len()) {
                return Err(RenderError::PixmapAlloc { width, height });
            }
            calls.push((width, height));
            Ok(format!("{width}x{height}").into_bytes())
        }
    }

    #[test]
    fn test_progress_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let raster = FakeRasterizer::new(None);
        let mut lines = Vec::new();

        let report = generate_icons(&IconPlan::standard(), &raster, dir.path(), |l| {
            lines.push(l.to_string())
        })
        .unwrap();

        assert_eq!(report.written.len(), 15);
        assert_eq!(lines.len(), 14);
        assert_eq!(
            lines[0],
            format!("Generated {}", dir.path().join("icon-72.png").display())
        );
        assert_eq!(
            lines[11],
            format!("Generated {}", dir.path().join("icon-maskable-512.png").display())
        );
        assert_eq!(lines[12], "Generated apple-touch-icon.png");
        assert_eq!(lines[13], FAVICONS_DONE_LINE);
    }

    #[test]
    fn test_each_target_rendered_at_its_size() {
        let dir = tempfile::tempdir().unwrap();
        let raster = FakeRasterizer::new(None);
        generate_icons(&IconPlan::standard(), &raster, dir.path(), |_| {}).unwrap();

        let expected: Vec<_> = IconPlan::standard()
            .targets()
            .iter()
            .map(|t| (t.width, t.height))
            .collect();
        assert_eq!(*raster.calls.borrow(), expected);

        let favicon = std::fs::read(dir.path().join("favicon-16x16.png")).unwrap();
        assert_eq!(favicon, b"16x16");
    }

    #[test]
    fn test_failure_stops_run_and_keeps_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let raster = FakeRasterizer::new(Some(3));
        let mut lines = Vec::new();

        let err = generate_icons(&IconPlan::standard(), &raster, dir.path(), |l| {
            lines.push(l.to_string())
        })
        .unwrap_err();

        match err {
            GenerateError::Render { file_name, .. } => assert_eq!(file_name, "icon-144.png"),
            other => panic!("expected Render error, got {other:?}"),
        }
        assert_eq!(lines.len(), 3);
        assert!(dir.path().join("icon-128.png").exists());
        assert!(!dir.path().join("icon-144.png").exists());
        assert!(!dir.path().join("favicon-16x16.png").exists());
    }

    #[test]
    fn test_unwritable_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let raster = FakeRasterizer::new(None);

        let err = generate_icons(&IconPlan::standard(), &raster, &missing, |_| {}).unwrap_err();
        assert!(matches!(err, GenerateError::Write { .. }), "got {err:?}");
    }

    #[test]
    fn test_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("icon-72.png"), b"stale").unwrap();

        generate_icons(&IconPlan::standard(), &FakeRasterizer::new(None), dir.path(), |_| {})
            .unwrap();
        assert_eq!(std::fs::read(dir.path().join("icon-72.png")).unwrap(), b"72x72");
    }
}
