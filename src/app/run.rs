// iconsmith - app/run.rs
//
// End-to-end generation run. Opens the source before touching the output
// directory, so a missing or malformed SVG produces no files at all.

use crate::core::generate::{self, GenerateReport};
use crate::core::manifest;
use crate::core::plan::{IconPlan, IconSet};
use crate::core::render::{RenderOptions, SvgRasterizer};
use crate::util::constants;
use crate::util::error::{GenerateError, Result};
use std::path::PathBuf;

/// Everything a run needs. `Default` reproduces the fixed built-in paths
/// and size tables.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source_path: PathBuf,
    pub output_dir: PathBuf,
    pub icon_set: IconSet,
    pub write_manifest: bool,
    pub render: RenderOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(constants::DEFAULT_SOURCE_PATH),
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            icon_set: IconSet::default(),
            write_manifest: false,
            render: RenderOptions::default(),
        }
    }
}

/// Generate every icon described by `config`.
///
/// `progress` receives the per-file confirmation lines and, on success,
/// the final "all generated" line.
pub fn run<F>(config: &GeneratorConfig, mut progress: F) -> Result<GenerateReport>
where
    F: FnMut(&str),
{
    tracing::info!(
        source = %config.source_path.display(),
        out_dir = %config.output_dir.display(),
        "Generating icons"
    );

    let rasterizer = SvgRasterizer::open(&config.source_path, &config.render)?;

    std::fs::create_dir_all(&config.output_dir).map_err(|e| GenerateError::CreateDir {
        path: config.output_dir.clone(),
        source: e,
    })?;

    let plan = IconPlan::from_set(&config.icon_set);
    let mut report = generate::generate_icons(&plan, &rasterizer, &config.output_dir, &mut progress)?;

    if config.write_manifest {
        report.manifest = Some(manifest::write_manifest(&plan, &config.output_dir)?);
    }

    progress(generate::ALL_DONE_LINE);
    Ok(report)
}
