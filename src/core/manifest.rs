// iconsmith - core/manifest.rs
//
// Web app manifest `icons` fragment for the generated PNGs.
// Only standard and maskable icons are listed; the Apple touch icon and
// favicons are referenced from HTML <link> tags instead.

use crate::core::plan::{IconKind, IconPlan};
use crate::util::constants;
use crate::util::error::GenerateError;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One entry of a manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<&'static str>,
}

/// Manifest entries for the icons in `plan`, in plan order.
pub fn manifest_icons(plan: &IconPlan) -> Vec<ManifestIcon> {
    plan.targets()
        .iter()
        .filter_map(|t| {
            let purpose = match t.kind {
                IconKind::Standard => None,
                IconKind::Maskable => Some("maskable"),
                IconKind::AppleTouch | IconKind::Favicon => return None,
            };
            Some(ManifestIcon {
                src: format!("/{}", t.file_name),
                sizes: format!("{}x{}", t.width, t.height),
                mime_type: constants::PNG_MIME_TYPE,
                purpose,
            })
        })
        .collect()
}

/// Write the manifest fragment next to the icons and return its path.
pub fn write_manifest(plan: &IconPlan, out_dir: &Path) -> Result<PathBuf, GenerateError> {
    let path = out_dir.join(constants::MANIFEST_FILE_NAME);
    let file = std::fs::File::create(&path).map_err(|e| GenerateError::Write {
        path: path.clone(),
        source: e,
    })?;

    let icons = manifest_icons(plan);
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &icons).map_err(|e| GenerateError::Manifest {
        path: path.clone(),
        source: e,
    })?;
    writer.flush().map_err(|e| GenerateError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), entries = icons.len(), "Wrote manifest fragment");
    Ok(path)
}
