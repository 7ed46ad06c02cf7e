//! Loading components and overlays from JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{FolioError, FolioResult};
use crate::types::{ComponentDefinition, DocumentationOverlay};

/// Default suffix of component definition files.
pub const COMPONENT_SUFFIX: &str = ".component.json";

/// Default suffix of overlay files.
pub const OVERLAY_SUFFIX: &str = ".docs.json";

impl ComponentDefinition {
    /// Parse a component definition from JSON text.
    pub fn from_json(source: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

impl DocumentationOverlay {
    /// Parse an overlay from JSON text.
    pub fn from_json(source: &str) -> FolioResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> FolioResult<T> {
    let source = fs::read_to_string(path).map_err(|source| FolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&source).map_err(|source| FolioError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a component definition file.
pub fn load_component(path: &Path) -> FolioResult<ComponentDefinition> {
    load_json(path)
}

/// Read an overlay file.
pub fn load_overlay(path: &Path) -> FolioResult<DocumentationOverlay> {
    load_json(path)
}

/// Path of the overlay that sits next to a component file.
///
/// `button.component.json` maps to `button.docs.json` with the default
/// suffixes. Files without `component_suffix` use their stem. Returns `None`
/// when the result would be the component file itself.
pub fn overlay_path_for(
    component_path: &Path,
    component_suffix: &str,
    overlay_suffix: &str,
) -> Option<PathBuf> {
    let file_name = component_path.file_name()?.to_str()?;

    let base = match file_name.strip_suffix(component_suffix) {
        Some(base) if !base.is_empty() => base,
        _ => component_path.file_stem()?.to_str()?,
    };

    let overlay = component_path.with_file_name(format!("{}{}", base, overlay_suffix));
    (overlay != component_path).then_some(overlay)
}
