// src/store.rs
// The saved location map (`licensingLocations.json` by default).

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::config::options::OutputOptions;
use crate::data::LocationMap;
use crate::error::Result;

pub fn to_json(map: &LocationMap, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(map)?
    } else {
        serde_json::to_string(map)?
    };
    Ok(text)
}

/// Write the map to `out.path`, creating parent directories as needed.
/// Returns the path written to.
pub fn save(map: &LocationMap, out: &OutputOptions) -> Result<PathBuf> {
    if let Some(parent) = out.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut text = to_json(map, out.pretty)?;
    text.push('\n');
    fs::write(&out.path, text)?;

    info!(path = %out.path.display(), locations = map.len(), "saved location map");
    Ok(out.path.clone())
}

pub fn load(path: &Path) -> Result<LocationMap> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
