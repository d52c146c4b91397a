use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::render::RenderConfig;
use crate::errors::ConfigError;

/// File name searched for by [`find_render_config`].
pub const CONFIG_FILE_NAME: &str = ".liftfil.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Top-level layout of `.liftfil.toml`.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    render: RenderConfig,
}

/// Pure function to parse a render config from a TOML string
pub fn parse_render_config(contents: &str) -> Result<RenderConfig, ConfigError> {
    let file = toml::from_str::<ConfigFile>(contents)?;
    Ok(file.render)
}

/// Load a render config from a specific file.
pub fn load_render_config(path: &Path) -> Result<RenderConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_render_config(&contents)?;
    log::debug!("Loaded render config from {}", path.display());
    Ok(config)
}

/// Search `start` and its ancestors for `.liftfil.toml`.
///
/// Unreadable or invalid files are skipped with a warning; if nothing usable
/// is found the default config is returned.
pub fn find_render_config(start: impl Into<PathBuf>) -> RenderConfig {
    directory_ancestors(start.into(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No render config found after checking {} directories. Using defaults.",
                MAX_TRAVERSAL_DEPTH
            );
            RenderConfig::default()
        })
}

fn try_load_config_from_path(path: &Path) -> Option<RenderConfig> {
    match load_render_config(path) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring {}: {}", path.display(), e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}
