use std::io;
use std::path::Path;

use anyhow::Context;
use domain::model::vo::ConfigLayer;

/// Name of the optional configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "slurm.yaml";

const PACKAGED_DEFAULT: &str = include_str!("../assets/slurm.yaml");

pub fn packaged_default() -> anyhow::Result<ConfigLayer> {
    parse_layer(PACKAGED_DEFAULT).context("Packaged default configuration is malformed")
}

/// Load the local configuration file. A missing file is not an error.
pub fn load_local(path: &Path) -> anyhow::Result<Option<ConfigLayer>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, skipping", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Unable to read {}", path.display()));
        }
    };
    let layer = parse_layer(&content)
        .with_context(|| format!("Malformed configuration file {}", path.display()))?;
    if layer.is_empty() {
        tracing::debug!("{} has no settings", path.display());
    }
    Ok(Some(layer))
}

/// Parse a layer, leaving every scalar as the string it was written as.
pub fn parse_layer(content: &str) -> anyhow::Result<ConfigLayer> {
    if content.trim().is_empty() {
        return Ok(ConfigLayer::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
