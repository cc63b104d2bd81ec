//! Settings file loading.

use std::fs;
use std::path::Path;

use super::Config;
use crate::Result;

pub fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)?;
    let config = parse(&data)?;
    log::debug!("loaded settings from {}", path.display());
    Ok(config)
}

pub fn parse(json: &str) -> Result<Config> {
    Ok(serde_json::from_str(json)?)
}
