use crate::enhance::EnhanceOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EnhanceToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub enhance: EnhanceOptions,
    pub output: EnhanceOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceOutputConfig {
    #[serde(rename = "favicon")]
    pub favicon: PathBuf,
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EnhanceToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
