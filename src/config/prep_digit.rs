use crate::pipeline::PrepParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct PrepToolConfig {
    /// Canvas image to normalize (any format the `image` crate decodes).
    pub input: PathBuf,
    #[serde(default)]
    pub params: PrepParams,
    pub output: PrepOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PrepOutputConfig {
    /// PNG receiving the output grid.
    pub grid_image: PathBuf,
    /// Optional JSON dump of the full report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Each grid cell is drawn as an `upscale × upscale` block.
    #[serde(default = "default_upscale")]
    pub upscale: usize,
}

fn default_upscale() -> usize {
    10
}

pub fn load_config(path: &Path) -> Result<PrepToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<PrepToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
