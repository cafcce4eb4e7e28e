use crate::error::{Result, ScoreError};
use crate::types::metrics::FileInput;
use serde::Deserialize;
use std::path::Path;

/// Per-file metrics, issues and dependency facts produced by upstream collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsBundle {
    pub files: Vec<FileInput>,
}

impl MetricsBundle {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(ScoreError::InputJson)
    }
}

pub fn read_bundle(path: &Path) -> Result<MetricsBundle> {
    if !path.exists() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    MetricsBundle::from_json(&content)
}
