use crate::error::{Result, ScoreError};
use crate::types::config::CodehealthConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "codehealth.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".codehealth/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/codehealth/config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Global,
    Repository,
    Local,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LayerKind::Global => "global",
            LayerKind::Repository => "repository",
            LayerKind::Local => "local",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    pub kind: LayerKind,
    pub path: PathBuf,
}

/// The merged configuration and the layers it was built from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CodehealthConfig,
    pub layers: Vec<ConfigLayer>,
}

/// Candidate layers for `root`, lowest precedence first.
pub fn candidate_layers(root: &Path, global_path: Option<&Path>) -> Vec<ConfigLayer> {
    let mut layers = Vec::with_capacity(3);
    if let Some(path) = global_path {
        layers.push(ConfigLayer {
            kind: LayerKind::Global,
            path: path.to_path_buf(),
        });
    }
    layers.push(ConfigLayer {
        kind: LayerKind::Repository,
        path: root.join(DEFAULT_CONFIG_FILE),
    });
    layers.push(ConfigLayer {
        kind: LayerKind::Local,
        path: root.join(DEFAULT_LOCAL_FILE),
    });
    layers
}

pub fn load_config(root: &Path) -> Result<Option<LoadedConfig>> {
    let global = std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_layers(candidate_layers(root, global.as_deref()))
}

/// Overlays every layer that exists on disk. `None` means no layer exists,
/// so the caller runs on the built-in profile.
pub(crate) fn load_layers(candidates: Vec<ConfigLayer>) -> Result<Option<LoadedConfig>> {
    let present: Vec<ConfigLayer> = candidates
        .into_iter()
        .filter(|layer| layer.path.is_file())
        .collect();
    if present.is_empty() {
        debug!("no config layer present");
        return Ok(None);
    }

    let mut merged = Table::new();
    for layer in &present {
        debug!(layer = %layer.kind, path = %layer.path.display(), "applying config layer");
        overlay(&mut merged, read_layer(&layer.path)?);
    }

    let config = Value::Table(merged)
        .try_into::<CodehealthConfig>()
        .map_err(|e| ScoreError::ConfigParse(e.to_string()))?;
    Ok(Some(LoadedConfig {
        config,
        layers: present,
    }))
}

/// Each layer must match the schema on its own, so an unknown key is reported
/// against the file that carries it.
fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    let located = |e: toml::de::Error| ScoreError::ConfigParse(format!("{}: {}", path.display(), e));
    toml::from_str::<CodehealthConfig>(&content).map_err(located)?;
    toml::from_str::<Table>(&content).map_err(located)
}

/// Later layers win per key; nested tables merge key by key.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(nested) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => overlay(existing, nested),
                _ => {
                    base.insert(key, Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
