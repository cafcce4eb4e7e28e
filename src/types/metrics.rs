use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};

/// Raw per-file measurements handed over by the metrics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawFileMetrics {
    pub complexity: u32,
    pub lines_of_code: u32,
    pub duplication_ratio: f64,
    #[serde(default)]
    pub function_count: u32,
}

impl RawFileMetrics {
    pub fn new(complexity: u32, lines_of_code: u32, duplication_ratio: f64) -> Self {
        Self {
            complexity,
            lines_of_code,
            duplication_ratio,
            function_count: 0,
        }
    }

    /// Integer fields are non-negative by construction; only the ratio needs checking.
    pub fn validate(&self, path: &str) -> Result<()> {
        if !self.duplication_ratio.is_finite() || !(0.0..=1.0).contains(&self.duplication_ratio) {
            return Err(ScoreError::InvalidMetric {
                path: path.to_string(),
                reason: format!(
                    "duplication_ratio must be within [0, 1] (found {})",
                    self.duplication_ratio
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
}

impl Issue {
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

/// Fan-in, fan-out and cycle membership, read from the dependency-graph collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DependencyFacts {
    #[serde(default)]
    pub incoming: u32,
    #[serde(default)]
    pub outgoing: u32,
    #[serde(default)]
    pub in_cycle: bool,
}

/// Everything the engine needs to score one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInput {
    pub path: String,
    pub metrics: RawFileMetrics,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub dependencies: DependencyFacts,
}

impl FileInput {
    pub fn new(path: impl Into<String>, metrics: RawFileMetrics) -> Self {
        Self {
            path: path.into(),
            metrics,
            issues: Vec::new(),
            dependencies: DependencyFacts::default(),
        }
    }

    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_dependencies(mut self, dependencies: DependencyFacts) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(ScoreError::InvalidMetric {
                path: self.path.clone(),
                reason: "file path must not be empty".to_string(),
            });
        }
        self.metrics.validate(&self.path)
    }
}
