use crate::error::{Result, ScoreError};
use crate::scoring::metric::DuplicationMode;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileScoreResult {
    pub path: String,
    pub complexity_score: Score,
    pub duplication_score: Score,
    pub size_score: Score,
    pub health_score: Score,
    /// Unbounded ranking signal, always strictly positive.
    pub criticism_score: f64,
    pub issue_penalty: f64,
    pub extreme_complexity_penalty: f64,
    pub issue_flags: u32,
}

/// Which project weighting produced an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingScheme {
    /// Historical 40/30/30 weighting.
    V1,
    /// Current 45/30/25 weighting.
    V2,
    Custom,
}

impl WeightingScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightingScheme::V1 => "v1",
            WeightingScheme::V2 => "v2",
            WeightingScheme::Custom => "custom",
        }
    }
}

impl fmt::Display for WeightingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectScoreResult {
    pub complexity_score: Score,
    pub maintainability_score: Score,
    pub duplication_score: Score,
    pub overall_score: Score,
    pub file_count: usize,
    pub duplication_mode: DuplicationMode,
    pub weighting: WeightingScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreDelta {
    pub complexity: f64,
    pub maintainability: f64,
    pub duplication: f64,
    pub overall: f64,
}

impl ProjectScoreResult {
    /// Change relative to `baseline`. Results computed under a different
    /// duplication mode or weighting are not comparable.
    pub fn delta(&self, baseline: &ProjectScoreResult) -> Result<ScoreDelta> {
        if self.duplication_mode != baseline.duplication_mode {
            return Err(ScoreError::ModeMismatch {
                left: self.duplication_mode.to_string(),
                right: baseline.duplication_mode.to_string(),
            });
        }
        if self.weighting != baseline.weighting {
            return Err(ScoreError::WeightingMismatch {
                left: self.weighting.to_string(),
                right: baseline.weighting.to_string(),
            });
        }
        Ok(ScoreDelta {
            complexity: self.complexity_score - baseline.complexity_score,
            maintainability: self.maintainability_score - baseline.maintainability_score,
            duplication: self.duplication_score - baseline.duplication_score,
            overall: self.overall_score - baseline.overall_score,
        })
    }
}
