//! Project-level reduction.
//!
//! Each dimension is the arithmetic mean of the per-file sub-scores
//! (maintainability is the size sub-score). The overall score is the
//! weighted sum of the three means. Sub-scores are integer-valued, so the
//! running sums are exact and the result does not depend on file order.

use super::curve::MAX_SCORE;
use super::metric::DuplicationMode;
use crate::error::{Result, ScoreError};
use crate::types::scoring::{FileScoreResult, ProjectScoreResult, WeightingScheme};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationWeights {
    pub complexity: f64,
    pub maintainability: f64,
    pub duplication: f64,
    pub scheme: WeightingScheme,
}

impl Default for AggregationWeights {
    fn default() -> Self {
        Self::v2()
    }
}

impl AggregationWeights {
    /// Superseded weighting, kept so historical reports can be reproduced.
    pub fn v1() -> Self {
        Self {
            complexity: 0.40,
            maintainability: 0.30,
            duplication: 0.30,
            scheme: WeightingScheme::V1,
        }
    }

    pub fn v2() -> Self {
        Self {
            complexity: 0.45,
            maintainability: 0.30,
            duplication: 0.25,
            scheme: WeightingScheme::V2,
        }
    }

    pub fn custom(complexity: f64, maintainability: f64, duplication: f64) -> Result<Self> {
        let weights = Self {
            complexity,
            maintainability,
            duplication,
            scheme: WeightingScheme::Custom,
        };
        weights.validate()?;
        Ok(weights)
    }

    pub fn for_scheme(scheme: &str) -> Result<Self> {
        match scheme.trim() {
            "v1" => Ok(Self::v1()),
            "v2" => Ok(Self::v2()),
            other => Err(ScoreError::InvalidWeights(format!(
                "unknown aggregation scheme: {other} (expected \"v1\" or \"v2\")"
            ))),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [self.complexity, self.maintainability, self.duplication];
        if weights
            .iter()
            .any(|weight| !weight.is_finite() || !(0.0..=1.0).contains(weight))
        {
            return Err(ScoreError::InvalidWeights(
                "each weight must be between 0.0 and 1.0".to_string(),
            ));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreError::InvalidWeights(format!(
                "weights must sum to 1.0 (found {sum:.3})"
            )));
        }
        Ok(())
    }
}

/// Running sums over per-file results. Feeding files one at a time gives the
/// same result as [`aggregate`] over the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectAccumulator {
    count: usize,
    complexity: f64,
    maintainability: f64,
    duplication: f64,
}

impl ProjectAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: &FileScoreResult) {
        self.count += 1;
        self.complexity += file.complexity_score;
        self.maintainability += file.size_score;
        self.duplication += file.duplication_score;
    }

    pub fn merge(mut self, other: ProjectAccumulator) -> Self {
        self.count += other.count;
        self.complexity += other.complexity;
        self.maintainability += other.maintainability;
        self.duplication += other.duplication;
        self
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn finish(&self, weights: &AggregationWeights, mode: DuplicationMode) -> ProjectScoreResult {
        let mean = |sum: f64| {
            if self.count == 0 {
                MAX_SCORE
            } else {
                (sum / self.count as f64).clamp(0.0, MAX_SCORE)
            }
        };
        let complexity_score = mean(self.complexity);
        let maintainability_score = mean(self.maintainability);
        let duplication_score = mean(self.duplication);
        let overall_score = (complexity_score * weights.complexity
            + maintainability_score * weights.maintainability
            + duplication_score * weights.duplication)
            .clamp(0.0, MAX_SCORE);

        ProjectScoreResult {
            complexity_score,
            maintainability_score,
            duplication_score,
            overall_score,
            file_count: self.count,
            duplication_mode: mode,
            weighting: weights.scheme,
        }
    }
}

pub fn aggregate(
    files: &[FileScoreResult],
    weights: &AggregationWeights,
    mode: DuplicationMode,
) -> ProjectScoreResult {
    let mut accumulator = ProjectAccumulator::new();
    for file in files {
        accumulator.push(file);
    }
    accumulator.finish(weights, mode)
}
