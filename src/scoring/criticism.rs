//! Criticism ranking: which file deserves attention first.
//!
//! ```text
//! criticism = impact * impact_weight + complexity * complexity_weight
//!           + flags * issue_weight + base
//! impact    = incoming + outgoing + (in_cycle ? cycle_impact : 0)
//! flags     = #{complexity > 10, duplication > 0.10, loc > 500}
//! ```
//!
//! The score is unbounded and only meaningful relative to other files.

use crate::error::{Result, ScoreError};
use crate::types::metrics::{DependencyFacts, RawFileMetrics};
use crate::types::scoring::FileScoreResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CriticismWeights {
    pub impact_weight: f64,
    pub complexity_weight: f64,
    pub issue_weight: f64,
    pub cycle_impact: f64,
    pub base: f64,
    pub complexity_threshold: u32,
    pub duplication_threshold: f64,
    pub size_threshold: u32,
}

impl Default for CriticismWeights {
    fn default() -> Self {
        Self {
            impact_weight: 2.0,
            complexity_weight: 1.0,
            issue_weight: 0.5,
            cycle_impact: 5.0,
            base: 1.0,
            complexity_threshold: 10,
            duplication_threshold: 0.10,
            size_threshold: 500,
        }
    }
}

impl CriticismWeights {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("impact_weight", self.impact_weight),
            ("complexity_weight", self.complexity_weight),
            ("issue_weight", self.issue_weight),
            ("cycle_impact", self.cycle_impact),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoreError::ConfigParse(format!(
                    "criticism.{name} must be a non-negative number (found {value})"
                )));
            }
        }
        if !self.base.is_finite() || self.base <= 0.0 {
            return Err(ScoreError::ConfigParse(format!(
                "criticism.base must be positive (found {})",
                self.base
            )));
        }
        if !(0.0..=1.0).contains(&self.duplication_threshold) {
            return Err(ScoreError::ConfigParse(format!(
                "criticism.duplication_threshold must be between 0.0 and 1.0 (found {})",
                self.duplication_threshold
            )));
        }
        Ok(())
    }

    /// Number of metric thresholds the file exceeds.
    pub fn issue_flags(&self, metrics: &RawFileMetrics) -> u32 {
        [
            metrics.complexity > self.complexity_threshold,
            metrics.duplication_ratio > self.duplication_threshold,
            metrics.lines_of_code > self.size_threshold,
        ]
        .iter()
        .filter(|flag| **flag)
        .count() as u32
    }

    pub fn impact(&self, dependencies: &DependencyFacts) -> f64 {
        let cycle = if dependencies.in_cycle {
            self.cycle_impact
        } else {
            0.0
        };
        f64::from(dependencies.incoming) + f64::from(dependencies.outgoing) + cycle
    }

    pub fn score(&self, metrics: &RawFileMetrics, dependencies: &DependencyFacts) -> f64 {
        self.impact(dependencies) * self.impact_weight
            + f64::from(metrics.complexity) * self.complexity_weight
            + f64::from(self.issue_flags(metrics)) * self.issue_weight
            + self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFile {
    pub rank: usize,
    pub path: String,
    pub criticism_score: f64,
    pub health_score: f64,
}

/// Descending criticism score, ties broken by ascending path.
pub fn rank_files(results: &[FileScoreResult]) -> Vec<RankedFile> {
    let mut ordered: Vec<&FileScoreResult> = results.iter().collect();
    ordered.sort_by(|a, b| compare_for_ranking(a, b));
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, result)| RankedFile {
            rank: index + 1,
            path: result.path.clone(),
            criticism_score: result.criticism_score,
            health_score: result.health_score,
        })
        .collect()
}

fn compare_for_ranking(a: &FileScoreResult, b: &FileScoreResult) -> Ordering {
    b.criticism_score
        .total_cmp(&a.criticism_score)
        .then_with(|| a.path.cmp(&b.path))
}
