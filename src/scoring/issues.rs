use crate::error::{Result, ScoreError};
use crate::types::metrics::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Penalty points charged per issue, by severity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeverityWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            critical: 20.0,
            high: 12.0,
            medium: 6.0,
            low: 2.0,
        }
    }
}

impl SeverityWeights {
    pub fn weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("critical", self.critical),
            ("high", self.high),
            ("medium", self.medium),
            ("low", self.low),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScoreError::ConfigParse(format!(
                    "issues.weights.{name} must be a non-negative number (found {weight})"
                )));
            }
        }
        Ok(())
    }
}

/// Sum of severity weights. Uncapped; the health clamp bounds it later.
pub fn issue_penalty(issues: &[Issue], weights: &SeverityWeights) -> f64 {
    issues
        .iter()
        .map(|issue| weights.weight(issue.severity))
        .sum()
}
