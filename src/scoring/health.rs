use super::curve::MAX_SCORE;
use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};

/// Extra escalation for complexity beyond the point where the base curve
/// has already bottomed out. Keyed on the raw metric, not the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtremeComplexity {
    pub threshold: f64,
    pub span: f64,
    pub exponent: f64,
    pub scale: f64,
}

impl Default for ExtremeComplexity {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            span: 100.0,
            exponent: 1.5,
            scale: 50.0,
        }
    }
}

impl ExtremeComplexity {
    pub fn penalty(&self, complexity: u32) -> f64 {
        let complexity = f64::from(complexity);
        if complexity <= self.threshold {
            return 0.0;
        }
        (((complexity - self.threshold) / self.span).powf(self.exponent) * self.scale).round()
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [self.threshold, self.span, self.exponent, self.scale];
        if fields.iter().any(|value| !value.is_finite())
            || self.threshold < 0.0
            || self.span <= 0.0
            || self.exponent <= 0.0
            || self.scale < 0.0
        {
            return Err(ScoreError::InvalidCurve {
                metric: "extreme_complexity".to_string(),
                reason: "threshold and scale must be non-negative, span and exponent positive"
                    .to_string(),
            });
        }
        Ok(())
    }
}

/// The three clamped metric sub-scores of one file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub complexity: f64,
    pub duplication: f64,
    pub size: f64,
}

/// Every sub-score enters as its deficit from 100; the result is hard-clamped.
pub fn compose_health(sub: &SubScores, extreme_penalty: f64, issue_penalty: f64) -> f64 {
    let health = MAX_SCORE
        - (MAX_SCORE - sub.complexity)
        - extreme_penalty
        - (MAX_SCORE - sub.size)
        - (MAX_SCORE - sub.duplication)
        - issue_penalty;
    health.clamp(0.0, MAX_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfect() -> SubScores {
        SubScores {
            complexity: 100.0,
            duplication: 100.0,
            size: 100.0,
        }
    }

    #[test]
    fn extreme_penalty_only_above_threshold() {
        let extreme = ExtremeComplexity::default();
        assert_eq!(extreme.penalty(0), 0.0);
        assert_eq!(extreme.penalty(100), 0.0);
        assert_eq!(extreme.penalty(110), 2.0);
        assert_eq!(extreme.penalty(176), 33.0);
        assert_eq!(extreme.penalty(200), 50.0);
    }

    #[test]
    fn extreme_penalty_separates_saturated_complexities() {
        let extreme = ExtremeComplexity::default();
        assert!(extreme.penalty(900) > extreme.penalty(110));
    }

    #[test]
    fn compose_health_is_perfect_for_perfect_inputs() {
        assert_eq!(compose_health(&perfect(), 0.0, 0.0), 100.0);
    }

    #[test]
    fn compose_health_subtracts_each_deficit() {
        let sub = SubScores {
            complexity: 18.0,
            duplication: 100.0,
            size: 93.0,
        };
        assert_eq!(compose_health(&sub, 0.0, 0.0), 11.0);
        assert_eq!(compose_health(&sub, 0.0, 6.0), 5.0);
    }

    #[test]
    fn compose_health_floors_at_zero() {
        let sub = SubScores {
            complexity: 0.0,
            duplication: 0.0,
            size: 0.0,
        };
        assert_eq!(compose_health(&sub, 1131.0, 400.0), 0.0);
    }

    #[test]
    fn validate_rejects_zero_span() {
        let extreme = ExtremeComplexity {
            span: 0.0,
            ..ExtremeComplexity::default()
        };
        assert!(extreme.validate().is_err());
    }
}
