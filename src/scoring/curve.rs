//! Four-phase penalty curve shared by every metric scorer.
//!
//! A metric value maps to a penalty in four consecutive phases:
//!
//! ```text
//! x <= excellent_max   flat         penalty 0
//! x <= linear_max      linear       0 -> linear_penalty
//! x <= quadratic_max   quadratic    linear_penalty -> quadratic_penalty
//! x >  quadratic_max   exponential  quadratic_penalty + ((x - quadratic_max) / span)^e * scale
//! ```
//!
//! Each phase rounds its own result. The sub-score is `100 - penalty`,
//! clamped to [0, 100]. A phase collapses when its upper breakpoint equals
//! the lower one, which is how the size curve skips its quadratic phase.

use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseCurve {
    pub excellent_max: f64,
    pub linear_max: f64,
    pub quadratic_max: f64,
    /// Penalty reached at `linear_max`.
    pub linear_penalty: f64,
    /// Penalty reached at `quadratic_max`.
    pub quadratic_penalty: f64,
    #[serde(default = "default_quadratic_exponent")]
    pub quadratic_exponent: f64,
    pub exponential_span: f64,
    pub exponential_exponent: f64,
    pub exponential_scale: f64,
}

fn default_quadratic_exponent() -> f64 {
    2.0
}

/// Cyclomatic complexity: 10 / 20 / 50, reaching zero at 100.
pub const COMPLEXITY_CURVE: PhaseCurve = PhaseCurve {
    excellent_max: 10.0,
    linear_max: 20.0,
    quadratic_max: 50.0,
    linear_penalty: 30.0,
    quadratic_penalty: 70.0,
    quadratic_exponent: 2.0,
    exponential_span: 50.0,
    exponential_exponent: 1.8,
    exponential_scale: 30.0,
};

/// Lines of code: 200 / 500, no quadratic phase, slow growth past 500.
pub const SIZE_CURVE: PhaseCurve = PhaseCurve {
    excellent_max: 200.0,
    linear_max: 500.0,
    quadratic_max: 500.0,
    linear_penalty: 20.0,
    quadratic_penalty: 20.0,
    quadratic_exponent: 2.0,
    exponential_span: 1000.0,
    exponential_exponent: 1.3,
    exponential_scale: 8.0,
};

/// Tolerant duplication profile: 10% / 20% / 40%, reaching zero at 70%.
pub const DUPLICATION_LEGACY_CURVE: PhaseCurve = PhaseCurve {
    excellent_max: 0.10,
    linear_max: 0.20,
    quadratic_max: 0.40,
    linear_penalty: 30.0,
    quadratic_penalty: 70.0,
    quadratic_exponent: 2.0,
    exponential_span: 0.30,
    exponential_exponent: 1.5,
    exponential_scale: 30.0,
};

/// Tight duplication profile: 3% / 10% / 20%, reaching zero at 40%.
pub const DUPLICATION_STRICT_CURVE: PhaseCurve = PhaseCurve {
    excellent_max: 0.03,
    linear_max: 0.10,
    quadratic_max: 0.20,
    linear_penalty: 30.0,
    quadratic_penalty: 70.0,
    quadratic_exponent: 2.0,
    exponential_span: 0.20,
    exponential_exponent: 1.5,
    exponential_scale: 30.0,
};

impl PhaseCurve {
    /// Unbounded, rounded penalty for `value`.
    pub fn penalty(&self, value: f64) -> f64 {
        if value <= self.excellent_max {
            return 0.0;
        }
        if value <= self.linear_max {
            let frac = (value - self.excellent_max) / (self.linear_max - self.excellent_max);
            return (frac * self.linear_penalty).round();
        }
        if value <= self.quadratic_max {
            let frac = (value - self.linear_max) / (self.quadratic_max - self.linear_max);
            let rise = self.quadratic_penalty - self.linear_penalty;
            return (self.linear_penalty + frac.powf(self.quadratic_exponent) * rise).round();
        }
        let frac = (value - self.quadratic_max) / self.exponential_span;
        (self.quadratic_penalty + frac.powf(self.exponential_exponent) * self.exponential_scale)
            .round()
    }

    pub fn score(&self, value: f64) -> f64 {
        (MAX_SCORE - self.penalty(value)).clamp(0.0, MAX_SCORE)
    }

    pub fn validate(&self, metric: &str) -> Result<()> {
        let invalid = |reason: String| ScoreError::InvalidCurve {
            metric: metric.to_string(),
            reason,
        };
        let fields = [
            self.excellent_max,
            self.linear_max,
            self.quadratic_max,
            self.linear_penalty,
            self.quadratic_penalty,
            self.quadratic_exponent,
            self.exponential_span,
            self.exponential_exponent,
            self.exponential_scale,
        ];
        if fields.iter().any(|value| !value.is_finite()) {
            return Err(invalid("all coefficients must be finite".to_string()));
        }
        if self.excellent_max < 0.0 {
            return Err(invalid("excellent_max must not be negative".to_string()));
        }
        if !(self.excellent_max <= self.linear_max && self.linear_max <= self.quadratic_max) {
            return Err(invalid(format!(
                "breakpoints must ascend (found {} / {} / {})",
                self.excellent_max, self.linear_max, self.quadratic_max
            )));
        }
        if self.linear_penalty < 0.0 || self.quadratic_penalty < self.linear_penalty {
            return Err(invalid(
                "penalties must satisfy 0 <= linear_penalty <= quadratic_penalty".to_string(),
            ));
        }
        // A collapsed phase must not jump, or the curve loses continuity.
        if self.linear_max == self.excellent_max && self.linear_penalty != 0.0 {
            return Err(invalid(
                "linear_penalty must be 0 when the linear phase is empty".to_string(),
            ));
        }
        if self.quadratic_max == self.linear_max && self.quadratic_penalty != self.linear_penalty {
            return Err(invalid(
                "quadratic_penalty must equal linear_penalty when the quadratic phase is empty"
                    .to_string(),
            ));
        }
        if self.quadratic_exponent <= 0.0 || self.exponential_exponent <= 0.0 {
            return Err(invalid("exponents must be positive".to_string()));
        }
        if self.exponential_span <= 0.0 {
            return Err(invalid("exponential_span must be positive".to_string()));
        }
        if self.exponential_scale < 0.0 {
            return Err(invalid("exponential_scale must not be negative".to_string()));
        }
        Ok(())
    }
}
