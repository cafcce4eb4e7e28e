use super::curve::{
    PhaseCurve, COMPLEXITY_CURVE, DUPLICATION_LEGACY_CURVE, DUPLICATION_STRICT_CURVE, SIZE_CURVE,
};
use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Breakpoint profile for the duplication scorer. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicationMode {
    Legacy,
    #[default]
    Strict,
}

impl DuplicationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DuplicationMode::Legacy => "legacy",
            DuplicationMode::Strict => "strict",
        }
    }
}

impl FromStr for DuplicationMode {
    type Err = ScoreError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "legacy" => Ok(DuplicationMode::Legacy),
            "strict" => Ok(DuplicationMode::Strict),
            other => Err(ScoreError::UnknownDuplicationMode(other.to_string())),
        }
    }
}

impl fmt::Display for DuplicationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricCurves {
    pub complexity: PhaseCurve,
    pub size: PhaseCurve,
    pub duplication_legacy: PhaseCurve,
    pub duplication_strict: PhaseCurve,
}

impl Default for MetricCurves {
    fn default() -> Self {
        Self {
            complexity: COMPLEXITY_CURVE,
            size: SIZE_CURVE,
            duplication_legacy: DUPLICATION_LEGACY_CURVE,
            duplication_strict: DUPLICATION_STRICT_CURVE,
        }
    }
}

impl MetricCurves {
    pub fn duplication(&self, mode: DuplicationMode) -> &PhaseCurve {
        match mode {
            DuplicationMode::Legacy => &self.duplication_legacy,
            DuplicationMode::Strict => &self.duplication_strict,
        }
    }

    pub fn complexity_score(&self, complexity: u32) -> f64 {
        self.complexity.score(f64::from(complexity))
    }

    /// Raw size penalty before it is subtracted from 100.
    pub fn size_penalty(&self, lines_of_code: u32) -> f64 {
        self.size.penalty(f64::from(lines_of_code))
    }

    pub fn size_score(&self, lines_of_code: u32) -> f64 {
        self.size.score(f64::from(lines_of_code))
    }

    pub fn duplication_score(&self, ratio: f64, mode: DuplicationMode) -> f64 {
        self.duplication(mode).score(ratio)
    }

    pub fn validate(&self) -> Result<()> {
        self.complexity.validate("complexity")?;
        self.size.validate("size")?;
        self.duplication_legacy.validate("duplication_legacy")?;
        self.duplication_strict.validate("duplication_strict")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_score_matches_reference_table() {
        let curves = MetricCurves::default();
        let table = [
            (0, 100.0),
            (1, 100.0),
            (10, 100.0),
            (15, 85.0),
            (20, 70.0),
            (25, 69.0),
            (30, 66.0),
            (40, 52.0),
            (50, 30.0),
            (60, 28.0),
            (80, 18.0),
            (97, 3.0),
            (100, 0.0),
            (176, 0.0),
        ];
        for (complexity, expected) in table {
            assert_eq!(
                curves.complexity_score(complexity),
                expected,
                "complexity {complexity}"
            );
        }
    }

    #[test]
    fn complexity_score_is_non_increasing() {
        let curves = MetricCurves::default();
        let mut previous = 100.0;
        for complexity in 0..=1000 {
            let score = curves.complexity_score(complexity);
            assert!((0.0..=100.0).contains(&score));
            assert!(score <= previous, "score rose at complexity {complexity}");
            previous = score;
        }
    }

    #[test]
    fn size_penalty_follows_its_phases() {
        let curves = MetricCurves::default();
        assert_eq!(curves.size_penalty(0), 0.0);
        assert_eq!(curves.size_penalty(200), 0.0);
        assert_eq!(curves.size_penalty(300), 7.0);
        assert_eq!(curves.size_penalty(315), 8.0);
        assert_eq!(curves.size_penalty(500), 20.0);
        assert_eq!(curves.size_penalty(834), 22.0);
        assert_eq!(curves.size_penalty(1500), 28.0);
        assert_eq!(curves.size_score(300), 93.0);
    }

    #[test]
    fn size_score_never_goes_negative() {
        let curves = MetricCurves::default();
        assert_eq!(curves.size_score(u32::MAX), 0.0);
    }

    #[test]
    fn duplication_modes_diverge_mid_range() {
        let curves = MetricCurves::default();
        let legacy = curves.duplication_score(0.08, DuplicationMode::Legacy);
        let strict = curves.duplication_score(0.08, DuplicationMode::Strict);
        assert_eq!(legacy, 100.0);
        assert_eq!(strict, 79.0);
    }

    #[test]
    fn duplication_modes_converge_at_extremes() {
        let curves = MetricCurves::default();
        for mode in [DuplicationMode::Legacy, DuplicationMode::Strict] {
            assert_eq!(curves.duplication_score(0.0, mode), 100.0);
            assert_eq!(curves.duplication_score(1.0, mode), 0.0);
        }
        assert_eq!(curves.duplication_score(0.70, DuplicationMode::Legacy), 0.0);
        assert_eq!(curves.duplication_score(0.40, DuplicationMode::Strict), 0.0);
    }

    #[test]
    fn duplication_mode_parses_known_names_only() {
        assert_eq!(
            "legacy".parse::<DuplicationMode>().expect("legacy should parse"),
            DuplicationMode::Legacy
        );
        assert_eq!(
            " strict ".parse::<DuplicationMode>().expect("strict should parse"),
            DuplicationMode::Strict
        );
        let err = "lenient"
            .parse::<DuplicationMode>()
            .expect_err("unknown mode should fail");
        assert!(matches!(err, ScoreError::UnknownDuplicationMode(ref mode) if mode == "lenient"));
    }

    #[test]
    fn test_default_mode_is_strict() {
        assert_eq!(DuplicationMode::default(), DuplicationMode::Strict);
    }
}
