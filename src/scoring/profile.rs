use super::criticism::CriticismWeights;
use super::health::ExtremeComplexity;
use super::issues::SeverityWeights;
use super::metric::{DuplicationMode, MetricCurves};
use super::project::AggregationWeights;
use crate::error::Result;

/// Fully resolved scoring configuration for one run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringProfile {
    pub duplication_mode: DuplicationMode,
    pub curves: MetricCurves,
    pub extreme_complexity: ExtremeComplexity,
    pub severity_weights: SeverityWeights,
    pub criticism: CriticismWeights,
    pub aggregation: AggregationWeights,
}

impl ScoringProfile {
    pub fn with_mode(mut self, mode: DuplicationMode) -> Self {
        self.duplication_mode = mode;
        self
    }

    pub fn with_aggregation(mut self, aggregation: AggregationWeights) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.curves.validate()?;
        self.extreme_complexity.validate()?;
        self.severity_weights.validate()?;
        self.criticism.validate()?;
        self.aggregation.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::WeightingScheme;

    #[test]
    fn default_profile_validates() {
        let profile = ScoringProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(profile.duplication_mode, DuplicationMode::Strict);
        assert_eq!(profile.aggregation.scheme, WeightingScheme::V2);
    }

    #[test]
    fn profile_with_broken_weights_fails_validation() {
        let mut profile = ScoringProfile::default();
        profile.aggregation.duplication = 0.30;
        assert!(profile.validate().is_err());
    }
}
