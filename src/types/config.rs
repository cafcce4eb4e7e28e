use crate::error::{Result, ScoreError};
use crate::scoring::criticism::CriticismWeights;
use crate::scoring::curve::PhaseCurve;
use crate::scoring::health::ExtremeComplexity;
use crate::scoring::issues::SeverityWeights;
use crate::scoring::metric::{DuplicationMode, MetricCurves};
use crate::scoring::profile::ScoringProfile;
use crate::scoring::project::AggregationWeights;
use serde::Deserialize;
use std::collections::HashMap;

const ALLOWED_WEIGHT_KEYS: [&str; 3] = ["complexity", "maintainability", "duplication"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodehealthConfig {
    pub scoring: Option<ScoringConfig>,
    pub issues: Option<IssuesConfig>,
    pub aggregation: Option<AggregationConfig>,
    pub criticism: Option<CriticismWeights>,
    pub curves: Option<CurvesConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    pub duplication_mode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuesConfig {
    pub weights: Option<SeverityWeights>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregationConfig {
    pub scheme: Option<String>,
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurvesConfig {
    pub complexity: Option<PhaseCurve>,
    pub size: Option<PhaseCurve>,
    pub duplication_legacy: Option<PhaseCurve>,
    pub duplication_strict: Option<PhaseCurve>,
    pub extreme_complexity: Option<ExtremeComplexity>,
}

impl CodehealthConfig {
    pub fn duplication_mode(&self) -> Result<DuplicationMode> {
        match self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.duplication_mode.as_deref())
        {
            Some(mode) => mode.parse(),
            None => Ok(DuplicationMode::default()),
        }
    }

    pub fn aggregation_weights(&self) -> Result<AggregationWeights> {
        let Some(aggregation) = &self.aggregation else {
            return Ok(AggregationWeights::default());
        };
        match (&aggregation.scheme, &aggregation.weights) {
            (Some(_), Some(_)) => Err(ScoreError::InvalidWeights(
                "aggregation.scheme and aggregation.weights cannot both be set".to_string(),
            )),
            (Some(scheme), None) => AggregationWeights::for_scheme(scheme),
            (None, Some(weights)) => custom_weights(weights),
            (None, None) => Ok(AggregationWeights::default()),
        }
    }

    pub fn curves(&self) -> MetricCurves {
        let defaults = MetricCurves::default();
        match &self.curves {
            Some(curves) => MetricCurves {
                complexity: curves.complexity.unwrap_or(defaults.complexity),
                size: curves.size.unwrap_or(defaults.size),
                duplication_legacy: curves
                    .duplication_legacy
                    .unwrap_or(defaults.duplication_legacy),
                duplication_strict: curves
                    .duplication_strict
                    .unwrap_or(defaults.duplication_strict),
            },
            None => defaults,
        }
    }

    /// Build the validated profile every score is computed with.
    pub fn resolve(&self) -> Result<ScoringProfile> {
        let profile = ScoringProfile {
            duplication_mode: self.duplication_mode()?,
            curves: self.curves(),
            extreme_complexity: self
                .curves
                .as_ref()
                .and_then(|curves| curves.extreme_complexity)
                .unwrap_or_default(),
            severity_weights: self
                .issues
                .as_ref()
                .and_then(|issues| issues.weights)
                .unwrap_or_default(),
            criticism: self.criticism.unwrap_or_default(),
            aggregation: self.aggregation_weights()?,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }
}

fn custom_weights(weights: &HashMap<String, f64>) -> Result<AggregationWeights> {
    let mut unknown = weights
        .keys()
        .filter(|key| !ALLOWED_WEIGHT_KEYS.contains(&key.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        unknown.sort();
        return Err(ScoreError::InvalidWeights(format!(
            "aggregation.weights contains unknown key(s): {}",
            unknown.join(", ")
        )));
    }
    let lookup = |key: &str| {
        weights.get(key).copied().ok_or_else(|| {
            ScoreError::InvalidWeights(format!("aggregation.weights.{key} is missing"))
        })
    };
    AggregationWeights::custom(
        lookup("complexity")?,
        lookup("maintainability")?,
        lookup("duplication")?,
    )
}
