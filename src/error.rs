use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid metric for {path}: {reason}")]
    InvalidMetric { path: String, reason: String },

    #[error("unknown duplication mode: {0} (expected \"legacy\" or \"strict\")")]
    UnknownDuplicationMode(String),

    #[error("invalid aggregation weights: {0}")]
    InvalidWeights(String),

    #[error("invalid {metric} curve: {reason}")]
    InvalidCurve { metric: String, reason: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("cannot compare scores computed under duplication modes {left} and {right}")]
    ModeMismatch { left: String, right: String },

    #[error("cannot compare scores computed under weightings {left} and {right}")]
    WeightingMismatch { left: String, right: String },

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid metrics bundle: {0}")]
    InputJson(serde_json::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoreError {
    /// Validation failures are caller mistakes; everything else is a runtime failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScoreError::InvalidMetric { .. }
                | ScoreError::UnknownDuplicationMode(_)
                | ScoreError::InvalidWeights(_)
                | ScoreError::InvalidCurve { .. }
                | ScoreError::ConfigParse(_)
                | ScoreError::ModeMismatch { .. }
                | ScoreError::WeightingMismatch { .. }
                | ScoreError::InputJson(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
