//! Scoring engine for source-code quality analysis.
//!
//! Raw per-file metrics (cyclomatic complexity, lines of code, duplication
//! ratio, flagged issues) become bounded 0-100 sub-scores and a health score
//! per file, an unbounded criticism score for review prioritisation, and one
//! weighted project score. Every computation is a pure function of its
//! inputs and a validated [`scoring::profile::ScoringProfile`].

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod scoring;
pub mod types;

pub use error::{Result, ScoreError};
pub use scoring::profile::ScoringProfile;
pub use scoring::{score_file, score_files, score_project};
