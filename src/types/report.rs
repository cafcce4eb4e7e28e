use crate::scoring::criticism::RankedFile;
use crate::types::scoring::{FileScoreResult, ProjectScoreResult};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub project: ProjectScoreResult,
    pub ranking: Vec<RankedFile>,
    /// Per-file results in input order.
    pub files: Vec<FileScoreResult>,
}

impl ScoreReport {
    pub fn top(&self, limit: usize) -> &[RankedFile] {
        &self.ranking[..limit.min(self.ranking.len())]
    }
}
