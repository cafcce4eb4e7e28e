pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat, top: usize) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, top)),
    }
}
