pub mod criticism;
pub mod curve;
pub mod health;
pub mod issues;
pub mod metric;
pub mod profile;
pub mod project;

use crate::error::{Result, ScoreError};
use crate::types::metrics::FileInput;
use crate::types::report::ScoreReport;
use crate::types::scoring::FileScoreResult;
use health::SubScores;
use profile::ScoringProfile;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info};

/// Score one file: metrics -> sub-scores -> health, plus the criticism signal.
pub fn score_file(input: &FileInput, profile: &ScoringProfile) -> Result<FileScoreResult> {
    profile.validate()?;
    score_with_validated(input, profile)
}

fn score_with_validated(input: &FileInput, profile: &ScoringProfile) -> Result<FileScoreResult> {
    input.validate()?;
    let metrics = &input.metrics;
    let curves = &profile.curves;

    let sub = SubScores {
        complexity: curves.complexity_score(metrics.complexity),
        duplication: curves.duplication_score(metrics.duplication_ratio, profile.duplication_mode),
        size: curves.size_score(metrics.lines_of_code),
    };
    let extreme_complexity_penalty = profile.extreme_complexity.penalty(metrics.complexity);
    let issue_penalty = issues::issue_penalty(&input.issues, &profile.severity_weights);
    let health_score = health::compose_health(&sub, extreme_complexity_penalty, issue_penalty);
    let criticism_score = profile.criticism.score(metrics, &input.dependencies);

    debug!(
        path = %input.path,
        complexity = sub.complexity,
        duplication = sub.duplication,
        size = sub.size,
        health = health_score,
        criticism = criticism_score,
        "scored file"
    );

    Ok(FileScoreResult {
        path: input.path.clone(),
        complexity_score: sub.complexity,
        duplication_score: sub.duplication,
        size_score: sub.size,
        health_score,
        criticism_score,
        issue_penalty,
        extreme_complexity_penalty,
        issue_flags: profile.criticism.issue_flags(metrics),
    })
}

/// Score a batch in parallel. Output order follows input order.
pub fn score_files(inputs: &[FileInput], profile: &ScoringProfile) -> Result<Vec<FileScoreResult>> {
    profile.validate()?;
    score_batch(inputs, profile)
}

fn score_batch(inputs: &[FileInput], profile: &ScoringProfile) -> Result<Vec<FileScoreResult>> {
    ensure_unique_paths(inputs)?;
    inputs
        .par_iter()
        .map(|input| score_with_validated(input, profile))
        .collect()
}

pub fn score_project(inputs: &[FileInput], profile: &ScoringProfile) -> Result<ScoreReport> {
    profile.validate()?;
    let files = score_batch(inputs, profile)?;
    let project = project::aggregate(&files, &profile.aggregation, profile.duplication_mode);
    let ranking = criticism::rank_files(&files);

    info!(
        files = project.file_count,
        overall = project.overall_score,
        mode = %project.duplication_mode,
        weighting = %project.weighting,
        "scored project"
    );

    Ok(ScoreReport {
        project,
        ranking,
        files,
    })
}

fn ensure_unique_paths(inputs: &[FileInput]) -> Result<()> {
    let mut seen = HashSet::with_capacity(inputs.len());
    for input in inputs {
        if !seen.insert(input.path.as_str()) {
            return Err(ScoreError::InvalidMetric {
                path: input.path.clone(),
                reason: "file appears more than once in the input".to_string(),
            });
        }
    }
    Ok(())
}
