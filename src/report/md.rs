use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport, top: usize) -> String {
    let project = &report.project;
    let mut output = String::new();
    output.push_str("# Code Health Report\n\n");
    output.push_str(&format!(
        "Overall score: {:.2} (weighting {}, duplication mode {})\n\n",
        project.overall_score, project.weighting, project.duplication_mode
    ));
    output.push_str("## Dimension Scores\n\n");
    output.push_str(&format!(
        "- complexity: {:.2}\n- maintainability: {:.2}\n- duplication: {:.2}\n- files: {}\n\n",
        project.complexity_score,
        project.maintainability_score,
        project.duplication_score,
        project.file_count
    ));

    output.push_str("## Review Priority\n\n");
    let ranked = report.top(top);
    if ranked.is_empty() {
        output.push_str("- none\n");
    } else {
        output.push_str("| # | File | Criticism | Health |\n|---|------|-----------|--------|\n");
        for file in ranked {
            output.push_str(&format!(
                "| {} | {} | {:.1} | {:.0} |\n",
                file.rank, file.path, file.criticism_score, file.health_score
            ));
        }
        if report.ranking.len() > ranked.len() {
            output.push_str(&format!(
                "\n{} more file(s) not shown\n",
                report.ranking.len() - ranked.len()
            ));
        }
    }

    output
}
