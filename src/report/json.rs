use crate::report::{ReportError, ScoreSummary, SessionSummary};

pub fn render_score_summary_json(data: &ScoreSummary) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

pub fn render_session_summary_json(data: &SessionSummary) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
