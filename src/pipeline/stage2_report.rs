use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::feedback::{feedback_message, feedback_order};
use crate::model::poses::PoseKind;
use crate::model::subscores::SubScoreKey;
use crate::model::thresholds::ThresholdProfile;
use crate::pipeline::stage1_evaluate::FrameEvaluation;
use crate::report::json::{render_score_summary_json, render_session_summary_json};
use crate::report::text::{render_score_report, render_session_report};
use crate::report::tsv::{render_frames_tsv, render_scores_tsv};
use crate::report::{
    AccuracyStats, CueCount, NamedStats, ReportError, ScoreSummary, SessionSummary, ToolMeta,
    fraction, mean, median, p10, p90,
};
use crate::session::{SessionMode, SessionReport};

#[derive(Debug, Clone)]
pub struct ScoreRunInput<'a> {
    pub pose: PoseKind,
    pub input_path: &'a Path,
    pub evaluations: &'a [FrameEvaluation],
    pub profile: &'a ThresholdProfile,
}

#[derive(Debug, Clone)]
pub struct SessionRunInput<'a> {
    pub lesson: &'a str,
    pub mode: SessionMode,
    pub input_path: &'a Path,
    pub profile: &'a ThresholdProfile,
    pub report: &'a SessionReport,
}

pub fn write_score_reports(input: &ScoreRunInput<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_text(
        &out_dir.join("frames.tsv"),
        &render_frames_tsv(input.pose, input.evaluations),
    )?;

    let summary = build_score_summary(input);
    write_text(
        &out_dir.join("summary.json"),
        &render_score_summary_json(&summary)?,
    )?;
    write_text(&out_dir.join("report.txt"), &render_score_report(&summary))?;

    tracing::info!(out = %out_dir.display(), "wrote frames.tsv, summary.json, report.txt");
    Ok(())
}

pub fn write_session_reports(
    input: &SessionRunInput<'_>,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_text(
        &out_dir.join("scores.tsv"),
        &render_scores_tsv(&input.report.log),
    )?;

    let summary = build_session_summary(input);
    write_text(
        &out_dir.join("summary.json"),
        &render_session_summary_json(&summary)?,
    )?;
    write_text(
        &out_dir.join("report.txt"),
        &render_session_report(&summary),
    )?;

    tracing::info!(out = %out_dir.display(), "wrote scores.tsv, summary.json, report.txt");
    Ok(())
}

pub fn build_score_summary(input: &ScoreRunInput<'_>) -> ScoreSummary {
    let results: Vec<_> = input
        .evaluations
        .iter()
        .filter_map(|e| e.result.as_ref())
        .collect();
    let n_frames = input.evaluations.len();
    let n_detected = results.len();

    let accuracies: Vec<f64> = results.iter().map(|r| r.accuracy).collect();
    let accuracy = AccuracyStats {
        mean: mean(&accuracies),
        median: median(&accuracies),
        p10: p10(&accuracies),
        p90: p90(&accuracies),
        max: accuracies.iter().copied().fold(0.0, f64::max),
    };
    let frames_at_target = accuracies
        .iter()
        .filter(|&&a| a >= input.profile.target_score)
        .count();

    let mut sub_scores = Vec::new();
    for &key in SubScoreKey::for_pose(input.pose) {
        let values: Vec<f64> = results
            .iter()
            .filter_map(|r| r.sub_scores.get(key))
            .collect();
        sub_scores.push(NamedStats {
            name: key.name(),
            median: median(&values),
            p10: p10(&values),
            p90: p90(&values),
        });
    }
    let weakest = if n_detected == 0 {
        None
    } else {
        sub_scores
            .iter()
            .fold(None::<&NamedStats>, |best, s| match best {
                Some(b) if b.median <= s.median => Some(b),
                _ => Some(s),
            })
            .map(|s| s.name)
    };

    let mut feedback = Vec::new();
    for &key in feedback_order() {
        let frames = input
            .evaluations
            .iter()
            .filter(|e| e.feedback.items.iter().any(|item| item.key == key))
            .count();
        if frames == 0 {
            continue;
        }
        if let Some(message) = feedback_message(key) {
            feedback.push(CueCount {
                key: key.name(),
                message,
                frames,
                fraction: fraction(frames, n_detected),
            });
        }
    }

    ScoreSummary {
        tool: ToolMeta::current(),
        pose: input.pose,
        pose_name: input.pose.display_name(),
        reference_video: input.pose.reference_video(),
        input: input.input_path.display().to_string(),
        n_frames,
        n_detected,
        detected_fraction: fraction(n_detected, n_frames),
        accuracy,
        frames_at_target,
        target_score: input.profile.target_score,
        sub_scores,
        feedback,
        weakest,
    }
}

pub fn build_session_summary(input: &SessionRunInput<'_>) -> SessionSummary {
    SessionSummary {
        tool: ToolMeta::current(),
        lesson: input.lesson.to_string(),
        mode: input.mode,
        input: input.input_path.display().to_string(),
        profile: input.profile.clone(),
        frames_total: input.report.frames_total,
        frames_consumed: input.report.frames_consumed,
        poses_completed: input.report.outcomes.iter().filter(|o| o.completed).count(),
        log_entries: input.report.log.len(),
        outcomes: input.report.outcomes.clone(),
    }
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_report.rs"]
mod tests;
