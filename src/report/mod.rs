pub mod json;
pub mod text;
pub mod tsv;

use serde::Serialize;
use thiserror::Error;

use crate::model::poses::PoseKind;
use crate::model::thresholds::ThresholdProfile;
use crate::session::SessionMode;
use crate::session::driver::PoseOutcome;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccuracyStats {
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CueCount {
    pub key: &'static str,
    pub message: &'static str,
    pub frames: usize,
    /// Share of detected frames that raised this cue.
    pub fraction: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub tool: ToolMeta,
    pub pose: PoseKind,
    pub pose_name: &'static str,
    pub reference_video: &'static str,
    pub input: String,
    pub n_frames: usize,
    pub n_detected: usize,
    pub detected_fraction: f64,
    pub accuracy: AccuracyStats,
    pub frames_at_target: usize,
    pub target_score: f64,
    pub sub_scores: Vec<NamedStats>,
    pub feedback: Vec<CueCount>,
    pub weakest: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub tool: ToolMeta,
    pub lesson: String,
    pub mode: SessionMode,
    pub input: String,
    pub profile: ThresholdProfile,
    pub frames_total: usize,
    pub frames_consumed: usize,
    pub poses_completed: usize,
    pub log_entries: usize,
    pub outcomes: Vec<PoseOutcome>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}
