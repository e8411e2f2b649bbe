use crate::feedback::{Feedback, synthesize_for};
use crate::input::Frame;
use crate::model::poses::PoseKind;
use crate::model::subscores::PoseResult;
use crate::scoring::{ScorerRegistry, ScoringError};

#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvaluation {
    pub index: usize,
    pub t: f64,
    /// `None` when the frame had no detected body.
    pub result: Option<PoseResult>,
    pub feedback: Feedback,
}

pub fn evaluate_frames(
    registry: &ScorerRegistry,
    pose: PoseKind,
    frames: &[Frame],
) -> Result<Vec<FrameEvaluation>, ScoringError> {
    let scorer = registry.require(pose)?;

    let mut out = Vec::with_capacity(frames.len());
    for frame in frames {
        let result = frame.joints().map(|joints| scorer.score(&joints));
        let feedback = result.as_ref().map(synthesize_for).unwrap_or_default();
        out.push(FrameEvaluation {
            index: frame.index,
            t: frame.t,
            result,
            feedback,
        });
    }

    let skipped = out.iter().filter(|e| e.result.is_none()).count();
    let flagged = out.iter().filter(|e| !e.feedback.is_empty()).count();
    tracing::debug!(
        pose = %pose,
        frames = out.len(),
        skipped,
        flagged,
        "evaluated frames"
    );
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_evaluate.rs"]
mod tests;
