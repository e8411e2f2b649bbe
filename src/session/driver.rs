use clap::ValueEnum;
use serde::Serialize;

use crate::feedback::synthesize_for;
use crate::input::Frame;
use crate::model::poses::PoseKind;
use crate::model::thresholds::ThresholdProfile;
use crate::scoring::ScorerRegistry;
use crate::session::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Score with textual feedback and joint highlights.
    Coach,
    /// Score only.
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreLogEntry {
    pub pose: PoseKind,
    pub score: f64,
    pub t: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseOutcome {
    pub pose: PoseKind,
    pub completed: bool,
    pub frames_seen: usize,
    pub frames_scored: usize,
    pub best_score: f64,
    pub hold_started_at: Option<f64>,
    pub held_secs: f64,
    /// Feedback of the last scored frame (coach mode only).
    pub last_feedback: Vec<String>,
    pub last_highlights: Vec<usize>,
}

impl PoseOutcome {
    fn new(pose: PoseKind) -> Self {
        Self {
            pose,
            completed: false,
            frames_seen: 0,
            frames_scored: 0,
            best_score: 0.0,
            hold_started_at: None,
            held_secs: 0.0,
            last_feedback: Vec::new(),
            last_highlights: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub outcomes: Vec<PoseOutcome>,
    pub log: Vec<ScoreLogEntry>,
    pub frames_total: usize,
    pub frames_consumed: usize,
}

#[derive(Debug, Clone, Copy)]
struct Hold {
    start: f64,
    last_log: f64,
}

/// Replays a frame stream through a sequence of poses, one frame at a time.
pub struct SessionDriver<'a> {
    registry: &'a ScorerRegistry,
    profile: &'a ThresholdProfile,
    mode: SessionMode,
}

impl<'a> SessionDriver<'a> {
    pub fn new(
        registry: &'a ScorerRegistry,
        profile: &'a ThresholdProfile,
        mode: SessionMode,
    ) -> Self {
        Self {
            registry,
            profile,
            mode,
        }
    }

    pub fn run(
        &self,
        poses: &[PoseKind],
        frames: &[Frame],
    ) -> Result<SessionReport, SessionError> {
        if poses.is_empty() {
            return Err(SessionError::EmptyPoseList);
        }
        for &pose in poses {
            self.registry.require(pose)?;
        }

        let mut cursor = 0usize;
        let mut log = Vec::new();
        let mut outcomes = Vec::with_capacity(poses.len());
        for &pose in poses {
            let outcome = self.run_pose(pose, frames, &mut cursor, &mut log);
            if outcome.completed {
                tracing::info!(
                    pose = %pose,
                    best_score = outcome.best_score,
                    frames = outcome.frames_seen,
                    "pose held"
                );
            } else {
                tracing::warn!(
                    pose = %pose,
                    best_score = outcome.best_score,
                    held_secs = outcome.held_secs,
                    "frames ran out before the pose was held"
                );
            }
            outcomes.push(outcome);
        }

        Ok(SessionReport {
            outcomes,
            log,
            frames_total: frames.len(),
            frames_consumed: cursor,
        })
    }

    fn run_pose(
        &self,
        pose: PoseKind,
        frames: &[Frame],
        cursor: &mut usize,
        log: &mut Vec<ScoreLogEntry>,
    ) -> PoseOutcome {
        let mut outcome = PoseOutcome::new(pose);
        let mut hold: Option<Hold> = None;

        while let Some(frame) = frames.get(*cursor) {
            *cursor += 1;
            outcome.frames_seen += 1;

            let mut score = 0.0;
            if let Some(joints) = frame.joints() {
                if let Some(result) = self.registry.score(pose, &joints) {
                    score = result.accuracy;
                    outcome.frames_scored += 1;
                    if self.mode == SessionMode::Coach {
                        let feedback = synthesize_for(&result);
                        outcome.last_feedback = feedback
                            .messages()
                            .into_iter()
                            .take(self.profile.max_feedback_lines)
                            .map(str::to_string)
                            .collect();
                        outcome.last_highlights =
                            feedback.highlight_indices().into_iter().collect();
                    }
                }
            }
            outcome.best_score = outcome.best_score.max(score);

            if hold.is_none() && score >= self.profile.target_score {
                tracing::debug!(pose = %pose, t = frame.t, score, "hold started");
                hold = Some(Hold {
                    start: frame.t,
                    last_log: frame.t,
                });
                outcome.hold_started_at = Some(frame.t);
                log.push(ScoreLogEntry {
                    pose,
                    score,
                    t: frame.t,
                });
            }

            if let Some(h) = hold.as_mut() {
                let elapsed = frame.t - h.start;
                if frame.t - h.last_log >= self.profile.log_interval_secs {
                    log.push(ScoreLogEntry {
                        pose,
                        score,
                        t: frame.t,
                    });
                    h.last_log = frame.t;
                }
                outcome.held_secs = elapsed;
                if elapsed >= self.profile.hold_secs {
                    outcome.completed = true;
                    break;
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/session/driver.rs"]
mod tests;
