pub mod driver;
pub mod lessons;

use thiserror::Error;

use crate::model::poses::PoseKind;
use crate::scoring::ScoringError;

pub use driver::{SessionDriver, SessionMode, SessionReport};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown lesson `{0}` (run `posescore lessons` to list them)")]
    UnknownLesson(String),
    #[error("no poses to run")]
    EmptyPoseList,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Picks the pose sequence from a lesson title or an explicit list.
pub fn resolve_poses(
    lesson: Option<&str>,
    poses: &[PoseKind],
) -> Result<(String, Vec<PoseKind>), SessionError> {
    let (title, poses) = match lesson {
        Some(title) => {
            let lesson = lessons::find_lesson(title)
                .ok_or_else(|| SessionError::UnknownLesson(title.to_string()))?;
            (lesson.title.to_string(), lesson.poses.to_vec())
        }
        None => ("Custom".to_string(), poses.to_vec()),
    };
    if poses.is_empty() {
        return Err(SessionError::EmptyPoseList);
    }
    Ok((title, poses))
}
