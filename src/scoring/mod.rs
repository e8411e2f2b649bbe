pub mod mountain;
pub mod tree;
pub mod warrior2;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::landmarks::BodyJoints;
use crate::model::poses::PoseKind;
use crate::model::subscores::PoseResult;

pub use mountain::MountainScorer;
pub use tree::TreeScorer;
pub use warrior2::Warrior2Scorer;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("no scorer registered for pose {0}")]
    NoScorer(PoseKind),
}

/// A stateless, frame-local scorer for one pose.
pub trait PoseScorer: Send + Sync {
    fn pose(&self) -> PoseKind;

    fn score(&self, joints: &BodyJoints) -> PoseResult;
}

/// Pose id to scorer lookup, built once and shared read-only.
pub struct ScorerRegistry {
    scorers: BTreeMap<PoseKind, Box<dyn PoseScorer>>,
}

impl ScorerRegistry {
    pub fn empty() -> Self {
        Self {
            scorers: BTreeMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(MountainScorer));
        registry.register(Box::new(TreeScorer));
        registry.register(Box::new(Warrior2Scorer));
        registry
    }

    pub fn register(&mut self, scorer: Box<dyn PoseScorer>) {
        self.scorers.insert(scorer.pose(), scorer);
    }

    pub fn resolve(&self, pose: PoseKind) -> Option<&dyn PoseScorer> {
        self.scorers.get(&pose).map(|s| s.as_ref())
    }

    pub fn require(&self, pose: PoseKind) -> Result<&dyn PoseScorer, ScoringError> {
        self.resolve(pose).ok_or(ScoringError::NoScorer(pose))
    }

    pub fn poses(&self) -> impl Iterator<Item = PoseKind> + '_ {
        self.scorers.keys().copied()
    }

    pub fn score(&self, pose: PoseKind, joints: &BodyJoints) -> Option<PoseResult> {
        let result = self.resolve(pose)?.score(joints);
        tracing::trace!(pose = %pose, accuracy = result.accuracy, "scored frame");
        Some(result)
    }
}
