use std::collections::BTreeSet;

use crate::model::landmarks::{LandmarkIndex, Side};
use crate::model::subscores::{PoseResult, SubScoreKey, SubScores};

/// Sub-scores strictly below this produce feedback.
pub const FEEDBACK_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackItem {
    pub key: SubScoreKey,
    pub message: &'static str,
    pub highlights: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feedback {
    pub items: Vec<FeedbackItem>,
}

impl Feedback {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.items.iter().map(|item| item.message).collect()
    }

    pub fn highlight_indices(&self) -> BTreeSet<usize> {
        self.items
            .iter()
            .flat_map(|item| item.highlights.iter().copied())
            .collect()
    }
}

/// Emission order; independent of the pose and of map insertion order.
pub fn feedback_order() -> &'static [SubScoreKey] {
    &[
        SubScoreKey::FrontKnee,
        SubScoreKey::BackKnee,
        SubScoreKey::LeftArm,
        SubScoreKey::RightArm,
        SubScoreKey::LeftElbow,
        SubScoreKey::RightElbow,
        SubScoreKey::StandingLeg,
        SubScoreKey::LiftedFoot,
        SubScoreKey::Hands,
        SubScoreKey::HandHeight,
    ]
}

pub fn feedback_message(key: SubScoreKey) -> Option<&'static str> {
    let msg = match key {
        SubScoreKey::FrontKnee => "Front knee not bent enough or too bent",
        SubScoreKey::BackKnee => "Back leg should be straight",
        SubScoreKey::LeftArm => "Left arm not level with shoulder",
        SubScoreKey::RightArm => "Right arm not level with shoulder",
        SubScoreKey::LeftElbow => "Left elbow not fully extended",
        SubScoreKey::RightElbow => "Right elbow not fully extended",
        SubScoreKey::StandingLeg => "Standing leg should be straight",
        SubScoreKey::LiftedFoot => "Lifted foot not high enough",
        SubScoreKey::Hands => "Hands too far apart or too close",
        SubScoreKey::HandHeight => "Hands not level with shoulders",
        SubScoreKey::ArmWidth | SubScoreKey::LeftLeg | SubScoreKey::RightLeg => return None,
    };
    Some(msg)
}

/// Landmarks to flag for `key`. Without a resolved front leg the left knee
/// stands in for the front knee.
pub fn highlight_targets(key: SubScoreKey, front_leg: Option<Side>) -> Vec<usize> {
    let front = front_leg.unwrap_or(Side::Left);
    let targets: &[LandmarkIndex] = match key {
        SubScoreKey::FrontKnee => knee(front),
        SubScoreKey::BackKnee => knee(front.other()),
        SubScoreKey::LeftArm => &[LandmarkIndex::LeftWrist],
        SubScoreKey::RightArm => &[LandmarkIndex::RightWrist],
        SubScoreKey::LeftElbow => &[LandmarkIndex::LeftElbow],
        SubScoreKey::RightElbow => &[LandmarkIndex::RightElbow],
        SubScoreKey::Hands | SubScoreKey::HandHeight => {
            &[LandmarkIndex::LeftWrist, LandmarkIndex::RightWrist]
        }
        SubScoreKey::LiftedFoot => &[LandmarkIndex::LeftAnkle, LandmarkIndex::RightAnkle],
        SubScoreKey::StandingLeg
        | SubScoreKey::ArmWidth
        | SubScoreKey::LeftLeg
        | SubScoreKey::RightLeg => &[],
    };
    targets.iter().map(|t| t.index()).collect()
}

fn knee(side: Side) -> &'static [LandmarkIndex] {
    match side {
        Side::Left => &[LandmarkIndex::LeftKnee],
        Side::Right => &[LandmarkIndex::RightKnee],
    }
}

pub fn synthesize(scores: &SubScores, front_leg: Option<Side>) -> Feedback {
    let mut items = Vec::new();
    for &key in feedback_order() {
        let Some(value) = scores.get(key) else {
            continue;
        };
        if value >= FEEDBACK_THRESHOLD {
            continue;
        }
        if let Some(message) = feedback_message(key) {
            items.push(FeedbackItem {
                key,
                message,
                highlights: highlight_targets(key, front_leg),
            });
        }
    }
    Feedback { items }
}

pub fn synthesize_for(result: &PoseResult) -> Feedback {
    synthesize(&result.sub_scores, result.front_leg)
}

#[cfg(test)]
#[path = "../../tests/src_inline/feedback/tests.rs"]
mod tests;
