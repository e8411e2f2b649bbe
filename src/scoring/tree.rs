use crate::model::geometry::{STRAIGHT_ANGLE, ratio, score_angle, torso_length};
use crate::model::landmarks::{BodyJoints, Side};
use crate::model::poses::PoseKind;
use crate::model::subscores::{PoseResult, SubScoreKey, SubScores};
use crate::scoring::PoseScorer;

const STANDING_LEG_TOLERANCE: f64 = 30.0;
/// Ankle-to-knee drop (in torso lengths) at or below which the foot counts as lifted.
const LIFT_FULL: f64 = 0.15;
/// Drop above which the foot counts as grounded.
const LIFT_NONE: f64 = 0.35;
const LIFT_SPAN: f64 = 0.2;
const HANDS_FALLOFF: f64 = 2.0;
const HAND_HEIGHT_TOLERANCE: f64 = 0.35;

pub struct TreeScorer;

impl PoseScorer for TreeScorer {
    fn pose(&self) -> PoseKind {
        PoseKind::Tree
    }

    fn score(&self, joints: &BodyJoints) -> PoseResult {
        score_tree(joints)
    }
}

pub fn score_tree(joints: &BodyJoints) -> PoseResult {
    let torso = torso_length(joints);

    let (standing_side, standing_angle) = standing_leg(joints);

    let left_drop = (joints.left_ankle.y - joints.left_knee.y).abs();
    let right_drop = (joints.right_ankle.y - joints.right_knee.y).abs();
    let lifted = ratio(left_drop.min(right_drop), torso);

    let wrist_dist = ratio(joints.left_wrist.distance(joints.right_wrist), torso);
    let hands = (1.0 - wrist_dist * HANDS_FALLOFF).max(0.0);

    let avg_wrist_y = (joints.left_wrist.y + joints.right_wrist.y) / 2.0;
    let avg_shoulder_y = (joints.left_shoulder.y + joints.right_shoulder.y) / 2.0;
    let hand_height = (1.0 - (avg_wrist_y - avg_shoulder_y).abs() / HAND_HEIGHT_TOLERANCE).max(0.0);

    let mut scores = SubScores::new();
    scores.insert(
        SubScoreKey::StandingLeg,
        score_angle(standing_angle, STRAIGHT_ANGLE, STANDING_LEG_TOLERANCE),
    );
    scores.insert(SubScoreKey::LiftedFoot, lifted_foot_score(lifted));
    scores.insert(SubScoreKey::Hands, hands);
    scores.insert(SubScoreKey::HandHeight, hand_height);

    let mut result = PoseResult::new(PoseKind::Tree, scores);
    result.standing_leg = Some(standing_side);
    result
}

/// The straighter leg; the right leg must be strictly straighter to win.
fn standing_leg(joints: &BodyJoints) -> (Side, f64) {
    let left = joints.leg(Side::Left).angle();
    let right = joints.leg(Side::Right).angle();
    if (right - STRAIGHT_ANGLE).abs() < (left - STRAIGHT_ANGLE).abs() {
        (Side::Right, right)
    } else {
        (Side::Left, left)
    }
}

fn lifted_foot_score(lifted: f64) -> f64 {
    if lifted < LIFT_FULL {
        1.0
    } else if lifted > LIFT_NONE {
        0.0
    } else {
        1.0 - (lifted - LIFT_FULL) / LIFT_SPAN
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/tree.rs"]
mod tests;
