use crate::model::geometry::{STRAIGHT_ANGLE, clip01, ratio, score_angle};
use crate::model::landmarks::{BodyJoints, Side};
use crate::model::poses::PoseKind;
use crate::model::subscores::{PoseResult, SubScoreKey, SubScores};
use crate::scoring::PoseScorer;

/// Vertical wrist rise over the shoulder that counts as a fully raised arm.
const ARM_RAISE_RANGE: f64 = 0.25;
const ARM_HEIGHT_WEIGHT: f64 = 0.7;
const ARM_STRAIGHT_WEIGHT: f64 = 0.3;
const ARM_STRAIGHT_TOLERANCE: f64 = 60.0;
/// Relaxed V: wrists about 1.8 shoulder widths apart.
const IDEAL_WIDTH_RATIO: f64 = 1.8;
const WIDTH_RATIO_TOLERANCE: f64 = 0.8;
const LEG_TOLERANCE: f64 = 35.0;

pub struct MountainScorer;

impl PoseScorer for MountainScorer {
    fn pose(&self) -> PoseKind {
        PoseKind::Mountain
    }

    fn score(&self, joints: &BodyJoints) -> PoseResult {
        score_mountain(joints)
    }
}

pub fn score_mountain(joints: &BodyJoints) -> PoseResult {
    let shoulder_width = (joints.left_shoulder.x - joints.right_shoulder.x).abs();
    let wrist_width = (joints.left_wrist.x - joints.right_wrist.x).abs();
    let width_ratio = ratio(wrist_width, shoulder_width);

    let mut scores = SubScores::new();
    scores.insert(SubScoreKey::LeftArm, arm_score(joints, Side::Left));
    scores.insert(SubScoreKey::RightArm, arm_score(joints, Side::Right));
    scores.insert(
        SubScoreKey::ArmWidth,
        score_angle(width_ratio, IDEAL_WIDTH_RATIO, WIDTH_RATIO_TOLERANCE),
    );
    scores.insert(SubScoreKey::LeftLeg, leg_score(joints, Side::Left));
    scores.insert(SubScoreKey::RightLeg, leg_score(joints, Side::Right));

    PoseResult::new(PoseKind::Mountain, scores)
}

fn arm_score(joints: &BodyJoints, side: Side) -> f64 {
    let arm = joints.arm(side);
    let height = clip01((arm.root.y - arm.end.y) / ARM_RAISE_RANGE);
    let straight = score_angle(arm.angle(), STRAIGHT_ANGLE, ARM_STRAIGHT_TOLERANCE);
    ARM_HEIGHT_WEIGHT * height + ARM_STRAIGHT_WEIGHT * straight
}

fn leg_score(joints: &BodyJoints, side: Side) -> f64 {
    score_angle(joints.leg(side).angle(), STRAIGHT_ANGLE, LEG_TOLERANCE)
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/mountain.rs"]
mod tests;
