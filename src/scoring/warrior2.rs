use crate::model::geometry::{STRAIGHT_ANGLE, clip01, score_angle};
use crate::model::landmarks::{BodyJoints, Limb, Side};
use crate::model::poses::PoseKind;
use crate::model::subscores::{PoseResult, SubScoreKey, SubScores};
use crate::scoring::PoseScorer;

/// Knee angle used to pick which leg is the lunging one.
const FRONT_KNEE_PIVOT: f64 = 95.0;
const FRONT_KNEE_TARGET: f64 = 105.0;
const FRONT_KNEE_TOLERANCE: f64 = 90.0;
const BACK_KNEE_TOLERANCE: f64 = 70.0;
const ARM_LEVEL_TOLERANCE: f64 = 0.3;
/// Elbow angle at which the extension ramp starts rising towards 180.
const ELBOW_RAMP_START: f64 = 135.0;

pub struct Warrior2Scorer;

impl PoseScorer for Warrior2Scorer {
    fn pose(&self) -> PoseKind {
        PoseKind::Warrior2
    }

    fn score(&self, joints: &BodyJoints) -> PoseResult {
        score_warrior2(joints)
    }
}

pub fn score_warrior2(joints: &BodyJoints) -> PoseResult {
    let left_knee = joints.leg(Side::Left).angle();
    let right_knee = joints.leg(Side::Right).angle();

    let front_side = if (left_knee - FRONT_KNEE_PIVOT).abs() < (right_knee - FRONT_KNEE_PIVOT).abs()
    {
        Side::Left
    } else {
        Side::Right
    };
    let (front_knee, back_knee) = match front_side {
        Side::Left => (left_knee, right_knee),
        Side::Right => (right_knee, left_knee),
    };

    let left_arm = joints.arm(Side::Left);
    let right_arm = joints.arm(Side::Right);

    let mut scores = SubScores::new();
    scores.insert(
        SubScoreKey::FrontKnee,
        score_angle(front_knee, FRONT_KNEE_TARGET, FRONT_KNEE_TOLERANCE),
    );
    scores.insert(
        SubScoreKey::BackKnee,
        score_angle(back_knee, STRAIGHT_ANGLE, BACK_KNEE_TOLERANCE),
    );
    scores.insert(SubScoreKey::LeftArm, arm_level(&left_arm));
    scores.insert(SubScoreKey::RightArm, arm_level(&right_arm));
    scores.insert(SubScoreKey::LeftElbow, elbow_score(&left_arm));
    scores.insert(SubScoreKey::RightElbow, elbow_score(&right_arm));

    let mut result = PoseResult::new(PoseKind::Warrior2, scores);
    result.front_leg = Some(front_side);
    result
}

/// How close the wrist sits to shoulder height.
fn arm_level(arm: &Limb) -> f64 {
    (1.0 - (arm.root.y - arm.end.y).abs() / ARM_LEVEL_TOLERANCE).max(0.0)
}

/// Blend of extension (135..180 degrees ramp) and levelness.
fn elbow_score(arm: &Limb) -> f64 {
    let extension =
        clip01((arm.angle() - ELBOW_RAMP_START) / (STRAIGHT_ANGLE - ELBOW_RAMP_START));
    (extension + arm_level(arm)) / 2.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/warrior2.rs"]
mod tests;
