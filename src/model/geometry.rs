use crate::model::landmarks::BodyJoints;

/// Smallest body-scale denominator used when normalizing distances.
pub const MIN_BODY_SCALE: f64 = 1e-6;

/// Angle returned for degenerate (zero-length) limb vectors.
pub const STRAIGHT_ANGLE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Interior angle at `b` formed by b->a and b->c, in degrees within [0, 180].
///
/// A zero-length vector on either side yields 180 (treated as an unbent joint),
/// as do vectors too short for their magnitudes to multiply without underflow.
pub fn joint_angle(a: Point, b: Point, c: Point) -> f64 {
    let ba = (a.x - b.x, a.y - b.y);
    let bc = (c.x - b.x, c.y - b.y);
    let denom = ba.0.hypot(ba.1) * bc.0.hypot(bc.1);
    let cos = (ba.0 * bc.0 + ba.1 * bc.1) / denom;
    // Zero-length vectors, and magnitudes whose product underflows.
    if denom == 0.0 || !cos.is_finite() {
        return STRAIGHT_ANGLE;
    }
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Linear falloff: 1 at `target`, 0 at or beyond `tolerance` away.
pub fn score_angle(actual: f64, target: f64, tolerance: f64) -> f64 {
    (1.0 - (actual - target).abs() / tolerance).max(0.0)
}

/// Shoulder-midpoint to hip-midpoint distance, the body-scale unit.
pub fn torso_length(joints: &BodyJoints) -> f64 {
    let shoulder_mid = joints.left_shoulder.midpoint(joints.right_shoulder);
    let hip_mid = joints.left_hip.midpoint(joints.right_hip);
    shoulder_mid.distance(hip_mid)
}

/// Divides by a body-scale denominator clamped to [`MIN_BODY_SCALE`].
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    numerator / denominator.max(MIN_BODY_SCALE)
}

pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/geometry.rs"]
mod tests;
