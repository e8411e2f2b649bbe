use crate::model::geometry::{Point, joint_angle};

/// Landmarks per frame in the standard body layout.
pub const LANDMARK_COUNT: usize = 33;

/// Shortest landmark sequence that still covers every joint the scorers read.
pub const MIN_LANDMARKS: usize = LandmarkIndex::RightAnkle as usize + 1;

/// Positions in the 33-point body layout that scoring and highlighting use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
}

impl LandmarkIndex {
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility: None,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Three consecutive joints of an arm or leg; the angle is measured at `joint`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limb {
    pub root: Point,
    pub joint: Point,
    pub end: Point,
}

impl Limb {
    pub fn angle(&self) -> f64 {
        joint_angle(self.root, self.joint, self.end)
    }
}

/// Named view over the twelve joints the scorers read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyJoints {
    pub left_shoulder: Point,
    pub right_shoulder: Point,
    pub left_elbow: Point,
    pub right_elbow: Point,
    pub left_wrist: Point,
    pub right_wrist: Point,
    pub left_hip: Point,
    pub right_hip: Point,
    pub left_knee: Point,
    pub right_knee: Point,
    pub left_ankle: Point,
    pub right_ankle: Point,
}

impl BodyJoints {
    /// Panics if `landmarks` is shorter than [`MIN_LANDMARKS`]; callers that
    /// read untrusted input validate the length first.
    pub fn from_landmarks(landmarks: &[Landmark]) -> Self {
        let at = |idx: LandmarkIndex| landmarks[idx.index()].point();
        Self {
            left_shoulder: at(LandmarkIndex::LeftShoulder),
            right_shoulder: at(LandmarkIndex::RightShoulder),
            left_elbow: at(LandmarkIndex::LeftElbow),
            right_elbow: at(LandmarkIndex::RightElbow),
            left_wrist: at(LandmarkIndex::LeftWrist),
            right_wrist: at(LandmarkIndex::RightWrist),
            left_hip: at(LandmarkIndex::LeftHip),
            right_hip: at(LandmarkIndex::RightHip),
            left_knee: at(LandmarkIndex::LeftKnee),
            right_knee: at(LandmarkIndex::RightKnee),
            left_ankle: at(LandmarkIndex::LeftAnkle),
            right_ankle: at(LandmarkIndex::RightAnkle),
        }
    }

    /// Shoulder, elbow, wrist.
    pub fn arm(&self, side: Side) -> Limb {
        match side {
            Side::Left => Limb {
                root: self.left_shoulder,
                joint: self.left_elbow,
                end: self.left_wrist,
            },
            Side::Right => Limb {
                root: self.right_shoulder,
                joint: self.right_elbow,
                end: self.right_wrist,
            },
        }
    }

    /// Hip, knee, ankle.
    pub fn leg(&self, side: Side) -> Limb {
        match side {
            Side::Left => Limb {
                root: self.left_hip,
                joint: self.left_knee,
                end: self.left_ankle,
            },
            Side::Right => Limb {
                root: self.right_hip,
                joint: self.right_knee,
                end: self.right_ankle,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/landmarks.rs"]
mod tests;
