use crate::model::landmarks::Side;
use crate::model::poses::PoseKind;

/// Every sub-score name any pose can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubScoreKey {
    FrontKnee,
    BackKnee,
    LeftArm,
    RightArm,
    LeftElbow,
    RightElbow,
    StandingLeg,
    LiftedFoot,
    Hands,
    HandHeight,
    ArmWidth,
    LeftLeg,
    RightLeg,
}

impl SubScoreKey {
    pub fn name(self) -> &'static str {
        match self {
            SubScoreKey::FrontKnee => "front_knee",
            SubScoreKey::BackKnee => "back_knee",
            SubScoreKey::LeftArm => "left_arm",
            SubScoreKey::RightArm => "right_arm",
            SubScoreKey::LeftElbow => "left_elbow",
            SubScoreKey::RightElbow => "right_elbow",
            SubScoreKey::StandingLeg => "standing_leg",
            SubScoreKey::LiftedFoot => "lifted_foot",
            SubScoreKey::Hands => "hands",
            SubScoreKey::HandHeight => "hand_height",
            SubScoreKey::ArmWidth => "arm_width",
            SubScoreKey::LeftLeg => "left_leg",
            SubScoreKey::RightLeg => "right_leg",
        }
    }

    /// Keys a pose's scorer emits, in emission order.
    pub fn for_pose(pose: PoseKind) -> &'static [SubScoreKey] {
        match pose {
            PoseKind::Mountain => &[
                SubScoreKey::LeftArm,
                SubScoreKey::RightArm,
                SubScoreKey::ArmWidth,
                SubScoreKey::LeftLeg,
                SubScoreKey::RightLeg,
            ],
            PoseKind::Tree => &[
                SubScoreKey::StandingLeg,
                SubScoreKey::LiftedFoot,
                SubScoreKey::Hands,
                SubScoreKey::HandHeight,
            ],
            PoseKind::Warrior2 => &[
                SubScoreKey::FrontKnee,
                SubScoreKey::BackKnee,
                SubScoreKey::LeftArm,
                SubScoreKey::RightArm,
                SubScoreKey::LeftElbow,
                SubScoreKey::RightElbow,
            ],
        }
    }
}

/// Sub-scores in [0, 1] keyed by [`SubScoreKey`]; iteration keeps insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubScores {
    entries: Vec<(SubScoreKey, f64)>,
}

impl SubScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value if `key` is already present.
    pub fn insert(&mut self, key: SubScoreKey, value: f64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: SubScoreKey) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SubScoreKey, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mean(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.entries.iter().map(|(_, v)| v).sum();
        sum / self.len() as f64
    }

    /// Lowest-scoring key; the earliest one wins ties.
    pub fn weakest(&self) -> Option<(SubScoreKey, f64)> {
        let mut out: Option<(SubScoreKey, f64)> = None;
        for (key, value) in self.iter() {
            match out {
                Some((_, best)) if best <= value => {}
                _ => out = Some((key, value)),
            }
        }
        out
    }
}

impl FromIterator<(SubScoreKey, f64)> for SubScores {
    fn from_iter<I: IntoIterator<Item = (SubScoreKey, f64)>>(iter: I) -> Self {
        let mut out = SubScores::new();
        for (key, value) in iter {
            out.insert(key, value);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoseResult {
    pub pose: PoseKind,
    /// Mean of all sub-scores, as a percentage.
    pub accuracy: f64,
    pub sub_scores: SubScores,
    /// Leg resolved as the bent front leg (Warrior II only).
    pub front_leg: Option<Side>,
    /// Leg resolved as the straight standing leg (Tree only).
    pub standing_leg: Option<Side>,
}

impl PoseResult {
    pub fn new(pose: PoseKind, sub_scores: SubScores) -> Self {
        Self {
            pose,
            accuracy: sub_scores.mean() * 100.0,
            sub_scores,
            front_leg: None,
            standing_leg: None,
        }
    }
}
