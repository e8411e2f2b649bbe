use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoseKind {
    Mountain,
    Tree,
    Warrior2,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pose `{0}` (use mountain|tree|warrior2)")]
pub struct UnknownPose(pub String);

impl PoseKind {
    pub fn all() -> &'static [PoseKind] {
        &[PoseKind::Mountain, PoseKind::Tree, PoseKind::Warrior2]
    }

    pub fn id(self) -> &'static str {
        match self {
            PoseKind::Mountain => "MOUNTAIN",
            PoseKind::Tree => "TREE",
            PoseKind::Warrior2 => "WARRIOR2",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PoseKind::Mountain => "Mountain",
            PoseKind::Tree => "Tree",
            PoseKind::Warrior2 => "Warrior II",
        }
    }

    /// Demonstration clip shown next to the camera feed.
    pub fn reference_video(self) -> &'static str {
        match self {
            PoseKind::Mountain => "mountain.MOV",
            PoseKind::Tree => "tree.MOV",
            PoseKind::Warrior2 => "warriorII.MOV",
        }
    }
}

impl fmt::Display for PoseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PoseKind {
    type Err = UnknownPose;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        if normalized == "warriorii" {
            return Ok(PoseKind::Warrior2);
        }
        PoseKind::all()
            .iter()
            .copied()
            .find(|pose| pose.id().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownPose(s.to_string()))
    }
}
