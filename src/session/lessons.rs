use crate::model::poses::PoseKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lesson {
    pub title: &'static str,
    pub description: &'static str,
    pub poses: &'static [PoseKind],
}

const BUILTIN_LESSONS: &[Lesson] = &[
    Lesson {
        title: "Beginner Flow",
        description: "A gentle flow to start your yoga journey.",
        poses: &[PoseKind::Mountain, PoseKind::Tree],
    },
    Lesson {
        title: "Intermediate Stretch",
        description: "Stretch and strengthen your body with this intermediate flow",
        poses: &[PoseKind::Tree, PoseKind::Warrior2],
    },
    Lesson {
        title: "Test Journey",
        description: "The best way to see how you do yoga!",
        poses: &[PoseKind::Tree, PoseKind::Warrior2, PoseKind::Mountain],
    },
];

pub fn builtin_lessons() -> &'static [Lesson] {
    BUILTIN_LESSONS
}

/// Case-insensitive lookup by title.
pub fn find_lesson(title: &str) -> Option<&'static Lesson> {
    let wanted = title.trim();
    BUILTIN_LESSONS
        .iter()
        .find(|l| l.title.eq_ignore_ascii_case(wanted))
}
