
use super::*;

#[test]
fn test_score_args() {
    let cli = Cli::try_parse_from([
        "posescore",
        "score",
        "--pose",
        "warrior_ii",
        "--input",
        "frames.jsonl",
        "--out",
        "out",
    ])
    .unwrap();
    assert!(!cli.verbose);
    match cli.command {
        Command::Score(args) => {
            assert_eq!(args.pose, PoseKind::Warrior2);
            assert_eq!(args.input, PathBuf::from("frames.jsonl"));
            assert_eq!(args.fps, 30.0);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_score_rejects_unknown_pose() {
    let parsed = Cli::try_parse_from([
        "posescore", "score", "--pose", "lotus", "--input", "f", "--out", "o",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn test_lesson_with_pose_list() {
    let cli = Cli::try_parse_from([
        "posescore",
        "-v",
        "lesson",
        "--poses",
        "tree,WARRIOR2",
        "--input",
        "frames.jsonl.gz",
        "--out",
        "out",
        "--mode",
        "video",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Lesson(args) => {
            assert_eq!(args.lesson, None);
            assert_eq!(args.poses, vec![PoseKind::Tree, PoseKind::Warrior2]);
            assert_eq!(args.mode, SessionMode::Video);
            assert_eq!(args.profile, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_lesson_by_title_defaults_to_coach() {
    let cli = Cli::try_parse_from([
        "posescore",
        "lesson",
        "--lesson",
        "Beginner Flow",
        "--input",
        "f",
        "--out",
        "o",
        "--profile",
        "profile.json",
    ])
    .unwrap();
    match cli.command {
        Command::Lesson(args) => {
            assert_eq!(args.lesson.as_deref(), Some("Beginner Flow"));
            assert!(args.poses.is_empty());
            assert_eq!(args.mode, SessionMode::Coach);
            assert_eq!(args.profile, Some(PathBuf::from("profile.json")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_lesson_and_poses_conflict() {
    let both = Cli::try_parse_from([
        "posescore", "lesson", "--lesson", "Test Journey", "--poses", "tree", "--input", "f",
        "--out", "o",
    ]);
    assert!(both.is_err());

    let neither = Cli::try_parse_from(["posescore", "lesson", "--input", "f", "--out", "o"]);
    assert!(neither.is_err());
}

#[test]
fn test_render_lessons_lists_titles_and_poses() {
    let text = render_lessons(&ScorerRegistry::builtin());
    assert!(text.contains("Beginner Flow: Mountain -> Tree\n"));
    assert!(text.contains("Test Journey: Tree -> Warrior II -> Mountain\n"));
    assert!(text.contains("  The best way to see how you do yoga!\n"));
    assert!(text.ends_with("Poses: MOUNTAIN, TREE, WARRIOR2\n"));
}
