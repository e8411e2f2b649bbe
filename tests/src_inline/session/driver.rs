use super::{SessionDriver, SessionMode};
use crate::fixtures;
use crate::input::Frame;
use crate::model::landmarks::BodyJoints;
use crate::model::poses::PoseKind;
use crate::model::thresholds::ThresholdProfile;
use crate::scoring::{ScorerRegistry, ScoringError};
use crate::session::SessionError;

fn short_profile() -> ThresholdProfile {
    ThresholdProfile {
        target_score: 90.0,
        hold_secs: 1.0,
        log_interval_secs: 0.5,
        max_feedback_lines: 2,
    }
}

/// Frames spaced 0.25 s apart, starting at index `first`.
fn frames_from(first: usize, bodies: &[Option<BodyJoints>]) -> Vec<Frame> {
    bodies
        .iter()
        .enumerate()
        .map(|(i, body)| Frame {
            index: first + i,
            t: (first + i) as f64 * 0.25,
            landmarks: body.as_ref().map(fixtures::to_landmarks),
        })
        .collect()
}

fn log_times(report: &super::SessionReport) -> Vec<f64> {
    report.log.iter().map(|e| e.t).collect()
}

#[test]
fn test_hold_logs_on_cadence_and_completes() {
    let bad = Some(fixtures::mountain_violated());
    let good = Some(fixtures::mountain_perfect());
    let frames = frames_from(
        0,
        &[bad, bad, good, good, good, good, good, good, good],
    );
    let registry = ScorerRegistry::builtin();
    let profile = short_profile();
    let driver = SessionDriver::new(&registry, &profile, SessionMode::Video);
    let report = driver.run(&[PoseKind::Mountain], &frames).unwrap();

    let outcome = &report.outcomes[0];
    assert!(outcome.completed);
    assert_eq!(outcome.hold_started_at, Some(0.5));
    assert_eq!(outcome.held_secs, 1.0);
    assert_eq!(outcome.frames_seen, 7);
    assert_eq!(outcome.frames_scored, 7);
    assert!(outcome.best_score > 99.0);
    assert_eq!(log_times(&report), vec![0.5, 1.0, 1.5]);
    assert_eq!(report.frames_consumed, 7);
    assert_eq!(report.frames_total, 9);
}

#[test]
fn test_poses_consume_frames_in_sequence() {
    let mut bodies = vec![Some(fixtures::mountain_perfect()); 5];
    bodies.extend(vec![Some(fixtures::tree_perfect()); 5]);
    let frames = frames_from(0, &bodies);
    let registry = ScorerRegistry::builtin();
    let profile = short_profile();
    let driver = SessionDriver::new(&registry, &profile, SessionMode::Coach);
    let report = driver
        .run(&[PoseKind::Mountain, PoseKind::Tree], &frames)
        .unwrap();

    assert!(report.outcomes.iter().all(|o| o.completed));
    assert_eq!(report.outcomes[1].hold_started_at, Some(1.25));
    assert_eq!(log_times(&report), vec![0.0, 0.5, 1.0, 1.25, 1.75, 2.25]);
    let poses: Vec<PoseKind> = report.log.iter().map(|e| e.pose).collect();
    assert_eq!(
        poses,
        vec![
            PoseKind::Mountain,
            PoseKind::Mountain,
            PoseKind::Mountain,
            PoseKind::Tree,
            PoseKind::Tree,
            PoseKind::Tree
        ]
    );
    assert_eq!(report.frames_consumed, 10);
    assert!(report.outcomes[1].last_feedback.is_empty());
}

#[test]
fn test_hold_does_not_reset_when_score_drops() {
    let good = Some(fixtures::tree_perfect());
    let bad = Some(fixtures::tree_violated());
    let frames = frames_from(0, &[good, bad, bad, good, good]);
    let registry = ScorerRegistry::builtin();
    let profile = short_profile();
    let driver = SessionDriver::new(&registry, &profile, SessionMode::Video);
    let report = driver.run(&[PoseKind::Tree], &frames).unwrap();

    assert!(report.outcomes[0].completed);
    assert_eq!(report.frames_consumed, 5);
    let scores: Vec<f64> = report.log.iter().map(|e| e.score).collect();
    assert_eq!(log_times(&report), vec![0.0, 0.5, 1.0]);
    assert_eq!(scores[1], 0.0);
    assert!(scores[2] > 99.0);
}

#[test]
fn test_exhausted_frames_leave_pose_incomplete() {
    let frames = frames_from(0, &[Some(fixtures::warrior2_violated()); 6]);
    let registry = ScorerRegistry::builtin();
    let profile = short_profile();
    let driver = SessionDriver::new(&registry, &profile, SessionMode::Coach);
    let report = driver
        .run(&[PoseKind::Warrior2, PoseKind::Mountain], &frames)
        .unwrap();

    let first = &report.outcomes[0];
    assert!(!first.completed);
    assert_eq!(first.frames_seen, 6);
    assert_eq!(first.best_score, 0.0);
    assert_eq!(first.hold_started_at, None);
    assert_eq!(
        first.last_feedback,
        vec![
            "Front knee not bent enough or too bent".to_string(),
            "Back leg should be straight".to_string()
        ]
    );

    let second = &report.outcomes[1];
    assert!(!second.completed);
    assert_eq!(second.frames_seen, 0);
    assert!(report.log.is_empty());
}

#[test]
fn test_missing_detections_score_zero() {
    let frames = frames_from(0, &[None, None, None]);
    let registry = ScorerRegistry::builtin();
    let profile = short_profile();
    let driver = SessionDriver::new(&registry, &profile, SessionMode::Coach);
    let report = driver.run(&[PoseKind::Tree], &frames).unwrap();

    let outcome = &report.outcomes[0];
    assert_eq!(outcome.frames_seen, 3);
    assert_eq!(outcome.frames_scored, 0);
    assert_eq!(outcome.best_score, 0.0);
    assert!(outcome.last_feedback.is_empty());
}

#[test]
fn test_coach_mode_keeps_capped_feedback() {
    let frames = frames_from(0, &[Some(fixtures::tree_violated())]);
    let registry = ScorerRegistry::builtin();
    let profile = short_profile();

    let coach = SessionDriver::new(&registry, &profile, SessionMode::Coach)
        .run(&[PoseKind::Tree], &frames)
        .unwrap();
    let outcome = &coach.outcomes[0];
    assert_eq!(
        outcome.last_feedback,
        vec![
            "Standing leg should be straight".to_string(),
            "Lifted foot not high enough".to_string()
        ]
    );
    assert_eq!(outcome.last_highlights, vec![15, 16, 27, 28]);

    let video = SessionDriver::new(&registry, &profile, SessionMode::Video)
        .run(&[PoseKind::Tree], &frames)
        .unwrap();
    assert!(video.outcomes[0].last_feedback.is_empty());
    assert!(video.outcomes[0].last_highlights.is_empty());
}

#[test]
fn test_rejects_empty_pose_list_and_missing_scorer() {
    let frames = frames_from(0, &[None]);
    let profile = short_profile();

    let registry = ScorerRegistry::builtin();
    let driver = SessionDriver::new(&registry, &profile, SessionMode::Video);
    assert!(matches!(
        driver.run(&[], &frames),
        Err(SessionError::EmptyPoseList)
    ));

    let empty = ScorerRegistry::empty();
    let driver = SessionDriver::new(&empty, &profile, SessionMode::Video);
    assert!(matches!(
        driver.run(&[PoseKind::Tree], &frames),
        Err(SessionError::Scoring(ScoringError::NoScorer(
            PoseKind::Tree
        )))
    ));
}
