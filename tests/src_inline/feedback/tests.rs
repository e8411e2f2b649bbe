use super::{FEEDBACK_THRESHOLD, feedback_message, feedback_order, synthesize, synthesize_for};
use crate::fixtures;
use crate::model::landmarks::Side;
use crate::model::subscores::{SubScoreKey, SubScores};
use crate::scoring::{tree, warrior2};

fn scores(entries: &[(SubScoreKey, f64)]) -> SubScores {
    entries.iter().copied().collect()
}

#[test]
fn test_single_low_front_knee() {
    let input = scores(&[(SubScoreKey::FrontKnee, 0.5), (SubScoreKey::BackKnee, 0.95)]);
    let feedback = synthesize(&input, None);
    assert_eq!(
        feedback.messages(),
        vec!["Front knee not bent enough or too bent"]
    );
    assert!(feedback.highlight_indices().contains(&25));
    assert_eq!(feedback.highlight_indices().len(), 1);
}

#[test]
fn test_all_above_threshold_is_empty() {
    let input = scores(&[
        (SubScoreKey::FrontKnee, 0.8),
        (SubScoreKey::BackKnee, 1.0),
        (SubScoreKey::LeftArm, 0.81),
        (SubScoreKey::RightArm, FEEDBACK_THRESHOLD),
    ]);
    let feedback = synthesize(&input, Some(Side::Left));
    assert!(feedback.is_empty());
    assert!(feedback.highlight_indices().is_empty());
}

#[test]
fn test_order_ignores_insertion_order() {
    let forward = scores(&[
        (SubScoreKey::Hands, 0.1),
        (SubScoreKey::StandingLeg, 0.1),
        (SubScoreKey::HandHeight, 0.1),
        (SubScoreKey::LiftedFoot, 0.1),
    ]);
    let backward = scores(&[
        (SubScoreKey::LiftedFoot, 0.1),
        (SubScoreKey::HandHeight, 0.1),
        (SubScoreKey::StandingLeg, 0.1),
        (SubScoreKey::Hands, 0.1),
    ]);
    let expected = vec![
        "Standing leg should be straight",
        "Lifted foot not high enough",
        "Hands too far apart or too close",
        "Hands not level with shoulders",
    ];
    assert_eq!(synthesize(&forward, None).messages(), expected);
    assert_eq!(synthesize(&backward, None).messages(), expected);
}

#[test]
fn test_right_front_leg_swaps_knee_highlights() {
    let input = scores(&[(SubScoreKey::FrontKnee, 0.2), (SubScoreKey::BackKnee, 0.2)]);
    let left = synthesize(&input, Some(Side::Left));
    assert_eq!(left.items[0].highlights, vec![25]);
    assert_eq!(left.items[1].highlights, vec![26]);

    let right = synthesize(&input, Some(Side::Right));
    assert_eq!(right.items[0].highlights, vec![26]);
    assert_eq!(right.items[1].highlights, vec![25]);
}

#[test]
fn test_keys_without_messages_are_silent() {
    let input = scores(&[
        (SubScoreKey::ArmWidth, 0.0),
        (SubScoreKey::LeftLeg, 0.0),
        (SubScoreKey::RightLeg, 0.0),
    ]);
    assert!(synthesize(&input, None).is_empty());
    assert_eq!(feedback_message(SubScoreKey::ArmWidth), None);
}

#[test]
fn test_arm_highlights_and_dedup() {
    let input = scores(&[
        (SubScoreKey::LeftArm, 0.0),
        (SubScoreKey::RightElbow, 0.0),
        (SubScoreKey::Hands, 0.0),
        (SubScoreKey::HandHeight, 0.0),
    ]);
    let feedback = synthesize(&input, None);
    let highlights: Vec<usize> = feedback.highlight_indices().into_iter().collect();
    assert_eq!(highlights, vec![14, 15, 16]);
}

#[test]
fn test_every_ordered_key_has_message() {
    for &key in feedback_order() {
        assert!(feedback_message(key).is_some(), "{}", key.name());
    }
}

#[test]
fn test_scored_poses_feed_back() {
    let perfect = warrior2::score_warrior2(&fixtures::warrior2_perfect());
    assert!(synthesize_for(&perfect).is_empty());

    let violated = tree::score_tree(&fixtures::tree_violated());
    assert_eq!(synthesize_for(&violated).items.len(), 4);

    let mirrored = warrior2::score_warrior2(&fixtures::warrior2_violated());
    let feedback = synthesize_for(&mirrored);
    assert_eq!(feedback.items.len(), 6);
    assert!(feedback.highlight_indices().contains(&25));
    assert!(feedback.highlight_indices().contains(&26));
}
