use crate::report::{ScoreSummary, SessionSummary, format_f64_6};
use crate::session::SessionMode;

pub fn render_score_report(data: &ScoreSummary) -> String {
    let mut out = String::new();

    out.push_str("Pose Accuracy Report\n");
    out.push_str("====================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!(
        "Pose: {} ({})\n",
        data.pose_name,
        data.pose.id()
    ));
    out.push_str(&format!("Reference video: {}\n", data.reference_video));
    out.push_str(&format!("Frames: {}\n", data.n_frames));
    out.push_str(&format!(
        "Body detected: {} ({})\n\n",
        data.n_detected,
        format_f64_6(data.detected_fraction)
    ));

    out.push_str("2. Accuracy\n");
    if data.n_detected == 0 {
        out.push_str("No frame contained a detected body; nothing was scored.\n\n");
    } else {
        out.push_str(&format!(
            "Mean: {}\nMedian: {}\nP10: {}\nP90: {}\nMax: {}\n",
            format_f64_6(data.accuracy.mean),
            format_f64_6(data.accuracy.median),
            format_f64_6(data.accuracy.p10),
            format_f64_6(data.accuracy.p90),
            format_f64_6(data.accuracy.max)
        ));
        out.push_str(&format!(
            "Frames at or above {}%: {}\n\n",
            data.target_score, data.frames_at_target
        ));
    }

    out.push_str("3. Sub-scores (median)\n");
    for stat in &data.sub_scores {
        out.push_str(&format!("{}: {}\n", stat.name, format_f64_6(stat.median)));
    }
    if let Some(weakest) = data.weakest {
        out.push_str(&format!("Weakest element: {}\n", weakest));
    }
    out.push('\n');

    out.push_str("4. Feedback\n");
    if data.feedback.is_empty() {
        out.push_str("No corrections needed.\n");
    } else {
        for cue in &data.feedback {
            out.push_str(&format!(
                "{} ({} frames, {})\n",
                cue.message,
                cue.frames,
                format_f64_6(cue.fraction)
            ));
        }
    }

    out
}

pub fn render_session_report(data: &SessionSummary) -> String {
    let mut out = String::new();

    out.push_str("Yoga Session Report\n");
    out.push_str("===================\n\n");

    out.push_str(&format!("Lesson: {}\n", data.lesson));
    out.push_str(&format!(
        "Mode: {}\n",
        match data.mode {
            SessionMode::Coach => "coach",
            SessionMode::Video => "video",
        }
    ));
    out.push_str(&format!(
        "Frames consumed: {} of {}\n",
        data.frames_consumed, data.frames_total
    ));
    out.push_str(&format!(
        "Poses held: {} of {}\n",
        data.poses_completed,
        data.outcomes.len()
    ));
    out.push_str(&format!(
        "Hold target: {}% for {}s\n\n",
        data.profile.target_score, data.profile.hold_secs
    ));

    for (i, outcome) in data.outcomes.iter().enumerate() {
        let status = if outcome.completed {
            "held"
        } else if outcome.frames_seen == 0 {
            "not reached"
        } else {
            "incomplete"
        };
        out.push_str(&format!(
            "{}. {}: {}\n",
            i + 1,
            outcome.pose.display_name(),
            status
        ));
        out.push_str(&format!(
            "   Best score: {}\n",
            format_f64_6(outcome.best_score)
        ));
        if let Some(start) = outcome.hold_started_at {
            out.push_str(&format!(
                "   Hold started at {}s, held {}s\n",
                format_f64_6(start),
                format_f64_6(outcome.held_secs)
            ));
        }
        for line in &outcome.last_feedback {
            out.push_str(&format!("   - {}\n", line));
        }
    }

    out
}
