use std::fmt::Write;

use crate::model::landmarks::Side;
use crate::model::poses::PoseKind;
use crate::model::subscores::SubScoreKey;
use crate::pipeline::stage1_evaluate::FrameEvaluation;
use crate::report::format_f64_6;
use crate::session::driver::ScoreLogEntry;

pub fn render_frames_tsv(pose: PoseKind, evaluations: &[FrameEvaluation]) -> String {
    let keys = SubScoreKey::for_pose(pose);
    let mut out = String::new();

    out.push_str("frame\tt\tdetected\taccuracy");
    for key in keys {
        out.push('\t');
        out.push_str(key.name());
    }
    out.push_str("\tresolved_side\tweakest\tfeedback\thighlights\n");

    for eval in evaluations {
        let _ = write!(out, "{}\t{}", eval.index, format_f64_6(eval.t));
        match &eval.result {
            Some(result) => {
                let _ = write!(out, "\ttrue\t{}", format_f64_6(result.accuracy));
                for &key in keys {
                    out.push('\t');
                    match result.sub_scores.get(key) {
                        Some(v) => out.push_str(&format_f64_6(v)),
                        None => out.push_str("NA"),
                    }
                }
                let side = result.front_leg.or(result.standing_leg);
                out.push('\t');
                out.push_str(side.map(Side::name).unwrap_or("NA"));
                out.push('\t');
                match result.sub_scores.weakest() {
                    Some((key, _)) => out.push_str(key.name()),
                    None => out.push_str("NA"),
                }
            }
            None => {
                out.push_str("\tfalse\tNA");
                for _ in keys {
                    out.push_str("\tNA");
                }
                out.push_str("\tNA\tNA");
            }
        }
        out.push('\t');
        out.push_str(&eval.feedback.messages().join("; "));
        out.push('\t');
        let highlights: Vec<String> = eval
            .feedback
            .highlight_indices()
            .iter()
            .map(|i| i.to_string())
            .collect();
        out.push_str(&highlights.join(","));
        out.push('\n');
    }

    out
}

pub fn render_scores_tsv(log: &[ScoreLogEntry]) -> String {
    let mut out = String::from("pose\tscore\tt\n");
    for entry in log {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            entry.pose.id(),
            format_f64_6(entry.score),
            format_f64_6(entry.t)
        );
    }
    out
}
