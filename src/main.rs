mod feedback;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod scoring;
mod session;

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_frames};
use crate::model::poses::PoseKind;
use crate::model::thresholds::{ProfileError, ThresholdProfile};
use crate::pipeline::stage1_evaluate::evaluate_frames;
use crate::pipeline::stage2_report::{
    ScoreRunInput, SessionRunInput, write_score_reports, write_session_reports,
};
use crate::report::ReportError;
use crate::scoring::{ScorerRegistry, ScoringError};
use crate::session::lessons::builtin_lessons;
use crate::session::{SessionDriver, SessionError, SessionMode, resolve_poses};

#[derive(Debug, Parser)]
#[command(name = "posescore", version, about = "Score yoga poses from body landmark frames")]
struct Cli {
    /// Log at debug level (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score every frame of a file against one pose.
    Score(ScoreArgs),
    /// Replay a frame file through a lesson with hold timers.
    Lesson(LessonArgs),
    /// List the built-in lessons.
    Lessons,
}

#[derive(Debug, Args)]
struct ScoreArgs {
    #[arg(long)]
    pose: PoseKind,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Frame rate used for frames without a timestamp.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
}

#[derive(Debug, Args)]
struct LessonArgs {
    /// Built-in lesson title.
    #[arg(long, conflicts_with = "poses", required_unless_present = "poses")]
    lesson: Option<String>,
    /// Explicit pose sequence, comma separated.
    #[arg(long, value_delimiter = ',')]
    poses: Vec<PoseKind>,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = SessionMode::Coach)]
    mode: SessionMode,
    /// JSON file overriding the session thresholds.
    #[arg(long)]
    profile: Option<PathBuf>,
    #[arg(long, default_value_t = 30.0)]
    fps: f64,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let registry = ScorerRegistry::builtin();
    match cli.command {
        Command::Score(args) => run_score(&registry, &args),
        Command::Lesson(args) => run_lesson(&registry, &args),
        Command::Lessons => {
            print!("{}", render_lessons(&registry));
            Ok(())
        }
    }
}

fn run_score(registry: &ScorerRegistry, args: &ScoreArgs) -> Result<(), AppError> {
    tracing::info!(pose = %args.pose, input = %args.input.display(), "scoring frames");
    let frames = load_frames(&args.input, args.fps)?;
    let evaluations = evaluate_frames(registry, args.pose, &frames)?;
    let profile = ThresholdProfile::default_v1();
    write_score_reports(
        &ScoreRunInput {
            pose: args.pose,
            input_path: &args.input,
            evaluations: &evaluations,
            profile: &profile,
        },
        &args.out,
    )?;
    Ok(())
}

fn run_lesson(registry: &ScorerRegistry, args: &LessonArgs) -> Result<(), AppError> {
    let (title, poses) = resolve_poses(args.lesson.as_deref(), &args.poses)?;
    let profile = match &args.profile {
        Some(path) => ThresholdProfile::load(path)?,
        None => ThresholdProfile::default_v1(),
    };
    tracing::info!(
        lesson = %title,
        poses = poses.len(),
        mode = ?args.mode,
        "starting session"
    );

    let frames = load_frames(&args.input, args.fps)?;
    let driver = SessionDriver::new(registry, &profile, args.mode);
    let report = driver.run(&poses, &frames)?;

    write_session_reports(
        &SessionRunInput {
            lesson: &title,
            mode: args.mode,
            input_path: &args.input,
            profile: &profile,
            report: &report,
        },
        &args.out,
    )?;
    Ok(())
}

fn render_lessons(registry: &ScorerRegistry) -> String {
    let mut out = String::new();
    for lesson in builtin_lessons() {
        let poses: Vec<&str> = lesson.poses.iter().map(|p| p.display_name()).collect();
        out.push_str(&format!(
            "{}: {}\n  {}\n",
            lesson.title,
            poses.join(" -> "),
            lesson.description
        ));
    }
    let poses: Vec<&str> = registry.poses().map(|p| p.id()).collect();
    out.push_str(&format!("Poses: {}\n", poses.join(", ")));
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
