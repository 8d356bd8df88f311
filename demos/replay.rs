//! Replay a WAV file in real time and compare the detected beats with its
//! sidecar annotations.
//!
//! ```bash
//! cargo run --example replay -- path/to/train1.wav
//! ```
//!
//! Set `RUST_LOG=beat_replay=debug` to see every chunk fetch.

use beat_replay::streaming::{BeatEstimator, RunEvent, RunState, SystemClock, run_blocking};
use beat_replay::{AudioSource, DEFAULT_TOLERANCE, evaluate, io};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("beat_replay=info"))
        .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into()));

    if let Err(err) = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
    {
        eprintln!("[replay] failed to initialise tracing subscriber: {err}");
    }
}

fn main() -> ExitCode {
    init_logging();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: replay <file.wav>");
        return ExitCode::FAILURE;
    };

    let (waveform, annotations) = match io::load_with_annotations(&path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Annotated beats: {}",
        annotations
            .iter()
            .map(|t| format!("{t:.3}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let estimator = BeatEstimator::with_reference_config(&waveform, SystemClock::new());
    let chunks = waveform.chunk_count(estimator.config().chunk_size);

    let bar = ProgressBar::new(chunks as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut run = RunState::new();
    let result = run_blocking(&estimator, &mut run, |event, _| match event {
        RunEvent::ChunkFetched { index, .. } => {
            bar.set_position((*index as u64 + 1).min(chunks as u64));
        }
        RunEvent::BeatDetected { time } => bar.set_message(format!("beat at {time:.3}s")),
        RunEvent::Completed { beats } => {
            bar.finish_with_message(format!("{} beats", beats.len()));
        }
    });

    let summary = match result {
        Ok(summary) => summary,
        Err(err) => {
            bar.abandon();
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    let score = evaluate(&summary.beats, &annotations, DEFAULT_TOLERANCE);
    println!("Detected beats:");
    for beat in &summary.beats {
        let matched = annotations
            .iter()
            .any(|target| (target - beat).abs() <= DEFAULT_TOLERANCE);
        let label = format!("{beat:.3}");
        if matched {
            println!("  {}", label.green());
        } else {
            println!("  {}", label.yellow());
        }
    }
    println!(
        "precision {:.3}  recall {:.3}  F-measure {}",
        score.precision,
        score.recall,
        format!("{:.3}", score.f_measure).bold()
    );

    ExitCode::SUCCESS
}
