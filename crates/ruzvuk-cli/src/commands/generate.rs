//! The `generate` command.

use anyhow::Result;
use colored::Colorize;
use ruzvuk_backend_audio::generate;
use ruzvuk_spec::{GenerationRequest, GenerationResult};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{print_json, CommandOutput};
use crate::input::{build_request, RequestOverrides};

/// Default output directory, matching the web service.
pub const DEFAULT_OUT_DIR: &str = "generated";

/// Arguments of one `generate` run.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Optional JSON request file.
    pub request: Option<PathBuf>,
    /// Flag values layered over the file.
    pub overrides: RequestOverrides,
    /// Output directory.
    pub out_dir: PathBuf,
}

/// Run the generate command.
///
/// # Arguments
/// * `args` - Request sources and output directory
/// * `json` - Print a JSON envelope instead of colored text
pub fn run(args: GenerateArgs, json: bool) -> Result<ExitCode> {
    if json {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Builds the request and writes the file.
pub fn execute(args: GenerateArgs) -> Result<GenerationResult> {
    let request = build_request(args.request.as_deref(), args.overrides)?;
    Ok(generate(&request, &args.out_dir)?)
}

fn run_human(args: GenerateArgs) -> Result<ExitCode> {
    let start = Instant::now();
    let request = build_request(args.request.as_deref(), args.overrides)?;
    print_request(&request, &args.out_dir);

    let result = generate(&request, &args.out_dir)?;

    println!("{} {}", "Wrote:".green().bold(), result.path.display());
    println!(
        "  {} {} bytes (PCM {} bytes)",
        "Size:".dimmed(),
        result.file_bytes,
        result.pcm_bytes
    );
    println!(
        "  {} {:.1}s, {} Hz, {} channels",
        "Audio:".dimmed(),
        result.duration_seconds(),
        result.sample_rate,
        result.channels
    );
    println!("  {} {}", "Seed:".dimmed(), result.seed);
    println!("  {} {}", "PCM hash:".dimmed(), result.pcm_hash);
    println!(
        "{} in {:.2}s",
        "Done".green().bold(),
        start.elapsed().as_secs_f64()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(args: GenerateArgs) -> Result<ExitCode> {
    let output = CommandOutput::from_result(execute(args));
    print_json(&output)?;
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_request(request: &GenerationRequest, out_dir: &Path) {
    println!(
        "{} {} / {} / {}",
        "Generating:".cyan().bold(),
        request.genre_name(),
        request.mood(),
        request.instrument_name()
    );
    println!(
        "{} {} min at {} BPM",
        "Length:".cyan().bold(),
        request.length_minutes(),
        request.tempo_bpm()
    );
    if !request.description().is_empty() {
        println!("{} {}", "Description:".dimmed(), request.description());
    }
    println!("{} {}", "Output dir:".cyan().bold(), out_dir.display());
}
