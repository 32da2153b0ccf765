//! The `inspect` command: read back a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use ruzvuk_backend_audio::wav::WavInfo;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput};

/// What `inspect` reports about a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectReport {
    /// Inspected path.
    pub path: String,
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Samples per channel.
    pub num_frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample value.
    pub peak_sample: i32,
    /// Size of the PCM data chunk in bytes.
    pub pcm_bytes: usize,
    /// BLAKE3 hash of the PCM data chunk.
    pub pcm_hash: String,
}

/// Reads and summarizes a WAV file.
pub fn inspect_file(path: &Path) -> Result<InspectReport> {
    let data =
        fs::read(path).with_context(|| format!("failed to read input file: {}", path.display()))?;
    let info = WavInfo::parse(&data)?;

    Ok(InspectReport {
        path: path.display().to_string(),
        channels: info.format.channels,
        sample_rate: info.format.sample_rate,
        bits_per_sample: info.format.bits_per_sample,
        num_frames: info.num_frames,
        duration_seconds: info.duration_seconds(),
        peak_sample: info.peak_sample,
        pcm_bytes: info.pcm_bytes,
        pcm_hash: info.pcm_hash,
    })
}

/// Run the inspect command.
pub fn run(input: &Path, json: bool) -> Result<ExitCode> {
    if json {
        let output = CommandOutput::from_result(inspect_file(input));
        print_json(&output)?;
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    let report = inspect_file(input)?;
    println!("{} {}", "Inspecting:".cyan().bold(), report.path);
    println!(
        "  {} {} channels, {} Hz, {}-bit",
        "Format:".dimmed(),
        report.channels,
        report.sample_rate,
        report.bits_per_sample
    );
    println!(
        "  {} {} frames ({:.2}s)",
        "Length:".dimmed(),
        report.num_frames,
        report.duration_seconds
    );
    println!("  {} {}", "Peak:".dimmed(), report.peak_sample);
    println!("  {} {} bytes", "PCM:".dimmed(), report.pcm_bytes);
    println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
    Ok(ExitCode::SUCCESS)
}
