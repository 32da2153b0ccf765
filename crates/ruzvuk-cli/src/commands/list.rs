//! The `list` command: print the scale and instrument tables.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use ruzvuk_backend_audio::instrument::InstrumentProfile;
use ruzvuk_backend_audio::scale::note_names;
use ruzvuk_spec::{Genre, InstrumentKind};
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

use super::json_output::{print_json, CommandOutput};

/// Table to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    /// Genres and their scales
    Genres,
    /// Instrument profiles
    Instruments,
}

/// One genre row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreEntry {
    /// Canonical genre name.
    pub name: String,
    /// Note names in scale order.
    pub notes: Vec<String>,
    /// Note frequencies in Hz.
    pub frequencies: Vec<f64>,
}

/// One instrument row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentEntry {
    /// Canonical instrument name.
    pub name: String,
    /// Waveform name.
    pub waveform: String,
    /// Harmonic weights.
    pub harmonics: Vec<f64>,
    /// Attack in seconds.
    pub attack: f64,
    /// Decay in seconds.
    pub decay: f64,
}

/// Builds the genre table.
pub fn genre_entries() -> Vec<GenreEntry> {
    Genre::ALL
        .iter()
        .map(|&genre| {
            let notes = note_names(genre);
            GenreEntry {
                name: genre.as_str().to_string(),
                notes: notes.iter().map(|n| n.as_str().to_string()).collect(),
                frequencies: notes.iter().map(|n| n.frequency()).collect(),
            }
        })
        .collect()
}

/// Builds the instrument table.
pub fn instrument_entries() -> Vec<InstrumentEntry> {
    InstrumentKind::ALL
        .iter()
        .map(|&kind| {
            let profile = InstrumentProfile::for_kind(kind);
            InstrumentEntry {
                name: kind.as_str().to_string(),
                waveform: profile.waveform.as_str().to_string(),
                harmonics: profile.harmonics.to_vec(),
                attack: profile.attack,
                decay: profile.decay,
            }
        })
        .collect()
}

/// Run the list command.
pub fn run(target: ListTarget, json: bool) -> Result<ExitCode> {
    match (target, json) {
        (ListTarget::Genres, true) => print_json(&CommandOutput::success(genre_entries()))?,
        (ListTarget::Instruments, true) => {
            print_json(&CommandOutput::success(instrument_entries()))?
        }
        (ListTarget::Genres, false) => {
            println!("{}", "Genres:".cyan().bold());
            for entry in genre_entries() {
                println!("  {:<10} {}", entry.name.bold(), entry.notes.join(" "));
            }
        }
        (ListTarget::Instruments, false) => {
            println!("{}", "Instruments:".cyan().bold());
            for entry in instrument_entries() {
                let harmonics: Vec<String> =
                    entry.harmonics.iter().map(|h| h.to_string()).collect();
                println!(
                    "  {:<10} {:<8} harmonics [{}] attack {}s decay {}s",
                    entry.name.bold(),
                    entry.waveform,
                    harmonics.join(", "),
                    entry.attack,
                    entry.decay
                );
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
