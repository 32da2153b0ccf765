//! Ruzvuk CLI - Command-line interface for procedural music generation
//!
//! This binary renders mixed stereo WAV masters from genre, mood, instrument,
//! length, and tempo, and reads generated files back.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use ruzvuk_cli::commands;
use ruzvuk_cli::commands::generate::{GenerateArgs, DEFAULT_OUT_DIR};
use ruzvuk_cli::commands::list::ListTarget;
use ruzvuk_cli::input::RequestOverrides;
use ruzvuk_cli::logging;

/// Ruzvuk - Procedural Music Generator
#[derive(Parser)]
#[command(name = "ruzvuk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUZVUK_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a mixed WAV master
    Generate {
        /// JSON request file (flags override its fields)
        #[arg(short, long)]
        request: Option<PathBuf>,

        /// Genre (classical, pop, rock, jazz, ambient; unknown names use pop)
        #[arg(long)]
        genre: Option<String>,

        /// Mood (only used in the file name)
        #[arg(long)]
        mood: Option<String>,

        /// Instrument (electronic, acoustic, orchestral; unknown names use a sine)
        #[arg(long)]
        instrument: Option<String>,

        /// Length in minutes
        #[arg(long)]
        length: Option<u32>,

        /// Tempo in BPM
        #[arg(long)]
        tempo: Option<u32>,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Seed for bass and melody (drawn at random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Inspect a WAV file
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List genres or instruments
    List {
        /// Table to print
        #[arg(value_enum)]
        target: ListTarget,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            request,
            genre,
            mood,
            instrument,
            length,
            tempo,
            description,
            seed,
            out_dir,
            json,
        } => commands::generate::run(
            GenerateArgs {
                request,
                overrides: RequestOverrides {
                    genre,
                    mood,
                    instrument,
                    length,
                    tempo,
                    description,
                    seed,
                },
                out_dir,
            },
            json,
        ),
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
        Commands::List { target, json } => commands::list::run(target, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
