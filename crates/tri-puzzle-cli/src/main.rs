// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! tri-puzzle - disassembly order for planar triangle puzzles
//!
//! # Commands
//!
//! - `tri-puzzle solve <INPUT>` - Print the extraction order of a puzzle file
//! - `tri-puzzle check <TEST>...` - Compare `TEST.in` results against `TEST.out`

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tri_puzzle_cli::{check_fixtures, SolveOptions};
use tri_puzzle_parser::PuzzleParser;
use tri_puzzle_solver::PuzzleSolver;

/// Disassembly order for planar triangle puzzles
#[derive(Parser)]
#[command(name = "tri-puzzle")]
#[command(about = "Disassembly order for planar triangle puzzles", long_about = None)]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle file and print its extraction order
    Solve {
        /// Puzzle file
        #[arg(name = "INPUT")]
        input: PathBuf,

        /// Write the order here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Enforce coordinate bounds and reject trailing input
        #[arg(long)]
        strict: bool,

        /// Never classify ribs in parallel
        #[arg(long)]
        sequential: bool,

        /// Re-check the order against the pressure graph before writing
        #[arg(long)]
        verify: bool,
    },

    /// Run fixtures given as path prefixes (reads TEST.in and TEST.out)
    Check {
        #[arg(name = "TEST", required = true)]
        tests: Vec<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn solve(input: PathBuf, output: Option<PathBuf>, options: &SolveOptions) -> Result<()> {
    let order = options.solve_file(&input)?;

    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            order.write_to(&mut writer)?;
            writer.flush()?;
            log::info!("wrote {} triangles to {}", order.len(), path.display());
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            order.write_to(&mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn check(tests: &[PathBuf]) -> Result<()> {
    let summary = check_fixtures(tests, &SolveOptions::default(), io::stdout().lock())?;
    log::info!("{}", summary);

    if !summary.all_passed() {
        bail!("{} of {} tests failed", summary.failed, summary.total());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Solve {
            input,
            output,
            strict,
            sequential,
            verify,
        } => {
            let options = SolveOptions {
                parser: PuzzleParser::new().with_strict(strict),
                solver: PuzzleSolver::new().with_parallel(!sequential),
                verify,
            };
            solve(input, output, &options)
        }
        Commands::Check { tests } => check(&tests),
    }
}
