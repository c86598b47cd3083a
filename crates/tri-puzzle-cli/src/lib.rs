// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! tri-puzzle command line support
//!
//! Loading and solving puzzle files, plus the fixture check harness. A fixture
//! is a path prefix `P` naming an input `P.in` and the expected output `P.out`.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tri_puzzle_parser::PuzzleParser;
use tri_puzzle_solver::{extract, ExtractionOrder, PuzzleSolver};

/// Parser and solver options shared by every command
#[derive(Clone, Debug, Default)]
pub struct SolveOptions {
    pub parser: PuzzleParser,
    pub solver: PuzzleSolver,
    /// Re-check the order against its pressure graph
    pub verify: bool,
}

impl SolveOptions {
    /// Parse and solve puzzle text
    pub fn solve_text(&self, content: &str) -> Result<ExtractionOrder> {
        let puzzle = self.parser.parse(content).context("failed to parse puzzle")?;

        if !self.verify {
            return Ok(self.solver.solve(&puzzle)?);
        }

        let graph = self.solver.pressure_graph(&puzzle)?;
        let order = extract(&graph)?;
        order.verify(&graph)?;
        log::info!("verified order of {} triangles", order.len());
        Ok(order)
    }

    /// Read, parse and solve a puzzle file
    pub fn solve_file(&self, path: &Path) -> Result<ExtractionOrder> {
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        self.solve_text(&content)
            .with_context(|| format!("failed to solve {}", path.display()))
    }
}

/// `prefix` with `suffix` appended to its last component
fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(prefix.as_os_str());
    path.push(suffix);
    path.into()
}

/// Result of one fixture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed,
    /// `.in` or `.out` could not be read
    Skipped,
}

/// Tally over a batch of fixtures
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl CheckSummary {
    pub fn record(&mut self, outcome: CheckOutcome) {
        match outcome {
            CheckOutcome::Passed => self.passed += 1,
            CheckOutcome::Failed => self.failed += 1,
            CheckOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed, self.failed, self.skipped
        )
    }
}

/// Run one fixture, reporting to `out`
pub fn check_fixture<W: Write>(
    prefix: &Path,
    options: &SolveOptions,
    mut out: W,
) -> std::io::Result<CheckOutcome> {
    let name = prefix.display();

    let loaded = fs::read_to_string(with_suffix(prefix, ".in")).and_then(|input| {
        fs::read(with_suffix(prefix, ".out")).map(|expected| (input, expected))
    });
    let (input, expected) = match loaded {
        Ok(pair) => pair,
        Err(e) => {
            log::debug!("fixture {}: {}", name, e);
            writeln!(out, "Test {name} failed to load, skipping...")?;
            return Ok(CheckOutcome::Skipped);
        }
    };

    let actual = match options.solve_text(&input) {
        Ok(order) => {
            let mut bytes = Vec::with_capacity(expected.len());
            order.write_to(&mut bytes)?;
            bytes
        }
        Err(e) => {
            log::warn!("fixture {}: {:#}", name, e);
            writeln!(out, "Test {name} FAILED")?;
            return Ok(CheckOutcome::Failed);
        }
    };

    if actual == expected {
        writeln!(out, "Test {name} passed")?;
        Ok(CheckOutcome::Passed)
    } else {
        log::debug!(
            "fixture {}: expected {:?}, got {:?}",
            name,
            String::from_utf8_lossy(&expected),
            String::from_utf8_lossy(&actual)
        );
        writeln!(out, "Test {name} FAILED")?;
        Ok(CheckOutcome::Failed)
    }
}

/// Run a batch of fixtures in order
pub fn check_fixtures<P, W>(
    prefixes: &[P],
    options: &SolveOptions,
    mut out: W,
) -> std::io::Result<CheckSummary>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut summary = CheckSummary::default();
    for prefix in prefixes {
        summary.record(check_fixture(prefix.as_ref(), options, &mut out)?);
    }
    Ok(summary)
}
