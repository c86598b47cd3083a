// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Check harness over the fixtures in `tests/data`

use std::path::{Path, PathBuf};
use tri_puzzle_cli::{check_fixture, check_fixtures, CheckOutcome, CheckSummary, SolveOptions};

const FIXTURES: [&str; 5] = ["single", "pair", "vertical", "chain", "square"];

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

#[test]
fn test_all_fixtures_pass() {
    let prefixes: Vec<PathBuf> = FIXTURES.iter().map(|name| data_dir().join(name)).collect();

    let mut out = Vec::new();
    let summary = check_fixtures(&prefixes, &SolveOptions::default(), &mut out).unwrap();

    assert_eq!(
        summary,
        CheckSummary {
            passed: FIXTURES.len(),
            failed: 0,
            skipped: 0,
        }
    );

    let report = String::from_utf8(out).unwrap();
    for prefix in &prefixes {
        assert!(report.contains(&format!("Test {} passed", prefix.display())));
    }
}

#[test]
fn test_fixtures_pass_verified_and_sequential() {
    let options = SolveOptions {
        solver: tri_puzzle_solver::PuzzleSolver::sequential(),
        verify: true,
        ..Default::default()
    };

    for name in FIXTURES {
        let outcome = check_fixture(&data_dir().join(name), &options, std::io::sink()).unwrap();
        assert_eq!(outcome, CheckOutcome::Passed, "fixture {name}");
    }
}

#[test]
fn test_missing_fixture_skipped_not_failed() {
    let prefixes = [data_dir().join("pair"), data_dir().join("absent")];

    let mut out = Vec::new();
    let summary = check_fixtures(&prefixes, &SolveOptions::default(), &mut out).unwrap();

    assert_eq!(summary.passed, 1);
    assert_eq!(summary.skipped, 1);
    assert!(summary.all_passed());
    assert!(String::from_utf8(out)
        .unwrap()
        .ends_with("absent failed to load, skipping...\n"));
}

#[test]
fn test_mismatch_fails() {
    // pair.in solved against chain.out
    let dir = std::env::temp_dir().join(format!("tri-puzzle-fixtures-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::copy(data_dir().join("pair.in"), dir.join("mixed.in")).unwrap();
    std::fs::copy(data_dir().join("chain.out"), dir.join("mixed.out")).unwrap();

    let mut out = Vec::new();
    let outcome = check_fixture(&dir.join("mixed"), &SolveOptions::default(), &mut out).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(outcome, CheckOutcome::Failed);
    assert!(String::from_utf8(out).unwrap().ends_with("FAILED\n"));
}
