// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmarks for the solver stages.
//!
//! Run with: cargo bench -p tri-puzzle-solver
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p tri-puzzle-solver -- --save-baseline main
//! 2. After changes: cargo bench -p tri-puzzle-solver -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tri_puzzle_model::{Puzzle, Vertex, VertexId};
use tri_puzzle_solver::{extract, Adjacency, PressureGraph, PuzzleSolver};

// =============================================================================
// Test Puzzle Generation
// =============================================================================

/// Create a grid triangulation with alternating diagonals and a slight shear.
fn create_grid(cols: usize, rows: usize) -> Puzzle {
    let mut vertices = Vec::with_capacity((cols + 1) * (rows + 1));
    for j in 0..=rows {
        for i in 0..=cols {
            vertices.push(Vertex::new(i as i32 * 10 + (j % 3) as i32, j as i32 * 10));
        }
    }

    let id = |i: usize, j: usize| VertexId((j * (cols + 1) + i) as u32);
    let mut triangles = Vec::with_capacity(2 * cols * rows);
    for j in 0..rows {
        for i in 0..cols {
            let (a, b, c, d) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
            if (i + j) % 2 == 0 {
                triangles.push([a, b, c]);
                triangles.push([a, c, d]);
            } else {
                triangles.push([a, b, d]);
                triangles.push([b, c, d]);
            }
        }
    }

    Puzzle::new(vertices, triangles).unwrap()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency");

    for size in [50, 150, 300] {
        let puzzle = create_grid(size, size);
        group.throughput(Throughput::Elements(puzzle.triangle_count() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &puzzle, |b, p| {
            b.iter(|| Adjacency::build_with(black_box(p), false).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &puzzle, |b, p| {
            b.iter(|| Adjacency::build_with(black_box(p), true).unwrap());
        });
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for size in [50, 150, 300] {
        let puzzle = create_grid(size, size);
        let graph = PressureGraph::build(&Adjacency::build(&puzzle).unwrap());
        group.throughput(Throughput::Elements(graph.triangle_count() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            b.iter(|| extract(black_box(g)).unwrap());
        });
    }

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    let puzzle = create_grid(300, 300);
    group.throughput(Throughput::Elements(puzzle.triangle_count() as u64));

    let solver = PuzzleSolver::sequential();
    group.bench_function("grid_300", |b| {
        b.iter(|| solver.solve(black_box(&puzzle)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_adjacency, bench_extract, bench_solve);
criterion_main!(benches);
