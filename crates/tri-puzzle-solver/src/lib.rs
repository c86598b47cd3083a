// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # tri-puzzle Solver
//!
//! Computes a safe disassembly order for a planar puzzle of triangles.
//!
//! ## Overview
//!
//! Triangles that share a rib rest on one another. Reading every rib left to
//! right, a triangle rests on the ribs that have its third vertex on their
//! left (its counter-clockwise ribs). Whatever sits across such a rib is
//! underneath and must stay until the triangle on top is gone.
//!
//! The solver runs three stages, each producing immutable data for the next:
//!
//! - **Adjacency**: deduplicated ribs, their owners and the counter-clockwise
//!   subset of every triangle's ribs ([`Adjacency`])
//! - **Pressure**: how many triangles press on each triangle, and which ones
//!   each triangle presses on ([`PressureGraph`])
//! - **Extraction**: repeatedly lift the free triangle with the lowest index
//!   and release what it was pressing on ([`extract`])
//!
//! All geometry is exact integer arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use tri_puzzle_model::{Puzzle, Vertex, VertexId};
//!
//! // (0,0)-(2,0)-(1,2) sits on top of its mirror image
//! let puzzle = Puzzle::new(
//!     vec![
//!         Vertex::new(0, 0),
//!         Vertex::new(2, 0),
//!         Vertex::new(1, 2),
//!         Vertex::new(1, -2),
//!     ],
//!     vec![
//!         [VertexId(0), VertexId(1), VertexId(2)],
//!         [VertexId(1), VertexId(0), VertexId(3)],
//!     ],
//! )?;
//!
//! let order = tri_puzzle_solver::solve(&puzzle)?;
//! assert_eq!(order.to_string(), "1 2 ");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod adjacency;
pub mod error;
pub mod extract;
pub mod orientation;
pub mod pressure;
pub mod queue;
pub mod rib;

pub use adjacency::{Adjacency, CcwRibs, TriangleRibs};
pub use error::{Error, Result};
pub use extract::{extract, ExtractionOrder};
pub use orientation::{is_ccw, orient2d};
pub use pressure::PressureGraph;
pub use queue::PressureQueue;
pub use rib::{Rib, RibId, RibKey};

use tri_puzzle_model::Puzzle;

/// Puzzles below this many triangles are classified on one thread
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65_536;

/// Solver options
///
/// Parallelism only affects rib classification and never the result.
#[derive(Clone, Debug)]
pub struct PuzzleSolver {
    /// Classify ribs on the rayon thread pool
    pub parallel: bool,
    /// Minimum triangle count before going parallel
    pub parallel_threshold: usize,
}

impl Default for PuzzleSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSolver {
    /// Create a solver that goes parallel for large puzzles
    pub fn new() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Create a solver that never leaves the current thread
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::new()
        }
    }

    /// Set whether to classify ribs in parallel
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set the triangle count at which classification goes parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    fn use_parallel(&self, puzzle: &Puzzle) -> bool {
        self.parallel && puzzle.triangle_count() >= self.parallel_threshold
    }

    /// Build the adjacency for a puzzle
    pub fn adjacency(&self, puzzle: &Puzzle) -> Result<Adjacency> {
        Adjacency::build_with(puzzle, self.use_parallel(puzzle))
    }

    /// Build the pressure graph for a puzzle
    pub fn pressure_graph(&self, puzzle: &Puzzle) -> Result<PressureGraph> {
        Ok(PressureGraph::build(&self.adjacency(puzzle)?))
    }

    /// Compute the extraction order
    pub fn solve(&self, puzzle: &Puzzle) -> Result<ExtractionOrder> {
        log::debug!(
            "solving {} triangles over {} vertices",
            puzzle.triangle_count(),
            puzzle.vertex_count()
        );
        extract(&self.pressure_graph(puzzle)?)
    }
}

/// Compute the extraction order with default options
pub fn solve(puzzle: &Puzzle) -> Result<ExtractionOrder> {
    PuzzleSolver::new().solve(puzzle)
}

#[cfg(test)]
pub(crate) mod test_support {
    use tri_puzzle_model::{Puzzle, Vertex, VertexId};

    /// Build a puzzle from coordinates and 1-based corner indices
    pub fn puzzle(vertices: &[(i32, i32)], triangles: &[[u32; 3]]) -> Puzzle {
        Puzzle::new(
            vertices.iter().map(|&v| Vertex::from(v)).collect(),
            triangles
                .iter()
                .map(|t| t.map(|i| VertexId(i - 1)))
                .collect(),
        )
        .unwrap()
    }
}
