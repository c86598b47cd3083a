// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! tri-puzzle Model - Shared types for triangle puzzle disassembly
//!
//! A puzzle is a flat list of integer vertices plus a list of triangles, each
//! naming three of those vertices. Triangles sharing an edge rest on one
//! another, and the solver crate computes the order in which they can be
//! lifted out.
//!
//! This crate only holds the data that flows between the parser, the solver
//! and the command line front end:
//!
//! - [`Vertex`] - integer point in the plane
//! - [`VertexId`] / [`TriangleId`] - 0-based arena indices
//! - [`Puzzle`] - validated vertex and triangle lists
//! - [`ParseError`] - everything that can be wrong with an input
//!
//! # Example
//!
//! ```
//! use tri_puzzle_model::{Puzzle, Vertex, VertexId};
//!
//! let puzzle = Puzzle::new(
//!     vec![Vertex::new(0, 0), Vertex::new(2, 0), Vertex::new(1, 2)],
//!     vec![[VertexId(0), VertexId(1), VertexId(2)]],
//! )?;
//!
//! assert_eq!(puzzle.triangle_count(), 1);
//! # Ok::<(), tri_puzzle_model::ParseError>(())
//! ```

pub mod error;
pub mod puzzle;
pub mod types;

pub use error::*;
pub use puzzle::*;
pub use types::*;
