// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for solving

use thiserror::Error;
use tri_puzzle_model::{TriangleId, VertexId};

/// Solver result type
pub type Result<T> = std::result::Result<T, Error>;

/// Solver errors
///
/// All of these mean the input broke the puzzle contract. None of them is
/// recovered from: no extraction order is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A third triangle claimed a rib that already has two owners
    #[error("rib {left}-{right} is shared by triangles {first}, {second} and {triangle}")]
    RibOverflow {
        left: VertexId,
        right: VertexId,
        first: TriangleId,
        second: TriangleId,
        triangle: TriangleId,
    },

    /// A triangle reported more than two counter-clockwise ribs
    #[error("triangle {triangle} has more than two counter-clockwise ribs")]
    TooManyCcwRibs { triangle: TriangleId },

    /// A triangle uses the same vertex twice
    #[error("triangle {triangle} repeats vertex {vertex}")]
    DegenerateTriangle {
        triangle: TriangleId,
        vertex: VertexId,
    },

    /// Every remaining triangle is still pressed on by another one
    #[error(
        "triangle {triangle} is still pressed on by {pressure} triangle(s); {} triangles cannot be extracted",
        .remaining.len()
    )]
    UnresolvedPressure {
        triangle: TriangleId,
        pressure: u32,
        /// Triangles left unextracted, ascending
        remaining: Vec<TriangleId>,
    },

    /// A pressure edge names a triangle outside the graph
    #[error("triangle {triangle} is out of range for {triangle_count} triangles")]
    UnknownTriangle {
        triangle: TriangleId,
        triangle_count: usize,
    },

    /// An extraction order does not satisfy its pressure graph
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

impl Error {
    /// Create an invalid order error
    pub fn invalid_order(msg: impl Into<String>) -> Self {
        Error::InvalidOrder(msg.into())
    }
}
