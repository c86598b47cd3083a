// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for puzzle input

use crate::{TriangleId, VertexId};
use thiserror::Error;

/// Result type alias for input operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading or validating a puzzle
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input ended before a required token
    #[error("line {line}: expected {expected}, found end of input")]
    MissingToken { expected: String, line: usize },

    /// Token is not an integer of the expected kind
    #[error("line {line}: invalid {expected} '{token}'")]
    InvalidNumber {
        token: String,
        expected: String,
        line: usize,
    },

    /// Vertex or triangle count beyond what the format allows
    #[error("{what} count {count} exceeds the limit of {limit}")]
    CountTooLarge {
        what: &'static str,
        count: u64,
        limit: u64,
    },

    /// Triangle references a vertex that does not exist
    ///
    /// `index` is the 1-based index as written in the input.
    #[error("triangle {triangle} references vertex {index}, but the puzzle has {vertex_count} vertices")]
    VertexOutOfRange {
        triangle: TriangleId,
        index: u64,
        vertex_count: usize,
    },

    /// Coordinate outside the accepted range (strict parsing only)
    #[error("vertex {vertex} has coordinate {value} outside [-{limit}, {limit}]")]
    CoordinateOutOfRange {
        vertex: VertexId,
        value: i64,
        limit: i32,
    },

    /// Unconsumed tokens after the last triangle (strict parsing only)
    #[error("line {line}: unexpected trailing input '{token}'")]
    TrailingInput { token: String, line: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Create a missing token error
    pub fn missing(expected: impl Into<String>, line: usize) -> Self {
        ParseError::MissingToken {
            expected: expected.into(),
            line,
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(token: impl Into<String>, expected: impl Into<String>, line: usize) -> Self {
        ParseError::InvalidNumber {
            token: token.into(),
            expected: expected.into(),
            line,
        }
    }
}
