// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! tri-puzzle Parser - Text input parser for triangle puzzles
//!
//! Reads the whitespace-separated puzzle format:
//!
//! ```text
//! <vertex count N> <triangle count M>
//! <x1> <y1>
//! ...
//! <xN> <yN>
//! <v1> <v2> <v3>      (1-based vertex indices, M lines)
//! ```
//!
//! Line breaks carry no meaning; only the token order does. Errors report the
//! line the offending token was found on.
//!
//! # Example
//!
//! ```
//! let puzzle = tri_puzzle_parser::parse("3 1\n0 0\n2 0\n1 2\n1 2 3\n")?;
//! assert_eq!(puzzle.vertex_count(), 3);
//! # Ok::<(), tri_puzzle_model::ParseError>(())
//! ```

mod reader;
mod tokenizer;

pub use tokenizer::Tokenizer;

use std::io::Read;
use tri_puzzle_model::{Puzzle, Result};

/// Puzzle parser with its options
///
/// The default parser follows the input contract loosely: coordinates are
/// only required to fit in `i32` and anything after the last triangle is
/// ignored. Strict mode enforces the coordinate range and rejects trailing
/// tokens.
#[derive(Clone, Debug, Default)]
pub struct PuzzleParser {
    /// Reject out-of-range coordinates and trailing input
    pub strict: bool,
}

impl PuzzleParser {
    /// Create a lenient parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser that enforces the full input contract
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Set whether to enforce the full input contract
    pub fn with_strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Parse puzzle text
    pub fn parse(&self, content: &str) -> Result<Puzzle> {
        reader::read_puzzle(content, self.strict)
    }

    /// Read a whole stream, then parse it
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Puzzle> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse(&content)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<Puzzle> {
    PuzzleParser::new().parse(content)
}

/// Parse a puzzle from any reader
pub fn parse_reader<R: Read>(reader: R) -> Result<Puzzle> {
    PuzzleParser::new().parse_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tri_puzzle_model::ParseError;

    #[test]
    fn test_parse_reader() {
        let input: &[u8] = b"3 1\n0 0\n2 0\n1 2\n1 2 3\n";
        let puzzle = parse_reader(input).unwrap();
        assert_eq!(puzzle.triangle_count(), 1);
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let input: &[u8] = &[b'3', b' ', 0xFF, 0xFE];
        assert!(matches!(parse_reader(input), Err(ParseError::Io(_))));
    }

    #[test]
    fn test_strict_builder() {
        assert!(PuzzleParser::strict().strict);
        assert!(!PuzzleParser::new().strict);
        assert!(PuzzleParser::new().with_strict(true).strict);
    }
}
