// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whitespace tokenizer using nom combinators
//!
//! Splits puzzle text into number tokens and converts them with lexical-core.

use lexical_core::FromLexical;
use memchr::memchr_iter;
use nom::{
    bytes::complete::{take_while, take_while1},
    sequence::preceded,
    IResult, Parser,
};
use tri_puzzle_model::{ParseError, Result};

// ============================================================================
// Parsing Primitives
// ============================================================================

/// Parse one whitespace-delimited token, skipping leading whitespace
fn token(input: &str) -> IResult<&str, &str> {
    preceded(
        take_while(|c: char| c.is_ascii_whitespace()),
        take_while1(|c: char| !c.is_ascii_whitespace()),
    )
    .parse(input)
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Sequential reader over the tokens of a puzzle file
///
/// Keeps the full input around so errors can be located by line.
pub struct Tokenizer<'a> {
    content: &'a str,
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `content`
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            rest: content,
        }
    }

    /// Read the next raw token
    ///
    /// Returns (token, byte offset of its first character)
    pub fn next_token(&mut self) -> Option<(&'a str, usize)> {
        let (rest, tok) = token(self.rest).ok()?;
        let offset = self.content.len() - rest.len() - tok.len();
        self.rest = rest;
        Some((tok, offset))
    }

    /// Read the next token as a number
    ///
    /// `expected` names the value for error messages, e.g. "vertex count".
    pub fn next_value<T: FromLexical>(&mut self, expected: &str) -> Result<T> {
        let (tok, offset) = self
            .next_token()
            .ok_or_else(|| ParseError::missing(expected, self.line_at(self.content.len())))?;

        lexical_core::parse::<T>(tok.as_bytes())
            .map_err(|_| ParseError::invalid_number(tok, expected, self.line_at(offset)))
    }

    /// 1-based line number of a byte offset
    pub fn line_at(&self, offset: usize) -> usize {
        let end = offset.min(self.content.len());
        memchr_iter(b'\n', &self.content.as_bytes()[..end]).count() + 1
    }

    /// Bytes not consumed yet
    pub fn remaining_len(&self) -> usize {
        self.rest.len()
    }

    /// Whether only whitespace is left
    pub fn is_exhausted(&self) -> bool {
        self.rest.bytes().all(|b| b.is_ascii_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_skips_whitespace() {
        let (remaining, tok) = token("  \n\t-42 7").unwrap();
        assert_eq!(tok, "-42");
        assert_eq!(remaining, " 7");
    }

    #[test]
    fn test_token_at_end() {
        assert!(token("   \r\n").is_err());
        assert!(token("").is_err());
    }

    #[test]
    fn test_next_token_offsets() {
        let mut tokens = Tokenizer::new("3 1\n  10");
        assert_eq!(tokens.next_token(), Some(("3", 0)));
        assert_eq!(tokens.next_token(), Some(("1", 2)));
        assert_eq!(tokens.next_token(), Some(("10", 6)));
        assert_eq!(tokens.next_token(), None);
        assert!(tokens.is_exhausted());
    }

    #[test]
    fn test_next_value_signed_and_unsigned() {
        let mut tokens = Tokenizer::new("-1000000 1000000 12");
        assert_eq!(tokens.next_value::<i32>("x").unwrap(), -1_000_000);
        assert_eq!(tokens.next_value::<i32>("y").unwrap(), 1_000_000);
        assert_eq!(tokens.next_value::<u64>("index").unwrap(), 12);
    }

    #[test]
    fn test_next_value_reports_line() {
        let mut tokens = Tokenizer::new("1\n2\n3x\n");
        tokens.next_value::<u32>("a").unwrap();
        tokens.next_value::<u32>("b").unwrap();

        match tokens.next_value::<u32>("c").unwrap_err() {
            ParseError::InvalidNumber {
                token,
                expected,
                line,
            } => {
                assert_eq!(token, "3x");
                assert_eq!(expected, "c");
                assert_eq!(line, 3);
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_next_value_missing() {
        let mut tokens = Tokenizer::new("1\n");
        tokens.next_value::<u32>("a").unwrap();

        let err = tokens.next_value::<u32>("vertex index").unwrap_err();
        assert!(matches!(err, ParseError::MissingToken { line: 2, .. }));
        assert!(err.to_string().contains("vertex index"));
    }

    #[test]
    fn test_next_value_rejects_negative_unsigned() {
        let mut tokens = Tokenizer::new("-3");
        assert!(tokens.next_value::<u64>("index").is_err());
    }
}
