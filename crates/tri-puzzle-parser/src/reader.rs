// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Puzzle reader - turns the token stream into a validated `Puzzle`

use crate::tokenizer::Tokenizer;
use tri_puzzle_model::{
    ParseError, Puzzle, Result, TriangleId, Vertex, VertexId, COORDINATE_LIMIT, MAX_ELEMENT_COUNT,
};

/// Read a count from the header and check it against the format limit
fn read_count(tokens: &mut Tokenizer<'_>, what: &'static str) -> Result<usize> {
    let count: u64 = tokens.next_value(&format!("{what} count"))?;
    if count >= MAX_ELEMENT_COUNT {
        return Err(ParseError::CountTooLarge {
            what,
            count,
            limit: MAX_ELEMENT_COUNT - 1,
        });
    }
    Ok(count as usize)
}

/// Capacity for `count` records of at least `min_bytes` each
///
/// Header counts are not trusted until the body backs them up.
fn initial_capacity(count: usize, tokens: &Tokenizer<'_>, min_bytes: usize) -> usize {
    count.min(tokens.remaining_len() / min_bytes)
}

fn read_vertices(tokens: &mut Tokenizer<'_>, count: usize, strict: bool) -> Result<Vec<Vertex>> {
    // "x y" plus a separator
    let mut vertices = Vec::with_capacity(initial_capacity(count, tokens, 4));

    for index in 0..count {
        let x: i32 = tokens.next_value("x coordinate")?;
        let y: i32 = tokens.next_value("y coordinate")?;
        let vertex = Vertex::new(x, y);

        if strict && !vertex.is_within_limits() {
            let value = if (-COORDINATE_LIMIT..=COORDINATE_LIMIT).contains(&x) {
                y
            } else {
                x
            };
            return Err(ParseError::CoordinateOutOfRange {
                vertex: VertexId(index as u32),
                value: i64::from(value),
                limit: COORDINATE_LIMIT,
            });
        }

        vertices.push(vertex);
    }

    Ok(vertices)
}

fn read_triangles(
    tokens: &mut Tokenizer<'_>,
    count: usize,
    vertex_count: usize,
) -> Result<Vec<[VertexId; 3]>> {
    // "a b c" plus a separator
    let mut triangles = Vec::with_capacity(initial_capacity(count, tokens, 6));

    for index in 0..count {
        let mut corners = [VertexId::default(); 3];

        for corner in &mut corners {
            let raw: u64 = tokens.next_value("vertex index")?;
            *corner = u32::try_from(raw)
                .ok()
                .and_then(VertexId::from_one_based)
                .filter(|id| id.index() < vertex_count)
                .ok_or_else(|| ParseError::VertexOutOfRange {
                    triangle: TriangleId(index as u32),
                    index: raw,
                    vertex_count,
                })?;
        }

        triangles.push(corners);
    }

    Ok(triangles)
}

/// Parse a complete puzzle
pub(crate) fn read_puzzle(content: &str, strict: bool) -> Result<Puzzle> {
    let mut tokens = Tokenizer::new(content);

    let vertex_count = read_count(&mut tokens, "vertex")?;
    let triangle_count = read_count(&mut tokens, "triangle")?;

    let vertices = read_vertices(&mut tokens, vertex_count, strict)?;
    let triangles = read_triangles(&mut tokens, triangle_count, vertex_count)?;

    if strict {
        if let Some((tok, offset)) = tokens.next_token() {
            return Err(ParseError::TrailingInput {
                token: tok.to_string(),
                line: tokens.line_at(offset),
            });
        }
    } else if !tokens.is_exhausted() {
        log::warn!("ignoring input after triangle {}", triangle_count);
    }

    log::debug!(
        "parsed {} vertices and {} triangles",
        vertices.len(),
        triangles.len()
    );

    Puzzle::new(vertices, triangles)
}
