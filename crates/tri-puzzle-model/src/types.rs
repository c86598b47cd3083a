// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for puzzle data representation

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Vertex and triangle counts must stay below this value
pub const MAX_ELEMENT_COUNT: u64 = 10_000_000;

/// Coordinates lie in `[-COORDINATE_LIMIT, COORDINATE_LIMIT]` on both axes
pub const COORDINATE_LIMIT: i32 = 1_000_000;

/// Type-safe vertex identifier
///
/// Holds the 0-based position in the puzzle's vertex list. Displays 1-based,
/// the way vertices are numbered in the input format.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    /// Position in the vertex list
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert a 1-based input index, rejecting 0
    pub fn from_one_based(index: u32) -> Option<Self> {
        index.checked_sub(1).map(VertexId)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u64::from(self.0) + 1)
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl From<VertexId> for u32 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

/// Type-safe triangle identifier
///
/// Holds the 0-based position in input order. Displays 1-based, which is the
/// index reported in the extraction sequence.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleId(pub u32);

impl TriangleId {
    /// Position in the triangle list
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number used in the output format
    #[inline]
    pub fn number(self) -> u64 {
        u64::from(self.0) + 1
    }
}

impl fmt::Display for TriangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<u32> for TriangleId {
    fn from(id: u32) -> Self {
        TriangleId(id)
    }
}

impl From<TriangleId> for u32 {
    fn from(id: TriangleId) -> Self {
        id.0
    }
}

/// Integer point in the plane
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    /// Create a vertex from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are inside `[-COORDINATE_LIMIT, COORDINATE_LIMIT]`
    pub fn is_within_limits(&self) -> bool {
        (-COORDINATE_LIMIT..=COORDINATE_LIMIT).contains(&self.x)
            && (-COORDINATE_LIMIT..=COORDINATE_LIMIT).contains(&self.y)
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Self {
        Vertex::new(x, y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display_one_based() {
        assert_eq!(VertexId(0).to_string(), "1");
        assert_eq!(TriangleId(41).to_string(), "42");
        assert_eq!(TriangleId(u32::MAX).number(), 4_294_967_296);
    }

    #[test]
    fn test_vertex_id_from_one_based() {
        assert_eq!(VertexId::from_one_based(1), Some(VertexId(0)));
        assert_eq!(VertexId::from_one_based(7), Some(VertexId(6)));
        assert_eq!(VertexId::from_one_based(0), None);
    }

    #[test]
    fn test_vertex_limits() {
        assert!(Vertex::new(COORDINATE_LIMIT, -COORDINATE_LIMIT).is_within_limits());
        assert!(!Vertex::new(COORDINATE_LIMIT + 1, 0).is_within_limits());
        assert!(!Vertex::new(0, i32::MIN).is_within_limits());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_vertex_serde_round_trip() {
        let json = serde_json::to_string(&Vertex::new(-3, 4)).unwrap();
        assert_eq!(json, r#"{"x":-3,"y":4}"#);
    }
}
