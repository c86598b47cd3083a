// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exact orientation predicates on integer vertices

use std::cmp::Ordering;
use tri_puzzle_model::{Vertex, VertexId};

/// Twice the signed area of triangle (a, b, c)
///
/// Returns:
/// - >0 if counter-clockwise
/// - <0 if clockwise
/// - =0 if collinear
///
/// Differences are taken in `i64` and multiplied in `i128`, so the result is
/// exact for any `i32` coordinates.
#[inline]
pub fn orient2d(a: Vertex, b: Vertex, c: Vertex) -> i128 {
    let abx = i64::from(b.x) - i64::from(a.x);
    let aby = i64::from(b.y) - i64::from(a.y);
    let acx = i64::from(c.x) - i64::from(a.x);
    let acy = i64::from(c.y) - i64::from(a.y);

    i128::from(abx) * i128::from(acy) - i128::from(aby) * i128::from(acx)
}

/// Whether c lies strictly to the left of the directed segment a -> b
#[inline]
pub fn is_ccw(a: Vertex, b: Vertex, c: Vertex) -> bool {
    orient2d(a, b, c) > 0
}

/// Left-to-right order of two vertices: by x, then y, then id
///
/// The id only matters for coincident vertices and keeps the order total.
#[inline]
pub fn left_to_right(a: (VertexId, Vertex), b: (VertexId, Vertex)) -> Ordering {
    (a.1.x, a.1.y, a.0).cmp(&(b.1.x, b.1.y, b.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ccw() {
        let a = Vertex::new(0, 0);
        let b = Vertex::new(1, 0);
        let c = Vertex::new(0, 1);

        assert!(orient2d(a, b, c) > 0);
        assert!(orient2d(a, c, b) < 0);
        assert!(is_ccw(a, b, c));
        assert!(!is_ccw(b, a, c));
    }

    #[test]
    fn test_collinear() {
        let a = Vertex::new(-5, -5);
        let b = Vertex::new(0, 0);
        let c = Vertex::new(7, 7);

        assert_eq!(orient2d(a, b, c), 0);
        assert!(!is_ccw(a, b, c));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let a = Vertex::new(i32::MIN, i32::MIN);
        let b = Vertex::new(i32::MAX, i32::MIN);
        let c = Vertex::new(i32::MIN, i32::MAX);

        let expected = i128::from(u32::MAX) * i128::from(u32::MAX);
        assert_eq!(orient2d(a, b, c), expected);
    }

    #[test]
    fn test_left_to_right() {
        let left = (VertexId(4), Vertex::new(-1, 9));
        let right = (VertexId(0), Vertex::new(3, -9));
        assert_eq!(left_to_right(left, right), Ordering::Less);

        // vertical pair falls back to y
        let low = (VertexId(2), Vertex::new(1, 0));
        let high = (VertexId(1), Vertex::new(1, 5));
        assert_eq!(left_to_right(high, low), Ordering::Greater);

        // coincident vertices fall back to id
        let first = (VertexId(1), Vertex::new(1, 1));
        let second = (VertexId(2), Vertex::new(1, 1));
        assert_eq!(left_to_right(first, second), Ordering::Less);
    }
}
