// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ribs - deduplicated triangle edges stored left to right

use crate::orientation::left_to_right;
use crate::{Error, Result};
use std::cmp::Ordering;
use tri_puzzle_model::{TriangleId, Vertex, VertexId};

/// Index into the rib arena
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct RibId(pub u32);

impl RibId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Canonical (left, right) vertex pair identifying a rib
pub type RibKey = (VertexId, VertexId);

/// Order a vertex pair left to right
pub fn rib_key(vertices: &[Vertex], a: VertexId, b: VertexId) -> RibKey {
    let va = (a, vertices[a.index()]);
    let vb = (b, vertices[b.index()]);

    match left_to_right(va, vb) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    }
}

/// Segment shared by at most two triangles
///
/// Always directed from its left vertex to its right one, so `delta_x >= 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rib {
    pub left: VertexId,
    pub right: VertexId,
    pub delta_x: i64,
    pub delta_y: i64,
    owners: [Option<TriangleId>; 2],
}

impl Rib {
    /// Create an unowned rib from a canonical key
    pub fn new(key: RibKey, vertices: &[Vertex]) -> Self {
        let (left, right) = key;
        let l = vertices[left.index()];
        let r = vertices[right.index()];

        Self {
            left,
            right,
            delta_x: i64::from(r.x) - i64::from(l.x),
            delta_y: i64::from(r.y) - i64::from(l.y),
            owners: [None, None],
        }
    }

    /// Vertical ribs never carry pressure
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.delta_x == 0
    }

    /// Record a triangle as owner, failing on a third one
    pub fn add_owner(&mut self, triangle: TriangleId) -> Result<()> {
        match self.owners {
            [None, _] => self.owners[0] = Some(triangle),
            [Some(_), None] => self.owners[1] = Some(triangle),
            [Some(first), Some(second)] => {
                return Err(Error::RibOverflow {
                    left: self.left,
                    right: self.right,
                    first,
                    second,
                    triangle,
                })
            }
        }
        Ok(())
    }

    /// Owning triangles in the order they claimed the rib
    pub fn owners(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.owners.iter().flatten().copied()
    }

    /// The owner that is not `triangle`
    ///
    /// `None` for boundary ribs and for triangles that do not own this rib.
    pub fn other_owner(&self, triangle: TriangleId) -> Option<TriangleId> {
        match self.owners {
            [Some(first), second] if first == triangle => second,
            [first, Some(second)] if second == triangle => first,
            _ => None,
        }
    }

    /// Whether two triangles share this rib
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.owners[1].is_some()
    }
}
