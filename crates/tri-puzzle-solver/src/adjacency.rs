// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Adjacency builder - ribs, their owners and counter-clockwise alignment
//!
//! Runs in two passes. The ownership pass walks the triangles in input order,
//! deduplicates ribs through a hash map and records up to two owners per rib.
//! The classification pass then picks, for every triangle, the ribs whose
//! left-to-right direction has the triangle's third vertex on its left. It
//! only reads the arenas built by the first pass, so it can run on rayon.

use crate::orientation::is_ccw;
use crate::rib::{rib_key, Rib, RibId, RibKey};
use crate::{Error, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tri_puzzle_model::{Puzzle, TriangleId, Vertex, VertexId};

/// Corner pairs, indexed by the corner they are opposite to
const OPPOSITE_PAIRS: [(usize, usize); 3] = [(1, 2), (0, 2), (0, 1)];

/// Counter-clockwise ribs of one triangle (never more than two)
pub type CcwRibs = SmallVec<[RibId; 2]>;

/// Ribs of one triangle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriangleRibs {
    /// Ribs opposite corner 0, 1 and 2
    pub ribs: [RibId; 3],
    /// Counter-clockwise aligned subset, in corner order
    pub ccw: CcwRibs,
}

/// Deduplicated rib set plus per-triangle rib lists
#[derive(Clone, Debug)]
pub struct Adjacency {
    ribs: Vec<Rib>,
    rib_index: FxHashMap<RibKey, RibId>,
    triangles: Vec<TriangleRibs>,
}

impl Adjacency {
    /// Build adjacency on the current thread
    pub fn build(puzzle: &Puzzle) -> Result<Self> {
        Self::build_with(puzzle, false)
    }

    /// Build adjacency, optionally classifying ribs in parallel
    pub fn build_with(puzzle: &Puzzle, parallel: bool) -> Result<Self> {
        let (ribs, rib_index, triangle_ribs) = assign_ribs(puzzle)?;

        let vertices = puzzle.vertices();
        let corners = puzzle.triangles();

        let ccw: Vec<CcwRibs> = if parallel {
            triangle_ribs
                .par_iter()
                .zip(corners.par_iter())
                .enumerate()
                .map(|(i, (ids, corners))| {
                    classify(vertices, &ribs, corners, ids, TriangleId(i as u32))
                })
                .collect::<Result<_>>()?
        } else {
            triangle_ribs
                .iter()
                .zip(corners)
                .enumerate()
                .map(|(i, (ids, corners))| {
                    classify(vertices, &ribs, corners, ids, TriangleId(i as u32))
                })
                .collect::<Result<_>>()?
        };

        let triangles: Vec<TriangleRibs> = triangle_ribs
            .into_iter()
            .zip(ccw)
            .map(|(ribs, ccw)| TriangleRibs { ribs, ccw })
            .collect();

        let adjacency = Self {
            ribs,
            rib_index,
            triangles,
        };

        log::debug!(
            "adjacency: {} ribs ({} shared, {} vertical), {} counter-clockwise",
            adjacency.rib_count(),
            adjacency.shared_rib_count(),
            adjacency.ribs.iter().filter(|r| r.is_vertical()).count(),
            adjacency.triangles.iter().map(|t| t.ccw.len()).sum::<usize>()
        );

        Ok(adjacency)
    }

    pub fn rib_count(&self) -> usize {
        self.ribs.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// All ribs in creation order
    pub fn ribs(&self) -> &[Rib] {
        &self.ribs
    }

    /// Look up a rib
    ///
    /// Rib ids come from this adjacency; foreign ids panic.
    #[inline]
    pub fn rib(&self, id: RibId) -> &Rib {
        &self.ribs[id.index()]
    }

    /// Find the rib between two vertices, in either order
    pub fn find_rib(&self, a: VertexId, b: VertexId) -> Option<RibId> {
        self.rib_index
            .get(&(a, b))
            .or_else(|| self.rib_index.get(&(b, a)))
            .copied()
    }

    /// All triangles in input order
    pub fn triangles(&self) -> &[TriangleRibs] {
        &self.triangles
    }

    pub fn triangle(&self, id: TriangleId) -> Option<&TriangleRibs> {
        self.triangles.get(id.index())
    }

    /// Counter-clockwise ribs of a triangle, empty for unknown ids
    pub fn ccw_ribs(&self, id: TriangleId) -> &[RibId] {
        self.triangle(id).map_or(&[], |t| t.ccw.as_slice())
    }

    /// Ribs owned by two triangles
    pub fn shared_rib_count(&self) -> usize {
        self.ribs.iter().filter(|r| r.is_shared()).count()
    }

    /// Ribs owned by a single triangle
    pub fn boundary_rib_count(&self) -> usize {
        self.rib_count() - self.shared_rib_count()
    }
}

/// Ownership pass: deduplicate ribs and record their owners
fn assign_ribs(
    puzzle: &Puzzle,
) -> Result<(Vec<Rib>, FxHashMap<RibKey, RibId>, Vec<[RibId; 3]>)> {
    let vertices = puzzle.vertices();
    let triangle_count = puzzle.triangle_count();

    // closed meshes share roughly every rib, so 3M/2 is a good first guess
    let capacity = triangle_count * 3 / 2 + 2;
    let mut ribs: Vec<Rib> = Vec::with_capacity(capacity);
    let mut rib_index: FxHashMap<RibKey, RibId> =
        FxHashMap::with_capacity_and_hasher(capacity, Default::default());
    let mut triangle_ribs = Vec::with_capacity(triangle_count);

    for (triangle, corners) in puzzle.triangle_ids().zip(puzzle.triangles()) {
        if let Some(vertex) = repeated_corner(corners) {
            return Err(Error::DegenerateTriangle { triangle, vertex });
        }

        let mut ids = [RibId::default(); 3];

        for (slot, (a, b)) in ids.iter_mut().zip(OPPOSITE_PAIRS) {
            let key = rib_key(vertices, corners[a], corners[b]);
            let id = *rib_index.entry(key).or_insert_with(|| {
                ribs.push(Rib::new(key, vertices));
                RibId((ribs.len() - 1) as u32)
            });

            ribs[id.index()].add_owner(triangle)?;
            *slot = id;
        }

        triangle_ribs.push(ids);
    }

    Ok((ribs, rib_index, triangle_ribs))
}

fn repeated_corner(corners: &[VertexId; 3]) -> Option<VertexId> {
    if corners[0] == corners[1] || corners[0] == corners[2] {
        Some(corners[0])
    } else if corners[1] == corners[2] {
        Some(corners[1])
    } else {
        None
    }
}

/// Classification pass for one triangle
fn classify(
    vertices: &[Vertex],
    ribs: &[Rib],
    corners: &[VertexId; 3],
    ids: &[RibId; 3],
    triangle: TriangleId,
) -> Result<CcwRibs> {
    let mut ccw = CcwRibs::new();

    for (opposite, id) in ids.iter().enumerate() {
        let rib = &ribs[id.index()];

        // vertical ribs carry no pressure
        if rib.is_vertical() {
            continue;
        }

        let left = vertices[rib.left.index()];
        let right = vertices[rib.right.index()];
        let apex = vertices[corners[opposite].index()];

        if is_ccw(left, right, apex) {
            if ccw.len() == 2 {
                return Err(Error::TooManyCcwRibs { triangle });
            }
            ccw.push(*id);
        }
    }

    Ok(ccw)
}
