// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pressure graph - which triangle rests on which
//!
//! A triangle rests on its counter-clockwise ribs. When such a rib is shared,
//! the triangle presses on the rib's other owner, and that owner cannot be
//! extracted first.

use crate::adjacency::Adjacency;
use crate::{Error, Result};
use smallvec::SmallVec;
use tri_puzzle_model::TriangleId;

/// Triangles a single triangle presses on (two at most for real puzzles)
pub type Receivers = SmallVec<[TriangleId; 2]>;

/// Per-triangle pressure counts and out-edges
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressureGraph {
    pub(crate) pressure: Vec<u32>,
    pub(crate) receivers: Vec<Receivers>,
}

impl PressureGraph {
    /// Derive pressure from counter-clockwise ribs
    pub fn build(adjacency: &Adjacency) -> Self {
        let count = adjacency.triangle_count();
        let mut pressure = vec![0u32; count];
        let mut receivers = vec![Receivers::new(); count];

        for (presser, triangle) in adjacency.triangles().iter().enumerate() {
            let presser = TriangleId(presser as u32);

            for &rib in &triangle.ccw {
                // boundary ribs press on nothing
                let Some(receiver) = adjacency.rib(rib).other_owner(presser) else {
                    continue;
                };

                pressure[receiver.index()] += 1;
                receivers[presser.index()].push(receiver);
            }
        }

        let graph = Self {
            pressure,
            receivers,
        };

        log::debug!(
            "pressure graph: {} edges, {} free triangles, max pressure {}",
            graph.edge_count(),
            graph.free_triangles().count(),
            graph.max_pressure()
        );

        graph
    }

    /// Build a graph from explicit (presser, receiver) pairs
    pub fn from_edges(
        triangle_count: usize,
        edges: impl IntoIterator<Item = (TriangleId, TriangleId)>,
    ) -> Result<Self> {
        let mut pressure = vec![0u32; triangle_count];
        let mut receivers = vec![Receivers::new(); triangle_count];

        for (presser, receiver) in edges {
            for t in [presser, receiver] {
                if t.index() >= triangle_count {
                    return Err(Error::UnknownTriangle {
                        triangle: t,
                        triangle_count,
                    });
                }
            }

            pressure[receiver.index()] += 1;
            receivers[presser.index()].push(receiver);
        }

        Ok(Self {
            pressure,
            receivers,
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.pressure.len()
    }

    /// Initial pressure counts, indexed by triangle
    pub fn pressures(&self) -> &[u32] {
        &self.pressure
    }

    /// Number of triangles pressing on `triangle`
    pub fn pressure(&self, triangle: TriangleId) -> u32 {
        self.pressure.get(triangle.index()).copied().unwrap_or(0)
    }

    /// Triangles that `triangle` presses on
    pub fn receivers(&self, triangle: TriangleId) -> &[TriangleId] {
        self.receivers
            .get(triangle.index())
            .map_or(&[], |r| r.as_slice())
    }

    /// All (presser, receiver) pairs
    pub fn edges(&self) -> impl Iterator<Item = (TriangleId, TriangleId)> + '_ {
        self.receivers.iter().enumerate().flat_map(|(presser, receivers)| {
            receivers
                .iter()
                .map(move |&receiver| (TriangleId(presser as u32), receiver))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.receivers.iter().map(|r| r.len()).sum()
    }

    /// Triangles nothing presses on
    pub fn free_triangles(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.pressure
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p == 0)
            .map(|(i, _)| TriangleId(i as u32))
    }

    pub fn max_pressure(&self) -> u32 {
        self.pressure.iter().copied().max().unwrap_or(0)
    }
}
