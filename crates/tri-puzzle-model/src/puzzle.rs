// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated puzzle container

use crate::{ParseError, Result, TriangleId, Vertex, VertexId};
#[cfg(feature = "serde")]
use serde::Serialize;

/// Vertices and triangles of one puzzle
///
/// Every vertex id held by a triangle is checked against the vertex list on
/// construction, so consumers can index `vertices()` with them directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Puzzle {
    vertices: Vec<Vertex>,
    triangles: Vec<[VertexId; 3]>,
}

impl Puzzle {
    /// Build a puzzle, rejecting triangles that reference missing vertices
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<[VertexId; 3]>) -> Result<Self> {
        if u32::try_from(vertices.len()).is_err() {
            return Err(ParseError::CountTooLarge {
                what: "vertex",
                count: vertices.len() as u64,
                limit: u64::from(u32::MAX),
            });
        }
        if u32::try_from(triangles.len()).is_err() {
            return Err(ParseError::CountTooLarge {
                what: "triangle",
                count: triangles.len() as u64,
                limit: u64::from(u32::MAX),
            });
        }

        for (index, corners) in triangles.iter().enumerate() {
            if let Some(bad) = corners.iter().find(|v| v.index() >= vertices.len()) {
                return Err(ParseError::VertexOutOfRange {
                    triangle: TriangleId(index as u32),
                    index: u64::from(bad.0) + 1,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// All vertices, indexed by [`VertexId::index`]
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All triangles in input order, indexed by [`TriangleId::index`]
    #[inline]
    pub fn triangles(&self) -> &[[VertexId; 3]] {
        &self.triangles
    }

    /// Look up a vertex
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Look up a triangle's corners
    pub fn triangle(&self, id: TriangleId) -> Option<&[VertexId; 3]> {
        self.triangles.get(id.index())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterate over triangle ids in input order
    pub fn triangle_ids(&self) -> impl Iterator<Item = TriangleId> + '_ {
        (0..self.triangles.len() as u32).map(TriangleId)
    }
}
