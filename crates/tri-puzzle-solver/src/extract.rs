// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Priority extractor - lifts triangles out once nothing presses on them

use crate::pressure::PressureGraph;
use crate::queue::PressureQueue;
use crate::{Error, Result};
use std::fmt;
use std::io::{self, Write};
use tri_puzzle_model::TriangleId;

/// Order in which every triangle can be removed
///
/// Formats as 1-based triangle numbers, each followed by a single space.
/// Free triangles leave lowest number first; expected outputs from a tool
/// that breaks ties another way (e.g. most recently released first) can
/// differ from this order where several triangles are free at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractionOrder {
    order: Vec<TriangleId>,
}

impl ExtractionOrder {
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.order.iter().copied()
    }

    pub fn as_slice(&self) -> &[TriangleId] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<TriangleId> {
        self.order
    }

    /// Position of a triangle in the order
    pub fn position_of(&self, triangle: TriangleId) -> Option<usize> {
        self.order.iter().position(|&t| t == triangle)
    }

    /// Check the order against a pressure graph
    ///
    /// Every triangle must appear exactly once, and every presser before each
    /// of its receivers.
    pub fn verify(&self, graph: &PressureGraph) -> Result<()> {
        let count = graph.triangle_count();
        if self.order.len() != count {
            return Err(Error::invalid_order(format!(
                "{} triangles extracted, expected {}",
                self.order.len(),
                count
            )));
        }

        let mut positions: Vec<Option<usize>> = vec![None; count];
        for (position, &triangle) in self.order.iter().enumerate() {
            match positions.get_mut(triangle.index()) {
                None => {
                    return Err(Error::UnknownTriangle {
                        triangle,
                        triangle_count: count,
                    })
                }
                Some(Some(_)) => {
                    return Err(Error::invalid_order(format!(
                        "triangle {triangle} extracted twice"
                    )))
                }
                Some(slot) => *slot = Some(position),
            }
        }

        for (presser, receiver) in graph.edges() {
            if positions[receiver.index()] < positions[presser.index()] {
                return Err(Error::invalid_order(format!(
                    "triangle {receiver} extracted while {presser} still presses on it"
                )));
            }
        }

        Ok(())
    }

    /// Whether [`verify`](Self::verify) passes
    pub fn respects(&self, graph: &PressureGraph) -> bool {
        self.verify(graph).is_ok()
    }

    /// Write the order in output format
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for triangle in &self.order {
            write!(writer, "{triangle} ")?;
        }
        Ok(())
    }
}

impl fmt::Display for ExtractionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for triangle in &self.order {
            write!(f, "{triangle} ")?;
        }
        Ok(())
    }
}

impl From<ExtractionOrder> for Vec<TriangleId> {
    fn from(order: ExtractionOrder) -> Self {
        order.order
    }
}

impl<'a> IntoIterator for &'a ExtractionOrder {
    type Item = &'a TriangleId;
    type IntoIter = std::slice::Iter<'a, TriangleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

/// Extract all triangles in pressure order
///
/// Ties between free triangles go to the lowest id. Fails without a partial
/// result when every remaining triangle is still pressed on.
pub fn extract(graph: &PressureGraph) -> Result<ExtractionOrder> {
    let mut queue = PressureQueue::new(graph.pressures());
    let mut order = Vec::with_capacity(graph.triangle_count());

    while let Some((triangle, pressure)) = queue.pop_min() {
        if pressure != 0 {
            let mut remaining: Vec<TriangleId> = queue.remaining().collect();
            remaining.push(triangle);
            remaining.sort_unstable();

            log::error!(
                "extraction stuck after {} triangles: {} pressed on by {}",
                order.len(),
                triangle,
                pressure
            );
            return Err(Error::UnresolvedPressure {
                triangle,
                pressure,
                remaining,
            });
        }

        log::trace!("extracting triangle {}", triangle);
        order.push(triangle);

        for &receiver in graph.receivers(triangle) {
            if queue.decrement(receiver).is_none() {
                return Err(Error::invalid_order(format!(
                    "triangle {triangle} releases {receiver}, which nothing presses on"
                )));
            }
        }
    }

    Ok(ExtractionOrder { order })
}
