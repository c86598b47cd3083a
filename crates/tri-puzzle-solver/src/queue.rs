// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decrease-key priority queue over pressure counts
//!
//! Pressure counts are tiny (two at most for real puzzles) and only ever go
//! down by one, so the queue is a bucket per count. Each bucket is an ordered
//! set, which gives the ascending-id tie-break and logarithmic moves; a
//! per-triangle key slot finds a triangle's bucket in O(1).

use std::collections::BTreeSet;
use tri_puzzle_model::TriangleId;

/// Triangles keyed by their current pressure
#[derive(Clone, Debug, Default)]
pub struct PressureQueue {
    buckets: Vec<BTreeSet<TriangleId>>,
    /// Current key of every triangle still queued
    keys: Vec<Option<u32>>,
    len: usize,
}

impl PressureQueue {
    /// Queue every triangle under its initial pressure
    pub fn new(pressure: &[u32]) -> Self {
        let top = pressure.iter().copied().max().unwrap_or(0) as usize;
        let mut grouped: Vec<Vec<TriangleId>> = vec![Vec::new(); top + 1];

        for (i, &p) in pressure.iter().enumerate() {
            grouped[p as usize].push(TriangleId(i as u32));
        }

        Self {
            buckets: grouped.into_iter().map(BTreeSet::from_iter).collect(),
            keys: pressure.iter().map(|&p| Some(p)).collect(),
            len: pressure.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current pressure of a queued triangle
    pub fn key(&self, triangle: TriangleId) -> Option<u32> {
        self.keys.get(triangle.index()).copied().flatten()
    }

    /// Lowest-pressure triangle, lowest id first, without removing it
    pub fn peek_min(&self) -> Option<(TriangleId, u32)> {
        self.buckets
            .iter()
            .enumerate()
            .find_map(|(p, bucket)| bucket.first().map(|&t| (t, p as u32)))
    }

    /// Remove and return the lowest-pressure triangle, lowest id first
    pub fn pop_min(&mut self) -> Option<(TriangleId, u32)> {
        let (pressure, bucket) = self
            .buckets
            .iter_mut()
            .enumerate()
            .find(|(_, bucket)| !bucket.is_empty())?;
        let triangle = bucket.pop_first()?;

        self.keys[triangle.index()] = None;
        self.len -= 1;
        Some((triangle, pressure as u32))
    }

    /// Lower a queued triangle's pressure by one
    ///
    /// Returns the new key, or `None` if the triangle is not queued or is
    /// already free. Either case means the pressure counts are inconsistent.
    pub fn decrement(&mut self, triangle: TriangleId) -> Option<u32> {
        let slot = self.keys.get_mut(triangle.index())?;
        let key = (*slot).filter(|&k| k > 0)?;

        self.buckets[key as usize].remove(&triangle);
        self.buckets[key as usize - 1].insert(triangle);
        *slot = Some(key - 1);
        Some(key - 1)
    }

    /// Triangles still queued, ascending
    pub fn remaining(&self) -> impl Iterator<Item = TriangleId> + '_ {
        self.keys
            .iter()
            .enumerate()
            .filter(|(_, key)| key.is_some())
            .map(|(i, _)| TriangleId(i as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_order_is_pressure_then_id() {
        let mut queue = PressureQueue::new(&[1, 0, 2, 0]);

        assert_eq!(queue.len(), 4);
        assert_eq!(queue.peek_min(), Some((TriangleId(1), 0)));
        assert_eq!(queue.pop_min(), Some((TriangleId(1), 0)));
        assert_eq!(queue.pop_min(), Some((TriangleId(3), 0)));
        assert_eq!(queue.pop_min(), Some((TriangleId(0), 1)));
        assert_eq!(queue.pop_min(), Some((TriangleId(2), 2)));
        assert_eq!(queue.pop_min(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_decrement_moves_to_lower_bucket() {
        let mut queue = PressureQueue::new(&[0, 2, 1]);

        assert_eq!(queue.decrement(TriangleId(1)), Some(1));
        assert_eq!(queue.key(TriangleId(1)), Some(1));
        assert_eq!(queue.decrement(TriangleId(2)), Some(0));

        assert_eq!(queue.pop_min(), Some((TriangleId(0), 0)));
        assert_eq!(queue.pop_min(), Some((TriangleId(2), 0)));
        assert_eq!(queue.pop_min(), Some((TriangleId(1), 1)));
    }

    #[test]
    fn test_decrement_unqueued() {
        let mut queue = PressureQueue::new(&[0, 1]);
        queue.pop_min();

        assert_eq!(queue.decrement(TriangleId(0)), None);
        assert_eq!(queue.decrement(TriangleId(7)), None);
        assert_eq!(queue.key(TriangleId(0)), None);
    }

    #[test]
    fn test_decrement_below_zero_is_refused() {
        let mut queue = PressureQueue::new(&[0]);
        assert_eq!(queue.decrement(TriangleId(0)), None);
        assert_eq!(queue.key(TriangleId(0)), Some(0));
        assert_eq!(queue.pop_min(), Some((TriangleId(0), 0)));
    }

    #[test]
    fn test_remaining() {
        let mut queue = PressureQueue::new(&[0, 1, 1]);
        queue.pop_min();
        assert_eq!(
            queue.remaining().collect::<Vec<_>>(),
            vec![TriangleId(1), TriangleId(2)]
        );
    }

    #[test]
    fn test_empty_queue() {
        let mut queue = PressureQueue::new(&[]);
        assert!(queue.is_empty());
        assert_eq!(queue.peek_min(), None);
        assert_eq!(queue.pop_min(), None);
    }
}
