use nalgebra::Point2;

use std::collections::VecDeque;

use crate::Float;

/// Chronological history of a body's positions, oldest first.
///
/// Unbounded unless a capacity is set, in which case the oldest node is
/// dropped for every node pushed past the cap.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    nodes: VecDeque<Point2<Float>>,
    capacity: Option<usize>,
}

impl Trail {
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            nodes: VecDeque::with_capacity(capacity.unwrap_or(0)),
            capacity,
        }
    }

    #[inline]
    pub fn add_node(&mut self, pos: Point2<Float>) {
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return
            }
            while self.nodes.len() >= cap {
                self.nodes.pop_front();
            }
        }
        self.nodes.push_back(pos);
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    // Renderer only joins the dots once there is more than a couple of them
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.nodes.len() > 2
    }

    pub fn last(&self) -> Option<&Point2<Float>> {
        self.nodes.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2<Float>> + '_ {
        self.nodes.iter()
    }
}
