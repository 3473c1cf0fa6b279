//! Front boundary: the open edges that anchor the next foundational wedge.
//!
//! Matching is greedy and index-ordered. A hit at position `j` anchors the
//! new wedge at that edge's point and truncates the front to its first `j`
//! entries. Edges after the match are dropped even if still open: the new
//! wedge covers that region.

use crate::config::TilingConfig;
use crate::geom::Point;
use crate::prototile::{BoundaryEdge, Wedge};

/// An open edge plus where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpenEdge {
    pub edge: BoundaryEdge,
    /// Wedge that contributed the edge.
    pub wedge: usize,
    /// Position inside that wedge's `upper_boundary`.
    pub slot: usize,
}

/// How a foundational wedge was anchored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    pub wedge: usize,
    pub apex: Point,
    /// The open edge the apex was taken from; `None` means the origin fallback.
    pub source: Option<OpenEdge>,
}

#[derive(Clone, Debug, Default)]
pub struct FrontBoundary {
    edges: Vec<OpenEdge>,
}

impl FrontBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn edges(&self) -> &[OpenEdge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Position of the first open edge with `direction`.
    pub fn find(&self, direction: usize) -> Option<usize> {
        self.edges
            .iter()
            .position(|open| open.edge.direction == direction)
    }

    /// Take the first open edge with `direction`, discarding it and every
    /// edge after it. Leaves the front untouched on a miss.
    pub fn claim(&mut self, direction: usize) -> Option<OpenEdge> {
        let j = self.find(direction)?;
        let hit = self.edges[j];
        self.edges.truncate(j);
        Some(hit)
    }

    /// Append a wedge's outer-left side to the end of the front.
    pub fn push_wedge(&mut self, wedge: &Wedge) {
        self.edges
            .extend(
                wedge
                    .upper_boundary
                    .iter()
                    .enumerate()
                    .map(|(slot, edge)| OpenEdge {
                        edge: *edge,
                        wedge: wedge.index,
                        slot,
                    }),
            );
    }
}

impl FromIterator<OpenEdge> for FrontBoundary {
    fn from_iter<I: IntoIterator<Item = OpenEdge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

/// Build the foundational wedges in index order, threading one front boundary.
///
/// Wedge `w` has direction `w`. The first wedge always falls back to the
/// origin since the front starts empty.
pub fn assemble_foundation(cfg: &TilingConfig) -> (Vec<Wedge>, Vec<Anchor>) {
    let count = cfg.wedges_count();
    let mut front = FrontBoundary::new();
    let mut wedges = Vec::with_capacity(count);
    let mut anchors = Vec::with_capacity(count);
    for w in 0..count {
        let source = front.claim(w);
        let apex = source.map_or_else(Point::zeros, |open| open.edge.point);
        tracing::trace!(
            wedge = w,
            matched = ?source.map(|open| (open.wedge, open.slot)),
            open = front.len(),
            "anchor"
        );
        let wedge = Wedge::new(cfg, w, apex, w);
        front.push_wedge(&wedge);
        anchors.push(Anchor {
            wedge: w,
            apex,
            source,
        });
        wedges.push(wedge);
    }
    tracing::debug!(wedges = count, open = front.len(), "foundation assembled");
    (wedges, anchors)
}
