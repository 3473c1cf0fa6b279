//! Direction sequence of the prototile and the unit vectors of the tiling.
//!
//! Layout of the sequence for reduced `(m, k)`, length `2k+2`:
//! - lower half, positions `0..=k`: `(m·j) mod k` for `j < k`, then `k`;
//! - upper half, positions `k+1..=2k+1`: the lower half reversed, with its
//!   first and last entries swapped. Upper steps are walked with the sign
//!   flipped, which folds the walk back to the origin.

use std::f64::consts::TAU;
use std::ops::Range;

use crate::geom::Point;

/// Direction count n: `2(tk − m)` for offset tilings, `tk` otherwise.
pub fn direction_count(m: usize, k: usize, t: usize, offset: bool) -> usize {
    if offset {
        2 * (t * k - m)
    } else {
        t * k
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectionSequence {
    k: usize,
    steps: Vec<usize>,
    angle: f64,
    unit_vectors: Vec<Point>,
}

impl DirectionSequence {
    /// Build the sequence for reduced `(m, k)` inside a tiling with `n` directions.
    pub fn new(m: usize, k: usize, n: usize) -> Self {
        let mut lower: Vec<usize> = (0..k).map(|j| (m * j) % k).collect();
        lower.push(k);
        let mut steps = Vec::with_capacity(2 * k + 2);
        steps.extend_from_slice(&lower);
        steps.extend(lower.iter().rev());
        steps.swap(k + 1, 2 * k + 1);

        let angle = TAU / n as f64;
        let unit_vectors = (0..n)
            .map(|i| {
                let theta = i as f64 * angle;
                Point::new(theta.cos(), theta.sin())
            })
            .collect();
        Self {
            k,
            steps,
            angle,
            unit_vectors,
        }
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }
    /// Raw direction indices, `2k+2` of them.
    #[inline]
    pub fn steps(&self) -> &[usize] {
        &self.steps
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
    /// One unit vector per direction index, evenly spaced on the circle.
    #[inline]
    pub fn unit_vectors(&self) -> &[Point] {
        &self.unit_vectors
    }

    /// Whether sequence position `i` is walked with the sign flipped.
    #[inline]
    pub fn is_upper(&self, i: usize) -> bool {
        i > self.k
    }

    /// Positions `0..=k`.
    #[inline]
    pub fn lower_half(&self) -> Range<usize> {
        0..self.k + 1
    }

    /// Positions `k+1..=2k+1`, in walking order of the sequence.
    #[inline]
    pub fn upper_half(&self) -> Range<usize> {
        self.k + 1..self.steps.len()
    }

    /// Signed unit step at sequence position `i` (local frame).
    #[inline]
    pub fn step_vector(&self, i: usize) -> Point {
        let u = self.unit_vectors[self.steps[i]];
        if self.is_upper(i) {
            -u
        } else {
            u
        }
    }

    /// Sum of the signed unit steps over `range` (unscaled).
    pub fn walk(&self, range: Range<usize>) -> Point {
        range.map(|i| self.step_vector(i)).sum()
    }
}
