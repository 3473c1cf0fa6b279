//! Plane helpers shared by the tile builders and the sector replicator.
//!
//! - `Point`: positions and translations are both `Vector2<f64>`.
//! - `rotate_about`: rotation about an arbitrary pivot.
//! - `Bounds2`: axis-aligned bounds, handed to renderers for viewport fitting.

use nalgebra::{Rotation2, Vector2};

/// A vertex or translation in the plane.
pub type Point = Vector2<f64>;

/// Absolute tolerance (per unit of scale) for comparing vertices built from
/// the same unit walk along different paths.
pub const POINT_EPS: f64 = 1e-9;

/// Rotate `p` about `pivot` by `angle` radians (counterclockwise).
#[inline]
pub fn rotate_about(p: Point, angle: f64, pivot: Point) -> Point {
    Rotation2::new(angle) * (p - pivot) + pivot
}

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    (a + b) * 0.5
}

/// `|a - b| <= POINT_EPS * max(scale, 1)`.
#[inline]
pub fn approx_eq(a: Point, b: Point, scale: f64) -> bool {
    (a - b).norm() <= POINT_EPS * scale.max(1.0)
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    /// Bounds of a point cloud; `None` when empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter();
        let first = *it.next()?;
        Some(it.fold(Self { min: first, max: first }, |b, p| b.include(*p)))
    }

    #[inline]
    pub fn include(self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    #[inline]
    pub fn union(self, other: Self) -> Self {
        self.include(other.min).include(other.max)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        midpoint(self.min, self.max)
    }
}
