//! Tiling parameters: validation, gcd reduction, derived quantities.
//!
//! `TilingParams` is the raw caller input (signed so that out-of-range values
//! from a UI or CLI can be reported instead of wrapped). `TilingConfig` is the
//! validated, reduced, immutable form every builder reads from.
//!
//! Validation order is fixed: m, then m against k, then k, then t, then the
//! unit length and layer count. Reduction only happens after all checks pass
//! and uses the unreduced values for the checks.

use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::prototile::{direction_count, DirectionSequence};

/// Raw tiling parameters as supplied by a caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingParams {
    pub m: i64,
    pub k: i64,
    /// Number of rotational sectors.
    pub t: i64,
    pub offset: bool,
    /// Edge length of every tile.
    pub unit_length: f64,
    /// Layers per wedge, including the base layer.
    pub layer_count: i64,
}

impl Default for TilingParams {
    fn default() -> Self {
        Self {
            m: 2,
            k: 5,
            t: 2,
            offset: false,
            unit_length: 10.0,
            layer_count: 4,
        }
    }
}

impl TilingParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.m < 1 {
            return Err(ParameterError::NonPositiveM { m: self.m });
        }
        if self.m > self.k {
            return Err(ParameterError::MExceedsK {
                m: self.m,
                k: self.k,
            });
        }
        if self.k < 1 {
            return Err(ParameterError::NonPositiveK { k: self.k });
        }
        if self.t < 2 {
            return Err(ParameterError::TooFewSectors { t: self.t });
        }
        if !self.unit_length.is_finite() || self.unit_length <= 0.0 {
            return Err(ParameterError::InvalidUnitLength {
                unit_length: self.unit_length,
            });
        }
        if self.layer_count < 1 {
            return Err(ParameterError::NoLayers {
                layer_count: self.layer_count,
            });
        }
        Ok(())
    }
}

/// Rejected parameter sets. Raised before any geometry is built.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterError {
    NonPositiveM { m: i64 },
    MExceedsK { m: i64, k: i64 },
    NonPositiveK { k: i64 },
    TooFewSectors { t: i64 },
    InvalidUnitLength { unit_length: f64 },
    NoLayers { layer_count: i64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveM { m } => write!(f, "m must be positive (got {m})"),
            Self::MExceedsK { m, k } => write!(f, "m exceeds k ({m} > {k})"),
            Self::NonPositiveK { k } => write!(f, "k must be positive (got {k})"),
            Self::TooFewSectors { t } => write!(f, "t must be ≥ 2 (got {t})"),
            Self::InvalidUnitLength { unit_length } => {
                write!(f, "unit length must be finite and positive (got {unit_length})")
            }
            Self::NoLayers { layer_count } => {
                write!(f, "layer count must be ≥ 1 (got {layer_count})")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Validated, reduced configuration. Immutable after construction.
///
/// Invariants
/// - `gcd(m, k) == 1` and `1 <= m <= k` (equality only for `m == k == 1`).
/// - `t >= 2`, `unit_length > 0`, `layer_count >= 1`.
/// - `n == 2(tk - m)` when `offset`, else `n == tk`.
#[derive(Clone, Debug)]
pub struct TilingConfig {
    m: usize,
    k: usize,
    t: usize,
    offset: bool,
    unit_length: f64,
    layer_count: usize,
    directions: DirectionSequence,
}

impl TilingConfig {
    pub fn new(params: &TilingParams) -> Result<Self, ParameterError> {
        params.validate()?;
        // Checked above: every integer is at least 1.
        let (m, k) = (params.m as usize, params.k as usize);
        let g = gcd(m, k);
        let (m, k) = (m / g, k / g);
        let t = params.t as usize;
        let n = direction_count(m, k, t, params.offset);
        Ok(Self {
            m,
            k,
            t,
            offset: params.offset,
            unit_length: params.unit_length,
            layer_count: params.layer_count as usize,
            directions: DirectionSequence::new(m, k, n),
        })
    }

    #[inline]
    pub fn m(&self) -> usize {
        self.m
    }
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }
    #[inline]
    pub fn t(&self) -> usize {
        self.t
    }
    #[inline]
    pub fn offset(&self) -> bool {
        self.offset
    }
    #[inline]
    pub fn unit_length(&self) -> f64 {
        self.unit_length
    }
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }
    /// Direction count n.
    #[inline]
    pub fn n(&self) -> usize {
        self.directions.unit_vectors().len()
    }
    /// Angle between consecutive directions, `2π/n`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.directions.angle()
    }
    #[inline]
    pub fn directions(&self) -> &DirectionSequence {
        &self.directions
    }

    /// Number of foundational wedges: `k`, or `n/2` for offset tilings.
    pub fn wedges_count(&self) -> usize {
        if self.offset {
            self.n() / 2
        } else {
            self.k
        }
    }

    /// Number of sectors in the finished tiling (foundational one included).
    #[inline]
    pub fn sector_count(&self) -> usize {
        self.t
    }

    /// Rotation between consecutive sectors: a half-turn for offset tilings,
    /// otherwise `2π/t`.
    pub fn sector_rotation(&self) -> f64 {
        if self.offset {
            PI
        } else {
            TAU / self.t as f64
        }
    }

    /// Canonical identifier `MK-{m}-{k}-{n}` used for naming and caching.
    pub fn identifier(&self) -> String {
        format!("MK-{}-{}-{}", self.m, self.k, self.n())
    }

    /// The parameters this configuration would be rebuilt from (reduced m, k).
    pub fn params(&self) -> TilingParams {
        TilingParams {
            m: self.m as i64,
            k: self.k as i64,
            t: self.t as i64,
            offset: self.offset,
            unit_length: self.unit_length,
            layer_count: self.layer_count as i64,
        }
    }
}
