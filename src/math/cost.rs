//! Saturating edge and path cost
//!
//! Edges that a cut must never cross carry [`Cost::Forbidden`]. Adding
//! anything to a forbidden cost stays forbidden, so a path summed across a
//! forbidden edge can never be mistaken for a cheaper finite one.

use num_traits::{Zero, ops::saturating::SaturatingAdd};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Non-negative cost with an explicit forbidden value above every finite cost
#[derive(Clone, Copy, Debug)]
pub enum Cost {
    /// Ordinary non-negative cost
    Finite(f64),
    /// Edge that may not be cut, or a node not yet reached
    Forbidden,
}

impl Cost {
    /// Free edge
    pub const ZERO: Self = Self::Finite(0.0);

    /// Build a cost from a raw weight
    ///
    /// Non-finite values map to [`Cost::Forbidden`]; negative values are
    /// clamped to zero.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self::Finite(value.max(0.0))
        } else {
            Self::Forbidden
        }
    }

    /// Test for the forbidden value
    pub const fn is_forbidden(self) -> bool {
        matches!(self, Self::Forbidden)
    }

    /// Finite value, or `None` when forbidden
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Forbidden => None,
        }
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::new(a + b),
            _ => Self::Forbidden,
        }
    }
}

impl SaturatingAdd for Cost {
    fn saturating_add(&self, v: &Self) -> Self {
        *self + *v
    }
}

impl Zero for Cost {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(value) if *value <= 0.0)
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.total_cmp(b),
            (Self::Finite(_), Self::Forbidden) => Ordering::Less,
            (Self::Forbidden, Self::Finite(_)) => Ordering::Greater,
            (Self::Forbidden, Self::Forbidden) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value:.3}"),
            Self::Forbidden => f.write_str("forbidden"),
        }
    }
}
