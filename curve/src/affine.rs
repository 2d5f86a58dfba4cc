use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::Curve;

/// Affine point (x, y) on a curve.
///
/// The point at infinity has no affine form; it only exists as a
/// [`Projective`](crate::Projective) with Z = 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate, in [0, p)
    pub x: BigInt,
    /// The y-coordinate, in [0, p)
    pub y: BigInt,
}

impl Affine {
    /// Create a new affine point.
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Affine { x, y }
    }

    /// Check if a point is on the curve: y^2 = x^3 + a*x + b.
    pub fn is_on_curve(&self, curve: &Curve) -> bool {
        curve.square(&self.y) == curve.rhs(&self.x)
    }

    /// Whether the y-coordinate is odd, as carried by compressed encodings.
    #[inline]
    pub fn y_is_odd(&self) -> bool {
        self.y.bit(0)
    }
}
