//! Error types for curve point arithmetic and encoding.

use core::fmt::{self, Display, Formatter};

/// Errors that can occur while converting, validating or decoding points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// An affine coordinate was requested from the point at infinity.
    ///
    /// The identity has no affine representation, so `affine_x`, `affine_y`
    /// and `to_affine` refuse to produce one.
    IllegalTransformation,
    /// A point failed the curve equation check.
    ///
    /// This error occurs when:
    /// - Decoded bytes describe coordinates that are not on the curve
    /// - A compressed x-coordinate has no matching y (non-residue)
    /// - The parity bit of a hybrid encoding disagrees with its y-coordinate
    /// - The internal state of a point was corrupted
    IllegalPoint,
    /// An unknown encoding format, an unknown tag byte, or unusable curve
    /// parameters were supplied.
    InvalidArgument,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::IllegalTransformation => {
                f.write_str("cannot convert the point at infinity to affine coordinates")
            }
            CurveError::IllegalPoint => f.write_str("point is not on the curve"),
            CurveError::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

impl std::error::Error for CurveError {}
