//! Elliptic curve point arithmetic over prime fields GF(p).
//!
//! Curves are short Weierstrass, y^2 = x^3 + a*x + b. Points are kept in
//! Jacobian coordinates whose components are Montgomery residues, so the
//! group law needs no field inversion until a point is converted back to
//! affine form. Points encode to and from the SEC1 compressed, uncompressed
//! and hybrid formats.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gfp_curve::{decode_point, encode_point, Curve, PointFormat, Projective};
//! use num_bigint::BigInt;
//!
//! let curve = Arc::new(Curve::new(BigInt::from(23), BigInt::from(1), BigInt::from(1)).unwrap());
//! let g = Projective::new(&curve, &BigInt::from(3), &BigInt::from(10));
//!
//! let bytes = encode_point(&g, PointFormat::Compressed).unwrap();
//! assert_eq!(decode_point(&bytes, &curve).unwrap(), g);
//!
//! // the generator has order 28
//! assert!((&g * &BigInt::from(28)).is_zero());
//! ```
//!
//! Arithmetic branches on the values it processes and is not constant time.

mod affine;
mod curve;
mod encoding;
mod error;
mod monty;
mod numthry;
mod projective;
mod random;
mod scalar_mul;
mod workspace;

#[cfg(test)]
mod test_vectors;
#[cfg(test)]
mod tests;

pub use affine::Affine;
pub use curve::{Curve, CurveConfig};
pub use encoding::{
    decode_point, decompress_point, encode_point, encode_point_with_tag, PointFormat,
};
pub use error::CurveError;
pub use monty::{monty_mul, monty_sqr, MontyScratch};
pub use numthry::{inverse_mod, ressol};
pub use projective::Projective;
pub use random::{random_below, RandomPoint};
pub use workspace::Workspace;
