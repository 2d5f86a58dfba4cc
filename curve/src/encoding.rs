//! SEC1 point encoding.
//!
//! Every encoding starts with a tag byte. Field elements are written
//! big-endian and left-padded to the byte length of p.
//!
//! | tag         | payload                          |
//! |-------------|----------------------------------|
//! | `00`        | none, the point at infinity      |
//! | `02` / `03` | x, low tag bit is the parity of y |
//! | `04`        | x then y                         |
//! | `06` / `07` | x then y, low tag bit is the parity of y |

use std::sync::Arc;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::numthry::ressol;
use crate::{Curve, CurveError, Projective};

/// Point encoding selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PointFormat {
    Compressed = 0x02,
    Uncompressed = 0x04,
    Hybrid = 0x06,
}

impl TryFrom<u8> for PointFormat {
    type Error = CurveError;

    /// Map a tag byte, ignoring its parity bit, to the format it announces.
    fn try_from(tag: u8) -> Result<Self, CurveError> {
        match tag {
            0x02 | 0x03 => Ok(PointFormat::Compressed),
            0x04 => Ok(PointFormat::Uncompressed),
            0x06 | 0x07 => Ok(PointFormat::Hybrid),
            _ => Err(CurveError::InvalidArgument),
        }
    }
}

fn encode_field_element(x: &BigInt, len: usize, out: &mut Vec<u8>) {
    let (_, bytes) = x.to_bytes_be();
    out.resize(out.len() + len.saturating_sub(bytes.len()), 0);
    out.extend_from_slice(&bytes);
}

fn decode_field_element(bytes: &[u8], curve: &Curve) -> Result<BigInt, CurveError> {
    let x = BigInt::from_bytes_be(Sign::Plus, bytes);
    if x >= *curve.p() {
        return Err(CurveError::IllegalPoint);
    }
    Ok(x)
}

/// Encode a point. The point at infinity is always the single byte `00`.
pub fn encode_point(point: &Projective, format: PointFormat) -> Result<Vec<u8>, CurveError> {
    if point.is_zero() {
        return Ok(vec![0]);
    }

    let affine = point.to_affine()?;
    let p_bytes = point.curve().p_bytes();
    let parity = affine.y_is_odd() as u8;

    let mut out = Vec::with_capacity(1 + 2 * p_bytes);
    match format {
        PointFormat::Compressed => {
            out.push(PointFormat::Compressed as u8 | parity);
            encode_field_element(&affine.x, p_bytes, &mut out);
        }
        PointFormat::Uncompressed => {
            out.push(PointFormat::Uncompressed as u8);
            encode_field_element(&affine.x, p_bytes, &mut out);
            encode_field_element(&affine.y, p_bytes, &mut out);
        }
        PointFormat::Hybrid => {
            out.push(PointFormat::Hybrid as u8 | parity);
            encode_field_element(&affine.x, p_bytes, &mut out);
            encode_field_element(&affine.y, p_bytes, &mut out);
        }
    }
    Ok(out)
}

/// Encode a point given the raw tag byte of the wanted format.
///
/// The point at infinity encodes to `00` whatever the tag; for any other
/// point an unknown tag fails with `InvalidArgument`.
pub fn encode_point_with_tag(point: &Projective, tag: u8) -> Result<Vec<u8>, CurveError> {
    if point.is_zero() {
        return Ok(vec![0]);
    }
    encode_point(point, PointFormat::try_from(tag)?)
}

/// Decode a point on `curve`.
///
/// Inputs of at most one byte decode to the point at infinity. The result
/// has passed [`Projective::check_invariants`].
pub fn decode_point(data: &[u8], curve: &Arc<Curve>) -> Result<Projective, CurveError> {
    if data.len() <= 1 {
        return Ok(Projective::identity(curve));
    }

    let tag = data[0];
    let payload = &data[1..];
    let y_odd = tag & 1 == 1;

    let (x, y) = match PointFormat::try_from(tag)? {
        PointFormat::Compressed => {
            let x = decode_field_element(payload, curve)?;
            let y = decompress_point(y_odd, &x, curve)?;
            (x, y)
        }
        PointFormat::Uncompressed => {
            let l = payload.len() / 2;
            let x = decode_field_element(&payload[..l], curve)?;
            let y = decode_field_element(&payload[l..2 * l], curve)?;
            (x, y)
        }
        PointFormat::Hybrid => {
            let l = payload.len() / 2;
            let x = decode_field_element(&payload[..l], curve)?;
            let y = decode_field_element(&payload[l..2 * l], curve)?;
            if decompress_point(y_odd, &x, curve)? != y {
                return Err(CurveError::IllegalPoint);
            }
            (x, y)
        }
    };

    let point = Projective::new(curve, &x, &y);
    point.check_invariants()?;
    Ok(point)
}

/// Recover y from x and the parity of y.
///
/// Fails with `IllegalPoint` if x^3 + a*x + b has no square root mod p, or
/// if the only root is zero and an odd y was asked for.
pub fn decompress_point(y_odd: bool, x: &BigInt, curve: &Curve) -> Result<BigInt, CurveError> {
    let g = curve.rhs(x);
    let z = ressol(&g, curve.p()).ok_or(CurveError::IllegalPoint)?;

    if z.bit(0) == y_odd {
        Ok(z)
    } else if z.is_zero() {
        Err(CurveError::IllegalPoint)
    } else {
        Ok(curve.p() - z)
    }
}
