//! Curve parameters for y^2 = x^3 + a*x + b over GF(p).
//!
//! A `Curve` is built once from (p, a, b) and carries every derived constant
//! the Montgomery layer needs. Points share it read-only through an `Arc`.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::monty::{monty_inverse, to_words, Word};
use crate::numthry::inverse_mod;
use crate::CurveError;

/// Serializable defining parameters of a curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// The field prime
    pub p: BigInt,
    /// Coefficient of x
    pub a: BigInt,
    /// Constant term
    pub b: BigInt,
}

/// A short Weierstrass curve over a prime field, with Montgomery constants.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CurveConfig", into = "CurveConfig")]
pub struct Curve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
    /// R = 2^(64 * p_words) mod p
    r: BigInt,
    r_inv: BigInt,
    /// a * R mod p
    a_r: BigInt,
    /// -p^{-1} mod 2^64
    p_dash: Word,
    p_words: Vec<Word>,
    p_bytes: usize,
}

impl Curve {
    /// Build a curve, deriving its Montgomery constants.
    ///
    /// `p` is assumed prime. Fails with `InvalidArgument` if `p` is even or
    /// not larger than 3, or if the curve is singular.
    pub fn new(p: BigInt, a: BigInt, b: BigInt) -> Result<Self, CurveError> {
        if p <= BigInt::from(3) || !p.bit(0) {
            return Err(CurveError::InvalidArgument);
        }

        let a = reduce_mod(&a, &p);
        let b = reduce_mod(&b, &p);

        // 4a^3 + 27b^2 != 0
        let disc = reduce_mod(
            &(BigInt::from(4) * &a * &a * &a + BigInt::from(27) * &b * &b),
            &p,
        );
        if disc.is_zero() {
            return Err(CurveError::InvalidArgument);
        }

        let p_words = to_words(&p);
        let r = (BigInt::one() << (64 * p_words.len())) % &p;
        let r_inv = inverse_mod(&r, &p).ok_or(CurveError::InvalidArgument)?;
        let a_r = reduce_mod(&(&a * &r), &p);
        let p_dash = monty_inverse(p_words[0]);
        let p_bytes = ((p.bits() + 7) / 8) as usize;

        Ok(Self {
            p,
            a,
            b,
            r,
            r_inv,
            a_r,
            p_dash,
            p_words,
            p_bytes,
        })
    }

    #[inline]
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    #[inline]
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The Montgomery radix R mod p, which is also the residue of 1.
    #[inline]
    pub fn r(&self) -> &BigInt {
        &self.r
    }

    #[inline]
    pub fn r_inv(&self) -> &BigInt {
        &self.r_inv
    }

    /// Montgomery residue of `a`.
    #[inline]
    pub fn a_r(&self) -> &BigInt {
        &self.a_r
    }

    #[inline]
    pub fn p_dash(&self) -> Word {
        self.p_dash
    }

    /// Limbs of p, least significant first.
    #[inline]
    pub fn p_words(&self) -> &[Word] {
        &self.p_words
    }

    /// Byte length of an encoded field element.
    #[inline]
    pub fn p_bytes(&self) -> usize {
        self.p_bytes
    }

    /// Reduce any (possibly negative) integer into [0, p).
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        reduce_mod(x, &self.p)
    }

    /// Add p until `x` is no longer negative.
    ///
    /// Subtraction chains in the group law can undershoot by more than one
    /// modulus, so a single correction is not enough.
    pub fn renormalize(&self, x: &mut BigInt) {
        while x.sign() == Sign::Minus {
            *x += &self.p;
        }
    }

    /// `a * b mod p`
    pub fn multiply(&self, a: &BigInt, b: &BigInt) -> BigInt {
        self.reduce(&(a * b))
    }

    /// `x^2 mod p`
    pub fn square(&self, x: &BigInt) -> BigInt {
        self.multiply(x, x)
    }

    /// `x^3 mod p`
    pub fn cube(&self, x: &BigInt) -> BigInt {
        self.multiply(x, &self.square(x))
    }

    /// Convert an ordinary integer into its Montgomery residue.
    pub fn to_monty(&self, x: &BigInt) -> BigInt {
        self.multiply(&self.r, x)
    }

    /// Convert a Montgomery residue back into an ordinary integer mod p.
    pub fn from_monty(&self, x: &BigInt) -> BigInt {
        self.multiply(&self.r_inv, x)
    }

    /// Right-hand side x^3 + a*x + b of the curve equation.
    pub fn rhs(&self, x: &BigInt) -> BigInt {
        self.reduce(&(self.cube(x) + self.multiply(&self.a, x) + &self.b))
    }
}

fn reduce_mod(x: &BigInt, p: &BigInt) -> BigInt {
    let mut r = x % p;
    while r.sign() == Sign::Minus {
        r += p;
    }
    r
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p && self.a == other.a && self.b == other.b
    }
}

impl Eq for Curve {}

impl TryFrom<CurveConfig> for Curve {
    type Error = CurveError;

    fn try_from(config: CurveConfig) -> Result<Self, CurveError> {
        Curve::new(config.p, config.a, config.b)
    }
}

impl From<Curve> for CurveConfig {
    fn from(curve: Curve) -> Self {
        CurveConfig {
            p: curve.p,
            a: curve.a,
            b: curve.b,
        }
    }
}
