use std::sync::Arc;

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::encoding::decompress_point;
use crate::{Affine, Curve, Projective};

/// Uniform integer in `[0, bound)` by rejection sampling.
///
/// Returns zero when `bound` is not positive.
pub fn random_below<R: Rng + ?Sized>(bound: &BigInt, rng: &mut R) -> BigInt {
    if !bound.is_positive() {
        return BigInt::zero();
    }

    let bits = bound.bits();
    let len = ((bits + 7) / 8) as usize;
    let excess = (len as u64) * 8 - bits;
    let mut buf = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;
        let x = BigInt::from_bytes_be(Sign::Plus, &buf);
        if x < *bound {
            return x;
        }
    }
}

/// Helper trait for sampling random curve points.
pub trait RandomPoint: Sized {
    fn random<R: Rng + ?Sized>(curve: &Arc<Curve>, rng: &mut R) -> Self;
}

impl RandomPoint for Affine {
    fn random<R: Rng + ?Sized>(curve: &Arc<Curve>, rng: &mut R) -> Self {
        loop {
            let x = random_below(curve.p(), rng);
            let y_odd: bool = StandardUniform.sample(rng);
            if let Ok(y) = decompress_point(y_odd, &x, curve) {
                return Affine::new(x, y);
            }
        }
    }
}

impl RandomPoint for Projective {
    #[inline]
    fn random<R: Rng + ?Sized>(curve: &Arc<Curve>, rng: &mut R) -> Self {
        Projective::from_affine(curve, &Affine::random(curve, rng))
    }
}
