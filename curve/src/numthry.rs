//! Number theory over a prime modulus: inversion and square roots.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Map `x` into `[0, m)` and return the magnitude.
fn residue(x: &BigInt, m: &BigUint) -> BigUint {
    let m_signed = BigInt::from_biguint(Sign::Plus, m.clone());
    let mut r = x % &m_signed;
    if r.sign() == Sign::Minus {
        r += &m_signed;
    }
    r.magnitude().clone()
}

/// Multiplicative inverse of `x` modulo the prime `p`.
///
/// Uses Fermat's little theorem, so `p` must be prime. Returns `None` when
/// `x ≡ 0 (mod p)`.
pub fn inverse_mod(x: &BigInt, p: &BigInt) -> Option<BigInt> {
    let p_u = p.magnitude();
    let x = residue(x, p_u);
    if x.is_zero() {
        return None;
    }
    let exp = p_u - BigUint::from(2u32);
    Some(BigInt::from_biguint(Sign::Plus, x.modpow(&exp, p_u)))
}

/// Square root of `a` modulo the odd prime `p` (Tonelli–Shanks).
///
/// Returns `None` if `a` is a quadratic non-residue. Either root may be
/// returned; callers pick the parity they need.
pub fn ressol(a: &BigInt, p: &BigInt) -> Option<BigInt> {
    let p_u = p.magnitude();
    let a = residue(a, p_u);
    if a.is_zero() {
        return Some(BigInt::zero());
    }

    let one = BigUint::one();
    if *p_u == BigUint::from(2u32) {
        return Some(BigInt::from_biguint(Sign::Plus, a));
    }

    let p_minus_1 = p_u - &one;
    let half = &p_minus_1 >> 1usize;

    // Euler's criterion
    if a.modpow(&half, p_u) != one {
        return None;
    }

    // p ≡ 3 (mod 4)
    if p_u.bit(0) && p_u.bit(1) {
        let exp = (p_u + &one) >> 2usize;
        return Some(BigInt::from_biguint(Sign::Plus, a.modpow(&exp, p_u)));
    }

    let s = p_minus_1.trailing_zeros()? as usize;
    let q = &p_minus_1 >> s;

    let mut z = BigUint::from(2u32);
    while z.modpow(&half, p_u) != p_minus_1 {
        z += &one;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p_u);
    let mut t = a.modpow(&q, p_u);
    let mut r = a.modpow(&((&q + &one) >> 1usize), p_u);

    while t != one {
        let mut i = 0usize;
        let mut t2i = t.clone();
        while t2i != one {
            t2i = &t2i * &t2i % p_u;
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = &b * &b % p_u;
        }

        m = i;
        c = &b * &b % p_u;
        t = t * &c % p_u;
        r = r * &b % p_u;
    }

    Some(BigInt::from_biguint(Sign::Plus, r))
}
