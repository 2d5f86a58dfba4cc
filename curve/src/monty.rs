//! Montgomery multiplication over the curve's base field.
//!
//! Residues are `num-bigint` integers in `[0, p)` holding `x·R mod p`. The
//! product is formed limb by limb in the workspace buffer of
//! `2·p_words + 1` words and reduced in place with REDC.

use core::cmp::Ordering;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::Curve;

pub(crate) type Word = u64;
type DoubleWord = u128;
const WORD_BITS: u32 = Word::BITS;

/// Computes `a + b * c + carry`, returning the low word and the new carry.
#[inline(always)]
const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let t = (a as DoubleWord) + (b as DoubleWord) * (c as DoubleWord) + (carry as DoubleWord);
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Computes `a + b + carry`.
#[inline(always)]
const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let t = (a as DoubleWord) + (b as DoubleWord) + (carry as DoubleWord);
    (t as Word, (t >> WORD_BITS) as Word)
}

/// Borrowing subtraction.
#[inline(always)]
const fn borrowing_sub(a: Word, b: Word, borrow: bool) -> (Word, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as Word);
    (diff, overflow1 || overflow2)
}

/// Little-endian limbs of the magnitude of `x`. Zero has no limbs.
pub(crate) fn to_words(x: &BigInt) -> Vec<Word> {
    x.magnitude().to_u64_digits()
}

/// Copy the limbs of `x` into `dst`, zero-filling the rest. Returns the limb count.
fn load_words(dst: &mut [Word], x: &BigInt) -> usize {
    dst.fill(0);
    let mut len = 0;
    for (d, w) in dst.iter_mut().zip(x.iter_u64_digits()) {
        *d = w;
        len += 1;
    }
    len
}

/// Non-negative integer from little-endian limbs, staged through `digits`.
fn words_to_bigint(words: &[Word], digits: &mut [u32]) -> BigInt {
    for (pair, &w) in digits.chunks_exact_mut(2).zip(words) {
        pair[0] = w as u32;
        pair[1] = (w >> 32) as u32;
    }
    BigInt::from_biguint(
        Sign::Plus,
        BigUint::from_slice(&digits[..2 * words.len()]),
    )
}

/// Word buffers for one Montgomery product.
///
/// Holds the REDC buffer of `2·p_words + 1` words, the limbs of both
/// operands and the digits of the result, so a product allocates nothing
/// beyond the integer it returns.
#[derive(Clone, Debug)]
pub struct MontyScratch {
    redc: Vec<Word>,
    lhs: Vec<Word>,
    rhs: Vec<Word>,
    digits: Vec<u32>,
}

impl MontyScratch {
    pub(crate) fn with_p_words(p_words: usize) -> Self {
        Self {
            redc: vec![0; 2 * p_words + 1],
            lhs: vec![0; p_words],
            rhs: vec![0; p_words],
            digits: vec![0; 2 * p_words],
        }
    }

    /// Length of the REDC buffer.
    #[inline]
    pub fn redc_len(&self) -> usize {
        self.redc.len()
    }

    /// Modulus width this scratch was sized for, `(redc_len - 1) / 2`.
    #[inline]
    fn p_size(&self) -> usize {
        (self.redc.len() - 1) / 2
    }
}

fn check_operand(curve: &Curve, x: &BigInt) {
    assert!(
        x.sign() != Sign::Minus && x < curve.p(),
        "Montgomery operand outside [0, p)"
    );
}

/// `-m0^{-1} mod 2^64` for odd `m0`.
pub(crate) fn monty_inverse(m0: Word) -> Word {
    debug_assert!(m0 & 1 == 1);
    // Newton iteration doubles the number of correct bits each round
    let mut x: Word = 1;
    for _ in 0..6 {
        x = x.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(x)));
    }
    x.wrapping_neg()
}

/// `z += x * y`, schoolbook. `z` must be zeroed and hold `x.len() + y.len()` words.
fn bigint_mul(z: &mut [Word], x: &[Word], y: &[Word]) {
    for (i, &xi) in x.iter().enumerate() {
        let mut carry = 0;
        for (j, &yj) in y.iter().enumerate() {
            let (lo, hi) = mac(z[i + j], xi, yj, carry);
            z[i + j] = lo;
            carry = hi;
        }
        z[i + y.len()] = carry;
    }
}

/// `z = x^2`, computing each cross product once. `z` must be zeroed.
fn bigint_sqr(z: &mut [Word], x: &[Word]) {
    let n = x.len();

    for i in 0..n {
        let mut carry = 0;
        for j in (i + 1)..n {
            let (lo, hi) = mac(z[i + j], x[i], x[j], carry);
            z[i + j] = lo;
            carry = hi;
        }
        z[i + n] = carry;
    }

    let mut top = 0;
    for w in z[..2 * n].iter_mut() {
        let next = *w >> (WORD_BITS - 1);
        *w = (*w << 1) | top;
        top = next;
    }

    let mut carry = 0;
    for (i, &xi) in x.iter().enumerate() {
        let sq = (xi as DoubleWord) * (xi as DoubleWord);
        let (lo, c) = adc(z[2 * i], sq as Word, carry);
        z[2 * i] = lo;
        let (hi, c) = adc(z[2 * i + 1], (sq >> WORD_BITS) as Word, c);
        z[2 * i + 1] = hi;
        carry = c;
    }
    debug_assert_eq!(carry, 0);
}

/// Compare the `p.len() + 1` words of `t` against `p`.
fn cmp_with_modulus(t: &[Word], p: &[Word]) -> Ordering {
    if t[p.len()] != 0 {
        return Ordering::Greater;
    }
    for (a, b) in t[..p.len()].iter().rev().zip(p.iter().rev()) {
        match a.cmp(b) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Montgomery reduction of the double-width value in `z`.
///
/// On return `z[p.len()..2 * p.len()]` holds `z·R⁻¹ mod p`, fully reduced.
fn monty_redc(z: &mut [Word], p: &[Word], p_dash: Word) {
    let n = p.len();
    debug_assert!(z.len() >= 2 * n + 1);

    for i in 0..n {
        let u = z[i].wrapping_mul(p_dash);

        let mut carry = 0;
        for (j, &pj) in p.iter().enumerate() {
            let (lo, hi) = mac(z[i + j], u, pj, carry);
            z[i + j] = lo;
            carry = hi;
        }

        let mut k = i + n;
        while carry != 0 && k < z.len() {
            let (lo, c) = adc(z[k], carry, 0);
            z[k] = lo;
            carry = c;
            k += 1;
        }
    }

    let hi = &mut z[n..];
    if cmp_with_modulus(hi, p) != Ordering::Less {
        let mut borrow = false;
        for (w, &pj) in hi.iter_mut().zip(p.iter()) {
            let (d, b) = borrowing_sub(*w, pj, borrow);
            *w = d;
            borrow = b;
        }
        hi[n] = hi[n].wrapping_sub(borrow as Word);
    }
    debug_assert_eq!(hi[n], 0);
}

/// Montgomery product `a·b·R⁻¹ mod p` of two residues.
///
/// Operands narrower than `p` are zero-extended. The scratch buffers are
/// overwritten and carry nothing between calls.
///
/// # Panics
///
/// If either operand lies outside `[0, p)`, or if `scratch` was sized for a
/// modulus of a different width.
pub fn monty_mul(curve: &Curve, a: &BigInt, b: &BigInt, scratch: &mut MontyScratch) -> BigInt {
    check_operand(curve, a);
    check_operand(curve, b);
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    let p = curve.p_words();
    let p_size = scratch.p_size();
    assert_eq!(p_size, p.len(), "workspace sized for another modulus");

    let a_len = load_words(&mut scratch.lhs, a);
    let b_len = load_words(&mut scratch.rhs, b);

    scratch.redc.fill(0);
    bigint_mul(&mut scratch.redc, &scratch.lhs[..a_len], &scratch.rhs[..b_len]);
    monty_redc(&mut scratch.redc, p, curve.p_dash());

    words_to_bigint(&scratch.redc[p_size..2 * p_size], &mut scratch.digits)
}

/// Montgomery square `a·a·R⁻¹ mod p`; identical to `monty_mul(a, a)`.
///
/// # Panics
///
/// Under the same conditions as [`monty_mul`].
pub fn monty_sqr(curve: &Curve, a: &BigInt, scratch: &mut MontyScratch) -> BigInt {
    check_operand(curve, a);
    if a.is_zero() {
        return BigInt::zero();
    }

    let p = curve.p_words();
    let p_size = scratch.p_size();
    assert_eq!(p_size, p.len(), "workspace sized for another modulus");

    let a_len = load_words(&mut scratch.lhs, a);

    scratch.redc.fill(0);
    bigint_sqr(&mut scratch.redc, &scratch.lhs[..a_len]);
    monty_redc(&mut scratch.redc, p, curve.p_dash());

    words_to_bigint(&scratch.redc[p_size..2 * p_size], &mut scratch.digits)
}
