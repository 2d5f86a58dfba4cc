//! Curves and known points shared by the unit tests.

use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::Num;

use crate::{Affine, Curve};

pub(crate) fn hex(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 16).unwrap()
}

fn small_curve(p: i64, a: i64, b: i64) -> Arc<Curve> {
    Arc::new(Curve::new(BigInt::from(p), BigInt::from(a), BigInt::from(b)).unwrap())
}

/// y^2 = x^3 + x + 1 over GF(23). Cyclic group of order 28.
pub(crate) fn toy() -> Arc<Curve> {
    small_curve(23, 1, 1)
}

pub(crate) const TOY_ORDER: u32 = 28;

/// (3, 10), a generator of the toy curve.
pub(crate) fn toy_generator() -> Affine {
    Affine::new(BigInt::from(3), BigInt::from(10))
}

/// y^2 = x^3 + 2x + 3 over GF(97). p = 1 mod 4.
pub(crate) fn curve97() -> Arc<Curve> {
    small_curve(97, 2, 3)
}

pub(crate) fn p256() -> Arc<Curve> {
    let p = hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    let a = &p - BigInt::from(3);
    let b = hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    Arc::new(Curve::new(p, a, b).unwrap())
}

pub(crate) fn p256_generator() -> Affine {
    Affine::new(
        hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    )
}

pub(crate) fn p256_order() -> BigInt {
    hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551")
}

/// Known multiples k*G on P-256.
pub(crate) fn p256_multiples() -> Vec<(BigInt, Affine)> {
    vec![
        (
            BigInt::from(2),
            Affine::new(
                hex("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978"),
                hex("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1"),
            ),
        ),
        (
            BigInt::from(3),
            Affine::new(
                hex("5ecbe4d1a6330a44c8f7ef951d4bf165e6c6b721efada985fb41661bc6e7fd6c"),
                hex("8734640c4998ff7e374b06ce1a64a2ecd82ab036384fb83d9a79b127a27d5032"),
            ),
        ),
        (
            BigInt::from(5),
            Affine::new(
                hex("51590b7a515140d2d784c85608668fdfef8c82fd1f5be52421554a0dc3d033ed"),
                hex("e0c17da8904a727d8ae1bf36bf8a79260d012f00d4d80888d1d0bb44fda16da4"),
            ),
        ),
        (
            BigInt::from(112233445566778899u64),
            Affine::new(
                hex("339150844ec15234807fe862a86be77977dbfb3ae3d96f4c22795513aeaab82f"),
                hex("b1c14ddfdc8ec1b2583f51e85a5eb3a155840f2034730e9b5ada38b674336a21"),
            ),
        ),
    ]
}

pub(crate) fn p224() -> Arc<Curve> {
    let p = hex("ffffffffffffffffffffffffffffffff000000000000000000000001");
    let a = &p - BigInt::from(3);
    let b = hex("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4");
    Arc::new(Curve::new(p, a, b).unwrap())
}

pub(crate) fn p224_generator() -> Affine {
    Affine::new(
        hex("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        hex("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    )
}

/// 2*G on P-224.
pub(crate) fn p224_double() -> Affine {
    Affine::new(
        hex("706a46dc76dcb76798e60e6d89474788d16dc18032d268fd1a704fa6"),
        hex("1c2b76a7bc25e7702a704fa986892849fca629487acf3709d2e4e8bb"),
    )
}
