//! Group law and encoding property tests.

use std::sync::Arc;

use gfp_curve::{
    decode_point, decompress_point, encode_point, Affine, Curve, CurveError, PointFormat,
    Projective,
};
use num_bigint::{BigInt, Sign};
use num_traits::Num;
use proptest::prelude::*;

fn hex(s: &str) -> BigInt {
    BigInt::from_str_radix(s, 16).unwrap()
}

fn p256() -> Arc<Curve> {
    let p = hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");
    let a = &p - BigInt::from(3);
    let b = hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");
    Arc::new(Curve::new(p, a, b).unwrap())
}

fn generator(curve: &Arc<Curve>) -> Projective {
    let g = Affine::new(
        hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );
    Projective::from_affine(curve, &g)
}

fn toy() -> Arc<Curve> {
    Arc::new(Curve::new(BigInt::from(23), BigInt::from(1), BigInt::from(1)).unwrap())
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 16]>()) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &bytes)
    }
}

prop_compose! {
    fn point()(k in scalar()) -> Projective {
        generator(&p256()).mul_scalar(&k)
    }
}

prop_compose! {
    fn format()(i in 0usize..3) -> PointFormat {
        [PointFormat::Compressed, PointFormat::Uncompressed, PointFormat::Hybrid][i]
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn identity_is_neutral(p in point()) {
        let inf = Projective::identity(p.curve());
        prop_assert_eq!(&p + &inf, p.clone());
        prop_assert_eq!(&inf + &p, p);
    }

    #[test]
    fn inverse_sums_to_identity(p in point()) {
        prop_assert!((&p + &(-&p)).is_zero());
        prop_assert!((&p - &p).is_zero());
    }

    #[test]
    fn doubling_matches_addition(p in point()) {
        prop_assert_eq!(p.double(), &p + &p);
    }

    #[test]
    fn addition_commutes(p in point(), q in point()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn addition_associates(p in point(), q in point(), r in point()) {
        prop_assert_eq!(&(&p + &q) + &r, &p + &(&q + &r));
    }

    #[test]
    fn scalar_mul_distributes(k in 0u32..64, m in 0u32..64) {
        let g = generator(&p256());
        let lhs = &g.mul_scalar(&BigInt::from(k)) + &g.mul_scalar(&BigInt::from(m));
        prop_assert_eq!(lhs, g.mul_scalar(&BigInt::from(k + m)));
    }

    #[test]
    fn negative_scalar_negates(p in point(), k in scalar()) {
        prop_assert_eq!(p.mul_scalar(&-&k), -&p.mul_scalar(&k));
    }

    #[test]
    fn results_stay_on_curve(p in point(), k in scalar()) {
        prop_assert!((&p * &k).check_invariants().is_ok());
        prop_assert!(p.double().check_invariants().is_ok());
    }

    #[test]
    fn encode_round_trip(p in point(), format in format()) {
        let bytes = encode_point(&p, format).unwrap();
        let decoded = decode_point(&bytes, p.curve()).unwrap();
        prop_assert_eq!(decoded, p);
    }

    #[test]
    fn decompression_matches_parity(p in point()) {
        prop_assume!(!p.is_zero());
        let affine = p.to_affine().unwrap();
        let y = decompress_point(affine.y_is_odd(), &affine.x, p.curve()).unwrap();
        prop_assert_eq!(y, affine.y);
    }
}

proptest! {
    #[test]
    fn toy_decompression(x in 0i64..23, y_odd in any::<bool>()) {
        let curve = toy();
        let rhs = curve.rhs(&BigInt::from(x));
        let expected = (0i64..23).find(|&y| BigInt::from(y * y % 23) == rhs && (y % 2 == 1) == y_odd);

        let x = BigInt::from(x);
        match (decompress_point(y_odd, &x, &curve), expected) {
            (Ok(y), Some(root)) => {
                prop_assert_eq!(&y, &BigInt::from(root));
                prop_assert!(Affine::new(x, y).is_on_curve(&curve));
            }
            (Err(err), None) => prop_assert_eq!(err, CurveError::IllegalPoint),
            (got, want) => prop_assert!(false, "x = {}: got {:?}, want {:?}", x, got, want),
        }
    }

    #[test]
    fn toy_identity_encoding(format in format()) {
        let curve = toy();
        let inf = Projective::identity(&curve);
        let bytes = encode_point(&inf, format).unwrap();
        prop_assert_eq!(&bytes, &vec![0u8]);
        prop_assert!(decode_point(&bytes, &curve).unwrap().is_zero());
    }
}
