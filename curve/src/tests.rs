use std::sync::Arc;
use std::thread;

use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::test_vectors::{p256, p256_generator, p256_multiples, toy, toy_generator, TOY_ORDER};

#[test]
fn test_toy_curve_scenario() {
    let curve = toy();
    let g = Projective::from_affine(&curve, &toy_generator());

    let bytes = encode_point(&g, PointFormat::Compressed).expect("encode");
    let decoded = decode_point(&bytes, &curve).expect("decode");
    assert_eq!(decoded, g);

    let mut ws = Workspace::new(&curve);
    let mut doubled = g.clone();
    doubled.mult2(&mut ws);
    let mut summed = g.clone();
    summed.add_assign_with(&g, &mut ws);
    assert_eq!(doubled, summed);

    let ng = &g * &BigInt::from(TOY_ORDER);
    assert!(ng.is_zero());
    assert_eq!(encode_point(&ng, PointFormat::Uncompressed).expect("encode"), [0x00]);
}

#[test]
fn test_decode_then_multiply() {
    let curve = p256();
    let g_bytes = encode_point(
        &Projective::from_affine(&curve, &p256_generator()),
        PointFormat::Compressed,
    )
    .expect("encode");

    let g = decode_point(&g_bytes, &curve).expect("decode");
    for (k, expected) in p256_multiples() {
        let kg = g.mul_scalar(&k);
        let encoded = encode_point(&kg, PointFormat::Hybrid).expect("encode");
        let round = decode_point(&encoded, &curve).expect("decode");
        assert_eq!(round.to_affine().expect("affine"), expected);
    }
}

#[test]
fn test_shared_curve_across_threads() {
    let curve = p256();
    let g = Projective::from_affine(&curve, &p256_generator());
    let expected = p256_multiples();

    let handles: Vec<_> = expected
        .into_iter()
        .map(|(k, affine)| {
            let g = g.clone();
            thread::spawn(move || {
                let mut ws = Workspace::new(g.curve());
                let mut p = g.clone();
                p.mul_scalar_assign(&k, &mut ws);
                p.to_affine().expect("affine") == affine
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
    assert_eq!(Arc::strong_count(&curve), 2);
}

#[test]
fn test_random_points_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    let curve = p256();
    for _ in 0..8 {
        let p = Projective::random(&curve, &mut rng);
        let k = random_below(&BigInt::from(u64::MAX), &mut rng);
        let q = &p * &k;
        for format in [
            PointFormat::Compressed,
            PointFormat::Uncompressed,
            PointFormat::Hybrid,
        ] {
            let bytes = encode_point(&q, format).expect("encode");
            assert_eq!(decode_point(&bytes, &curve).expect("decode"), q);
        }
    }
}

#[test]
fn test_point_serde_via_affine() {
    let curve = p256();
    let g = Projective::from_affine(&curve, &p256_generator());
    let affine = g.double().to_affine().expect("affine");

    let bytes = bincode::serialize(&affine).expect("serialize");
    let decoded: Affine = bincode::deserialize(&bytes).expect("deserialize");
    assert_eq!(Projective::from_affine(&curve, &decoded), g.double());
}

#[test]
fn test_curve_config_round_trip() {
    let curve = Arc::new(Curve::new(BigInt::from(23), BigInt::from(1), BigInt::from(1)).expect("curve"));
    let config = CurveConfig::from((*curve).clone());
    let rebuilt = Arc::new(Curve::try_from(config).expect("curve"));

    let g = Projective::from_affine(&curve, &toy_generator());
    let h = Projective::from_affine(&rebuilt, &toy_generator());
    assert_eq!(g, h);
    assert!((&g - &h).is_zero());
}
