use crate::{Fq, Fr};
use ark_ff::{BigInteger, FftField, Field, PrimeField};
use ark_std::{str::FromStr, string::ToString, test_rng, UniformRand};

#[test]
fn test_moduli() {
    assert_eq!(
        Fq::MODULUS.to_string(),
        "21888242871839275222246405745257275088548364400416034343698204186575808495617"
    );
    assert_eq!(
        -Fq::from(1u64),
        Fq::from_str(
            "21888242871839275222246405745257275088548364400416034343698204186575808495616"
        )
        .unwrap()
    );
    assert_eq!(Fq::MODULUS_BIT_SIZE, 254);
    assert_eq!(Fr::MODULUS_BIT_SIZE, 251);
    assert_eq!(Fq::TWO_ADICITY, 28);
    assert_eq!(Fr::TWO_ADICITY, 4);
}

#[test]
fn test_coefficient_residuosity() {
    // a must be a square and d a non-square for the addition law to be complete.
    assert!(Fq::from(168700u64).legendre().is_qr());
    assert!(Fq::from(168696u64).legendre().is_qnr());
}

#[test]
fn test_sqrt() {
    let mut rng = test_rng();
    for _ in 0..32 {
        let a = Fq::rand(&mut rng);
        let root = a.square().sqrt().unwrap();
        assert!(root == a || root == -a);
    }
}

#[test]
fn test_big_endian_bytes() {
    let q_minus_one = -Fq::from(1u64);
    let bytes = q_minus_one.into_bigint().to_bytes_be();
    assert_eq!(bytes.len(), 32);
    assert_eq!(Fq::from_be_bytes_mod_order(&bytes), q_minus_one);
    // Q itself reduces to zero.
    let q_bytes = Fq::MODULUS.to_bytes_be();
    assert_eq!(Fq::from_be_bytes_mod_order(&q_bytes), Fq::from(0u64));
}
