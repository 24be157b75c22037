#![no_main]
use ciborium::de;
use k256_reference::{AffinePoint, FieldElement, ORDER, num_bigint::BigUint};
use libfuzzer_sys::fuzz_target;
use std::sync::atomic::{AtomicU64, Ordering};

static I: AtomicU64 = AtomicU64::new(0);

fn test_group_law(p1: &AffinePoint, p2: &AffinePoint) {
    let sum = p1.add(p2).unwrap();

    // Addition and doubling agree
    assert_eq!(p1.double().unwrap(), p1.add(p1).unwrap());

    // Negation
    assert!(sum.add(&-&sum).unwrap().is_identity());
    assert_eq!(sum.sub(p2).unwrap(), *p1);
}

fn test_scalar_mul(p1: &AffinePoint, s: &BigUint) {
    let scalar_mul = p1.mul(s).unwrap();

    // Scalar multiplication distributes
    assert_eq!(
        scalar_mul.add(&scalar_mul).unwrap(),
        p1.mul(&(s + s)).unwrap()
    );
    assert!(p1.mul(&ORDER).unwrap().is_identity());
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let g = AffinePoint::generator();

    // Raw coordinates are almost never on the curve; those fall back to 2G
    let x = de::from_reader(&data[32..32 + usize::from(data[2] & 0x3f)])
        .unwrap_or_else(|_| FieldElement::from(u64::from(data[3])));
    let y = FieldElement::from_bytes(data[64..96].try_into().unwrap())
        .unwrap_or_else(|_| FieldElement::one());
    let p2 = AffinePoint::new(x, y).unwrap_or_else(|_| g.double().unwrap());

    test_group_law(&g, &p2);

    // Scalar multiplication is slow, so only run it on every 7th input
    if I.fetch_add(1, Ordering::Relaxed) % 7 != 0 {
        return;
    }

    let k1 = BigUint::from_bytes_be(&data[0..32]);
    let p1 = g.mul(&k1).unwrap();
    let scalar = BigUint::from_bytes_be(&data[96..128]);

    test_group_law(&p1, &p2);
    test_scalar_mul(&p1, &scalar);
});
