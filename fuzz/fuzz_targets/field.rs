#![no_main]
use ciborium::de;
use k256_reference::FieldElement;
use libfuzzer_sys::fuzz_target;

fn test_field(fe1: &FieldElement, fe2: &FieldElement, fe3: &FieldElement) {
    let zero = FieldElement::zero();
    let one = FieldElement::one();

    // Associativity
    assert_eq!(fe1 + &(fe2 + fe3), &(fe1 + fe2) + fe3);
    assert_eq!(fe1 * &(fe2 * fe3), &(fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + &zero, *fe1);
    assert_eq!(fe1 * &one, *fe1);
    assert_eq!(fe1 - fe1, zero);

    // Distributivity
    assert_eq!(fe1 * &(fe2 + fe3), &(fe1 * fe2) + &(fe1 * fe3));

    // Inverse, division, sqrt
    assert_eq!(fe1 + &fe1.negate(), zero);
    let fe1_sq = fe1.square();
    if !fe1.is_zero() {
        let cube = &fe1_sq * fe1;
        assert_eq!(cube.div(&fe1_sq).unwrap(), *fe1);
        assert_eq!(fe1.invert().unwrap(), fe1.pow(-1).unwrap());
        assert_eq!(fe1_sq.sqrt().unwrap().square(), fe1_sq);
    }

    // Lazy fractions keep their value through normalization
    let mixed = fe1.div(fe2).unwrap_or_else(|_| fe1.clone());
    let normal = mixed.normalize();
    assert!(normal.is_normalized());
    assert_eq!(normal, mixed);
    assert_eq!(normal.to_bytes(), mixed.to_bytes());

    let fe1_double = fe1.double();
    assert_eq!(fe1_double, fe1 + fe1);
    assert_ne!(fe1_double.is_odd(), fe1_double.is_even());
}

fn test_small_field(data: &[u8]) {
    // 65521 is the largest prime below 2^16
    const PRIME: u64 = 65_521;
    let pick = |i: usize| u64::from(u16::from_le_bytes([data[i], data[i + 1]])) % PRIME;

    let a = primefield::FieldElement::new(pick(0), PRIME).unwrap();
    let b = primefield::FieldElement::new(pick(2), PRIME).unwrap();
    let exp = i64::from(i16::from_le_bytes([data[4], data[5]]));

    assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
    if !b.is_zero() {
        assert_eq!(a.div(&b).unwrap().mul(&b).unwrap(), a);
    }
    if !a.is_zero() {
        assert_eq!(
            a.pow(exp).unwrap().mul(&a.pow(-exp).unwrap()).unwrap().num(),
            1
        );
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let fe1 = FieldElement::from_bytes(data[0..32].try_into().unwrap())
        .unwrap_or_else(|_| FieldElement::from(u64::from(data[0])));

    let fe2 = de::from_reader(&data[32..32 + usize::from(data[1] & 0x3f)])
        .unwrap_or_else(|_| FieldElement::one());

    let num = u128::from_le_bytes(data[64..80].try_into().unwrap());
    let den = u128::from_le_bytes(data[80..96].try_into().unwrap());
    let fe3 = FieldElement::new(num, den).unwrap_or_else(|_| FieldElement::from(7u64));

    test_field(&fe1, &fe2, &fe3);
    test_small_field(&data[96..]);
});
