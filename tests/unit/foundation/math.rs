use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"motion");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_u8(b'm');
    b.write_bytes(b"otion");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn fnv_distinguishes_float_bits() {
    let mut a = Fnv1a64::new_default();
    a.write_f64(0.0);
    let mut b = Fnv1a64::new_default();
    b.write_f64(-0.0);
    assert_ne!(a.finish(), b.finish());
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_signed_samples_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_signed();
        assert!((-1.0..1.0).contains(&v));
    }
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}
