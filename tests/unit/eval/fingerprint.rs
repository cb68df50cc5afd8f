use super::*;

#[test]
fn equal_sets_share_a_fingerprint() {
    let a = PropertySet {
        opacity: Some(0.5),
        translate_x: Some(Length::Px(-12.0)),
        ..PropertySet::EMPTY
    };
    let b = PropertySet {
        translate_x: Some(Length::Px(-12.0)),
        opacity: Some(0.5),
        ..PropertySet::EMPTY
    };
    assert_eq!(fingerprint_properties(&a), fingerprint_properties(&b));
}

#[test]
fn absent_differs_from_zero() {
    let empty = PropertySet::EMPTY;
    let zero = PropertySet {
        opacity: Some(0.0),
        ..PropertySet::EMPTY
    };
    assert_ne!(fingerprint_properties(&empty), fingerprint_properties(&zero));
}

#[test]
fn unit_is_part_of_the_digest() {
    let px = PropertySet {
        translate_y: Some(Length::Px(10.0)),
        ..PropertySet::EMPTY
    };
    let pct = PropertySet {
        translate_y: Some(Length::Percent(10.0)),
        ..PropertySet::EMPTY
    };
    assert_ne!(fingerprint_properties(&px), fingerprint_properties(&pct));
}

#[test]
fn sequence_digest_depends_on_order_and_length() {
    let a = PropertySet::EMPTY.with_scale(1.0);
    let b = PropertySet::EMPTY.with_scale(2.0);
    let ab = fingerprint_sequence([&a, &b]);
    let ba = fingerprint_sequence([&b, &a]);
    let aba = fingerprint_sequence([&a, &b, &a]);
    assert_ne!(ab, ba);
    assert_ne!(ab, aba);
    assert_eq!(ab, fingerprint_sequence(vec![a, b].iter()));
}
