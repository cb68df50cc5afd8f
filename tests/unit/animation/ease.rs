use super::*;

const ALL_NAMED: [Ease; 16] = [
    Ease::Linear,
    Ease::Ease,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InBack,
    Ease::OutBack,
    Ease::InOutBack,
    Ease::ElasticOut,
    Ease::BounceOut,
];

fn overshoots(e: Ease) -> bool {
    matches!(
        e,
        Ease::InBack | Ease::OutBack | Ease::InOutBack | Ease::ElasticOut
    )
}

#[test]
fn endpoints_are_fixed() {
    for e in ALL_NAMED {
        assert!(e.apply(0.0).abs() < 1e-9, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?} at 1");
    }
}

#[test]
fn inputs_outside_unit_interval_are_clamped() {
    for e in ALL_NAMED {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(7.0), e.apply(1.0));
    }
}

#[test]
fn non_overshoot_curves_stay_bounded() {
    for e in ALL_NAMED.into_iter().filter(|e| !overshoots(*e)) {
        for i in 0..=200 {
            let v = e.apply(i as f64 / 200.0);
            assert!((-1e-9..=1.0 + 1e-9).contains(&v), "{e:?} out of range");
        }
    }
}

#[test]
fn smooth_curves_are_monotone() {
    let smooth = ALL_NAMED
        .into_iter()
        .filter(|e| !overshoots(*e) && *e != Ease::BounceOut);
    for e in smooth {
        let mut prev = e.apply(0.0);
        for i in 1..=200 {
            let v = e.apply(i as f64 / 200.0);
            assert!(v + 1e-9 >= prev, "{e:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn back_curves_overshoot() {
    assert!(Ease::OutBack.apply(0.7) > 1.0);
    assert!(Ease::InBack.apply(0.2) < 0.0);
}

#[test]
fn css_keywords_match_reference_points() {
    // Midpoint of ease-in-out is symmetric.
    assert!((Ease::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    // CSS `ease` is well ahead of linear at the midpoint (~0.8024).
    assert!((Ease::Ease.apply(0.5) - 0.8024).abs() < 1e-3);
}

#[test]
fn cubic_bezier_linear_control_points_is_identity() {
    let e = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        assert!((e.apply(t) - t).abs() < 1e-6);
    }
}

#[test]
fn names_parse_leniently() {
    assert_eq!(Ease::from_name("ease-in-out"), Some(Ease::EaseInOut));
    assert_eq!(Ease::from_name("easeInOut"), Some(Ease::EaseInOut));
    assert_eq!(Ease::from_name("EASE_OUT"), Some(Ease::EaseOut));
    assert_eq!(Ease::from_name("easeOutCubic"), Some(Ease::OutCubic));
    assert_eq!(Ease::from_name("inOutQuad"), Some(Ease::InOutQuad));
    assert_eq!(Ease::from_name("ease"), Some(Ease::Ease));
    assert_eq!(Ease::from_name("wobbly"), None);
    assert_eq!(Ease::from_name_lenient("wobbly"), Ease::Linear);
}

#[test]
fn serde_accepts_names_and_bezier_objects() {
    let e: Ease = serde_json::from_str("\"easeOutBack\"").unwrap();
    assert_eq!(e, Ease::OutBack);
    let e: Ease = serde_json::from_str("\"not-a-curve\"").unwrap();
    assert_eq!(e, Ease::Linear);
    let e: Ease = serde_json::from_str("{\"cubic_bezier\": [0.25, 0.1, 0.25, 1.0]}").unwrap();
    assert!(matches!(e, Ease::CubicBezier { .. }));
    assert_eq!(serde_json::to_string(&Ease::EaseIn).unwrap(), "\"ease-in\"");
}
