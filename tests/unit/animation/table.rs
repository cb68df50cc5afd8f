use super::*;

fn at(kind: AnimationKind, p: f64) -> PropertySet {
    apply(kind, p, &CustomParams::default())
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn every_named_kind_has_a_formula() {
    for kind in AnimationKind::all() {
        let has = formula_for(kind).is_some();
        assert_eq!(has, !kind.is_inert(), "{kind:?}");
    }
}

#[test]
fn inert_kinds_are_empty() {
    assert!(at(AnimationKind::None, 0.5).is_empty());
    assert!(at(AnimationKind::Unknown, 0.5).is_empty());
}

#[test]
fn fades_are_complementary() {
    for i in 0..=10 {
        let p = f64::from(i) / 10.0;
        let a = at(AnimationKind::FadeIn, p).opacity.unwrap();
        let b = at(AnimationKind::FadeOut, p).opacity.unwrap();
        assert!(approx(a + b, 1.0));
    }
}

#[test]
fn slides_use_full_extent_by_default() {
    assert_eq!(
        at(AnimationKind::SlideInLeft, 0.0).translate_x,
        Some(Length::Percent(-100.0))
    );
    assert_eq!(
        at(AnimationKind::SlideInLeft, 1.0).translate_x,
        Some(Length::Percent(0.0))
    );
    assert_eq!(
        at(AnimationKind::SlideOutBottom, 1.0).translate_y,
        Some(Length::Percent(100.0))
    );
    assert_eq!(
        at(AnimationKind::SlideInTop, 0.5).translate_y,
        Some(Length::Percent(-50.0))
    );
}

#[test]
fn slide_distance_override_keeps_unit() {
    let custom = CustomParams {
        distance: Some(Length::Px(100.0)),
        ..CustomParams::default()
    };
    let p = apply(AnimationKind::SlideInRight, 0.25, &custom);
    assert_eq!(p.translate_x, Some(Length::Px(75.0)));
}

#[test]
fn settled_entries_are_identity_like() {
    use AnimationKind as K;
    for kind in [K::ScaleIn, K::ZoomIn, K::PopIn, K::BounceIn, K::SpringIn] {
        let p = at(kind, 1.0);
        assert!(approx(p.scale_x.unwrap(), 1.0), "{kind:?}");
        assert!(approx(p.scale_y.unwrap(), 1.0), "{kind:?}");
    }
    assert!(approx(at(K::RotateIn, 1.0).rotate.unwrap(), 0.0));
    assert!(approx(at(K::FlipInY, 1.0).rotate3d.unwrap().angle, 0.0));
    assert!(approx(at(K::BlurIn, 1.0).blur.unwrap(), 0.0));
}

#[test]
fn per_axis_scale_sets_one_axis() {
    let x = at(AnimationKind::ScaleInX, 0.0);
    assert_eq!(x.scale_x, Some(0.5));
    assert_eq!(x.scale_y, None);
    let y = at(AnimationKind::ScaleOutY, 1.0);
    assert_eq!(y.scale_x, None);
    assert_eq!(y.scale_y, Some(0.5));
}

#[test]
fn reveal_uncovers_named_edge() {
    let start = at(AnimationKind::RevealLeft, 0.0).clip_inset.unwrap();
    assert_eq!(start.left, 100.0);
    assert_eq!(start.right, 0.0);
    let mid = at(AnimationKind::CollapseTop, 0.25).clip_inset.unwrap();
    assert_eq!(mid.top, 25.0);
    assert_eq!(mid.bottom, 0.0);
}

#[test]
fn rotate_in_starts_counter_clockwise() {
    assert!(approx(at(AnimationKind::RotateIn, 0.0).rotate.unwrap(), -90.0));
    assert!(approx(at(AnimationKind::RotateOut, 1.0).rotate.unwrap(), 90.0));
}

#[test]
fn spring_out_never_goes_negative() {
    let p = at(AnimationKind::SpringOut, 1.2);
    assert_eq!(p.scale_x, Some(0.0));
}

#[test]
fn spring_pop_clamps_opacity_under_overshoot() {
    let p = at(AnimationKind::SpringPop, 1.15);
    assert_eq!(p.opacity, Some(1.0));
    assert!(approx(p.scale_x.unwrap(), 1.15));
}

#[test]
fn oscillating_kinds_rest_at_both_ends() {
    use AnimationKind as K;
    for kind in [K::SpringWobble, K::Swing, K::Shake] {
        let start = at(kind, 0.0);
        let end = at(kind, 1.0);
        for p in [start, end] {
            let r = p.rotate.or(p.rotate3d.map(|r| r.angle)).unwrap_or(0.0);
            let tx = p.translate_x.map_or(0.0, Length::value);
            assert!(r.abs() < 1e-9, "{kind:?}");
            assert!(tx.abs() < 1e-9, "{kind:?}");
        }
    }
    assert!(approx(at(K::Pulse, 0.0).scale_x.unwrap(), 1.0));
    assert!(approx(at(K::Pulse, 1.0).scale_x.unwrap(), 1.0));
    assert!(at(K::Pulse, 0.5).scale_x.unwrap() > 1.0);
}

#[test]
fn pop_in_peaks_before_settling() {
    let peak = at(AnimationKind::PopIn, 0.7).scale_x.unwrap();
    assert!(approx(peak, 1.1));
    assert_eq!(at(AnimationKind::PopIn, 0.5).opacity, Some(1.0));
}

#[test]
fn glitch_is_deterministic_and_resolves() {
    let custom = CustomParams {
        seed: Some(7),
        ..CustomParams::default()
    };
    let a = apply_seeded(AnimationKind::Glitch, 0.3, &custom, 99);
    let b = apply_seeded(AnimationKind::Glitch, 0.3, &custom, 99);
    assert_eq!(a, b);
    let c = apply_seeded(AnimationKind::Glitch, 0.3, &custom, 100);
    assert_ne!(a, c);

    let done = apply_seeded(AnimationKind::Glitch, 1.0, &custom, 5);
    assert_eq!(done.opacity, Some(1.0));
    assert_eq!(done.translate_x, Some(Length::Px(0.0)));
    assert_eq!(done.brightness, Some(1.0));
}

#[test]
fn glitch_jitter_stays_within_amplitude() {
    for seed in 0..64u64 {
        let p = apply_seeded(AnimationKind::Glitch, 0.0, &CustomParams::default(), seed);
        assert!(p.translate_x.unwrap().value().abs() <= 20.0);
        assert!(p.translate_y.unwrap().value().abs() <= 6.0);
        let o = p.opacity.unwrap();
        assert!((0.0..=1.0).contains(&o));
    }
}

#[test]
fn fade_slides_move_opposite_ways() {
    let up = at(AnimationKind::FadeSlideUp, 0.0);
    let down = at(AnimationKind::FadeSlideDown, 0.0);
    assert_eq!(up.translate_y, Some(Length::Px(40.0)));
    assert_eq!(down.translate_y, Some(Length::Px(-40.0)));
    assert_eq!(up.opacity, Some(0.0));
}

#[test]
fn zoom_perspective_lands_flat() {
    let p = at(AnimationKind::ZoomPerspective, 1.0);
    assert_eq!(p.opacity, Some(1.0));
    assert!(approx(p.rotate3d.unwrap().angle, 0.0));
    assert_eq!(p.perspective, Some(1000.0));
}
