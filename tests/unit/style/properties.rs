use super::*;

#[test]
fn empty_set_serializes_to_empty_object() {
    assert!(PropertySet::EMPTY.is_empty());
    assert_eq!(
        serde_json::to_string(&PropertySet::default()).unwrap(),
        "{}"
    );
}

#[test]
fn absent_properties_are_skipped_not_zeroed() {
    let set = PropertySet {
        opacity: Some(0.5),
        translate_x: Some(Length::Px(-100.0)),
        ..PropertySet::EMPTY
    };
    let v = serde_json::to_value(set).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj["opacity"], 0.5);
    assert_eq!(obj["translateX"]["px"], -100.0);
}

#[test]
fn merged_over_keeps_base_where_unset() {
    let base = PropertySet {
        opacity: Some(0.8),
        rotate: Some(5.0),
        ..PropertySet::EMPTY
    };
    let anim = PropertySet {
        opacity: Some(0.2),
        ..PropertySet::EMPTY
    };
    let merged = anim.merged_over(base);
    assert_eq!(merged.opacity, Some(0.2));
    assert_eq!(merged.rotate, Some(5.0));
}

#[test]
fn transform_css_orders_functions() {
    let set = PropertySet {
        translate_x: Some(Length::Percent(-50.0)),
        rotate: Some(90.0),
        ..PropertySet::EMPTY
    }
    .with_scale(0.5);
    assert_eq!(
        set.transform_css().as_deref(),
        Some("translateX(-50%) rotate(90deg) scale(0.5)")
    );
    assert_eq!(PropertySet::EMPTY.transform_css(), None);
}

#[test]
fn per_axis_scale_emits_separate_functions() {
    let set = PropertySet {
        scale_x: Some(0.75),
        ..PropertySet::EMPTY
    };
    assert_eq!(set.transform_css().as_deref(), Some("scaleX(0.75)"));
}

#[test]
fn filter_and_clip_css() {
    let set = PropertySet {
        blur: Some(4.0),
        brightness: Some(1.5),
        clip_inset: Some(ClipInset {
            right: 25.0,
            ..ClipInset::default()
        }),
        ..PropertySet::EMPTY
    };
    assert_eq!(
        set.filter_css().as_deref(),
        Some("blur(4px) brightness(1.5)")
    );
    assert_eq!(
        set.clip_path_css().as_deref(),
        Some("inset(0% 25% 0% 0%)")
    );
}

#[test]
fn to_affine_identity_and_percent_translation() {
    let size = Size::new(200.0, 100.0);
    assert_eq!(PropertySet::EMPTY.to_affine(size), Affine::IDENTITY);

    let set = PropertySet {
        translate_x: Some(Length::Percent(-50.0)),
        translate_y: Some(Length::Px(10.0)),
        ..PropertySet::EMPTY
    };
    let p = set.to_affine(size) * kurbo::Point::new(0.0, 0.0);
    assert!((p.x + 100.0).abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);
}

#[test]
fn to_affine_scales_around_centre() {
    let size = Size::new(100.0, 100.0);
    let set = PropertySet::EMPTY.with_scale(0.5);
    let centre = set.to_affine(size) * kurbo::Point::new(50.0, 50.0);
    assert!((centre.x - 50.0).abs() < 1e-9);
    assert!((centre.y - 50.0).abs() < 1e-9);
    let corner = set.to_affine(size) * kurbo::Point::new(0.0, 0.0);
    assert!((corner.x - 25.0).abs() < 1e-9);
}

#[test]
fn length_parses_numbers_and_strings() {
    let l: Length = serde_json::from_str("40").unwrap();
    assert_eq!(l, Length::Px(40.0));
    let l: Length = serde_json::from_str("\"40px\"").unwrap();
    assert_eq!(l, Length::Px(40.0));
    let l: Length = serde_json::from_str("\"50%\"").unwrap();
    assert_eq!(l, Length::Percent(50.0));
    let l: Length = serde_json::from_str("{\"percent\": 25}").unwrap();
    assert_eq!(l, Length::Percent(25.0));
    assert!(serde_json::from_str::<Length>("\"wide\"").is_err());
}

#[test]
fn length_sum_requires_matching_units() {
    assert_eq!(
        Length::Px(1.0).checked_add(Length::Px(2.0)),
        Some(Length::Px(3.0))
    );
    assert_eq!(Length::Px(1.0).checked_add(Length::Percent(2.0)), None);
}
