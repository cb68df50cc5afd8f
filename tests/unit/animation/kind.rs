use super::*;

#[test]
fn names_roundtrip_for_every_kind() {
    for kind in AnimationKind::all() {
        assert_eq!(AnimationKind::from_name(kind.name()), Some(kind));
    }
}

#[test]
fn table_is_large_and_unique() {
    let kinds: Vec<_> = AnimationKind::all().collect();
    assert!(kinds.len() >= 40);
    for (i, a) in kinds.iter().enumerate() {
        assert!(!kinds[i + 1..].contains(a), "{a:?} listed twice");
    }
    assert!(!kinds.contains(&AnimationKind::Unknown));
}

#[test]
fn parsing_is_case_and_separator_insensitive() {
    assert_eq!(
        AnimationKind::from_name("slide-in-left"),
        Some(AnimationKind::SlideInLeft)
    );
    assert_eq!(
        AnimationKind::from_name("FADE_OUT"),
        Some(AnimationKind::FadeOut)
    );
    assert_eq!(AnimationKind::from_name("doesNotExist"), None);
}

#[test]
fn unknown_names_deserialize_to_unknown() {
    let k: AnimationKind = serde_json::from_str("\"doesNotExist\"").unwrap();
    assert_eq!(k, AnimationKind::Unknown);
    assert!(k.is_inert());
    assert_eq!(k.name(), "unknown");
}

#[test]
fn spring_family_is_exactly_the_spring_kinds() {
    for kind in AnimationKind::all() {
        assert_eq!(kind.is_spring_driven(), kind.name().starts_with("spring"));
    }
}
