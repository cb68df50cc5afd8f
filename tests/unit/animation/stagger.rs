use super::*;
use crate::animation::kind::AnimationKind;

#[test]
fn delays_are_linear_in_index() {
    let plan = StaggerPlan::new(10, 4);
    let delays: Vec<u64> = (0..5).map(|i| plan.delay_for(i)).collect();
    assert_eq!(delays, vec![10, 14, 18, 22, 26]);
    for w in delays.windows(2) {
        assert_eq!(w[1] - w[0], 4);
    }
}

#[test]
fn delay_saturates_instead_of_wrapping() {
    assert_eq!(delay_for(usize::MAX, u64::MAX - 1, 2), u64::MAX);
    assert_eq!(delay_for(3, 0, u64::MAX), u64::MAX);
}

#[test]
fn config_for_overrides_template_delay() {
    let base = AnimationConfig::new(AnimationKind::FadeIn)
        .with_delay(99)
        .with_duration(12);
    let cfg = StaggerPlan::new(5, 3).config_for(2, &base);
    assert_eq!(cfg.delay, 11);
    assert_eq!(cfg.duration, 12);
    assert_eq!(cfg.kind, AnimationKind::FadeIn);
}

#[test]
fn configs_cover_every_item() {
    let base = AnimationConfig::new(AnimationKind::SlideInLeft);
    let cfgs = StaggerPlan::new(0, 2).configs(&base, 4);
    let delays: Vec<i64> = cfgs.iter().map(|c| c.delay).collect();
    assert_eq!(delays, vec![0, 2, 4, 6]);
    assert!(StaggerPlan::default().configs(&base, 0).is_empty());
}

#[test]
fn plan_deserializes_camel_case() {
    let plan: StaggerPlan =
        serde_json::from_str(r#"{"baseDelay": 8, "perItemIncrement": 3}"#).unwrap();
    assert_eq!(plan, StaggerPlan::new(8, 3));
}
