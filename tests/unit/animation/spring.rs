use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn rejects_degenerate_params() {
    assert!(SpringParams::new(100.0, 10.0, 0.0).is_err());
    assert!(SpringParams::new(-1.0, 10.0, 1.0).is_err());
    assert!(SpringParams::new(100.0, 0.0, 1.0).is_err());
    assert!(SpringParams::new(f64::NAN, 10.0, 1.0).is_err());
    assert!(SpringParams::new(100.0, f64::INFINITY, 1.0).is_err());
    assert!(matches!(
        SpringParams::new(100.0, 10.0, 0.0),
        Err(MotionError::Spring(_))
    ));
}

#[test]
fn rejects_params_whose_derived_ratios_degenerate() {
    // k * m underflows to 0, so the damping ratio is infinite.
    let err = SpringParams::new(1e-200, 1.0, 1e-200).unwrap_err();
    assert!(matches!(err, MotionError::Spring(_)));
    assert!(err.to_string().contains("damping ratio"), "{err}");
    // k / m overflows.
    assert!(SpringParams::new(1e300, 10.0, 1e-300).is_err());
}

#[test]
fn heavily_overdamped_spring_stays_finite_and_creeps_forward() {
    let p = SpringParams::new(1.0, 1e300, 1.0).unwrap();
    assert!(p.damping_ratio().is_finite());
    for f in [1, 10, 1_000, 1_000_000] {
        let v = spring_progress(FrameIndex(f), FrameIndex(0), p, fps30());
        assert!(v.is_finite(), "frame {f}: {v}");
        assert!((0.0..=1.0).contains(&v), "frame {f}: {v}");
    }

    // zeta = 1e4: the slow root is about w0 / (2 zeta).
    let p = SpringParams::new(1.0, 2e4, 1.0).unwrap();
    let secs = 1e4;
    let expected = 1.0 - (-secs / 2e4_f64).exp();
    assert!((p.position(secs) - expected).abs() < 1e-6);
    assert!(p.position(secs) > 0.0);
}

#[test]
fn zero_before_start() {
    let p = SpringParams::DEFAULT;
    assert_eq!(spring_progress(FrameIndex(3), FrameIndex(10), p, fps30()), 0.0);
    assert_eq!(spring_progress(FrameIndex(10), FrameIndex(10), p, fps30()), 0.0);
}

#[test]
fn converges_for_all_damping_regimes() {
    // under-, critically and over-damped (zeta ~ 0.5, 1.0, 2.0)
    for damping in [10.0, 20.0, 40.0] {
        let p = SpringParams::new(100.0, damping, 1.0).unwrap();
        let settle = p.settle_frames(fps30(), 1e-4);
        for f in settle..settle + 120 {
            let v = spring_progress(FrameIndex(f), FrameIndex(0), p, fps30());
            assert!((v - 1.0).abs() < 1e-4, "damping {damping} frame {f}: {v}");
        }
    }
}

#[test]
fn underdamped_overshoots_unless_clamped() {
    let p = SpringParams::new(200.0, 5.0, 1.0).unwrap();
    let peak = (0..120)
        .map(|f| spring_progress(FrameIndex(f), FrameIndex(0), p, fps30()))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);

    let clamped = p.with_overshoot_clamping(true);
    let peak = (0..120)
        .map(|f| spring_progress(FrameIndex(f), FrameIndex(0), clamped, fps30()))
        .fold(f64::MIN, f64::max);
    assert!(peak <= 1.0);
}

#[test]
fn overdamped_is_monotone() {
    let p = SpringParams::new(100.0, 60.0, 1.0).unwrap();
    let mut prev = 0.0;
    for f in 0..200 {
        let v = spring_progress(FrameIndex(f), FrameIndex(0), p, fps30());
        assert!(v + 1e-12 >= prev);
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
}

#[test]
fn envelope_bounds_the_error() {
    let p = SpringParams::new(170.0, 8.0, 1.3).unwrap();
    for f in 0..300 {
        let secs = fps30().frames_to_secs(f);
        assert!((1.0 - p.position(secs)).abs() <= p.envelope(secs) + 1e-12);
    }
}

#[test]
fn deserializes_with_defaults_and_validation() {
    let p: SpringParams = serde_json::from_str("{\"stiffness\": 200}").unwrap();
    assert_eq!(p.stiffness(), 200.0);
    assert_eq!(p.damping(), 10.0);
    assert_eq!(p.mass(), 1.0);
    let p: SpringParams = serde_json::from_str("{\"overshootClamping\": true}").unwrap();
    assert!(p.overshoot_clamping());
    assert!(serde_json::from_str::<SpringParams>("{\"mass\": 0}").is_err());
}
