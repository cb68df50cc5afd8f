use super::*;

#[test]
fn frame_range_iterates_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    let frames: Vec<_> = r.frames().collect();
    assert_eq!(frames, vec![FrameIndex(2), FrameIndex(3), FrameIndex(4)]);
    assert_eq!(frames.len() as u64, r.len_frames());
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
    assert_eq!(Fps::new(30, 1).unwrap().secs_to_frames_floor(10.0), 300);
    assert_eq!(fps.secs_to_frames_floor(-1.0), 0);
}

#[test]
fn frames_since_is_signed() {
    assert_eq!(FrameIndex(10).frames_since(FrameIndex(4)), 6.0);
    assert_eq!(FrameIndex(4).frames_since(FrameIndex(10)), -6.0);
}
