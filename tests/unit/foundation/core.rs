use super::*;

#[test]
fn rejects_zero_dimensions() {
    assert!(FrameSize::new(0, 480).is_err());
    assert!(FrameSize::new(640, 0).is_err());
    assert_eq!(FrameSize::new(640, 480).unwrap(), FrameSize::DEFAULT);
}

#[test]
fn serde_round_trip() {
    let size: FrameSize = serde_json::from_str(r#"{"width":320,"height":160}"#).unwrap();
    assert_eq!(size, FrameSize::COMPACT);
    assert_eq!(
        serde_json::to_string(&size).unwrap(),
        r#"{"width":320,"height":160}"#
    );
}
