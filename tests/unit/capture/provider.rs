use super::*;
use crate::capture::source::SourceState;
use crate::capture::still::StillImageProvider;
use crate::capture::synth::TestPatternProvider;
use crate::foundation::core::FrameSize;
use crate::foundation::error::CaptureError;

struct NeverAvailable;

impl CaptureProvider for NeverAvailable {
    fn name(&self) -> &'static str {
        "never"
    }
    fn is_available(&self) -> bool {
        false
    }
    fn open(
        &self,
        _constraints: &CaptureConstraints,
    ) -> Result<Box<dyn FrameSource>, CaptureError> {
        unreachable!("probe must not open an unavailable provider")
    }
}

struct AlwaysBusy;

impl CaptureProvider for AlwaysBusy {
    fn name(&self) -> &'static str {
        "busy"
    }
    fn is_available(&self) -> bool {
        true
    }
    fn open(
        &self,
        _constraints: &CaptureConstraints,
    ) -> Result<Box<dyn FrameSource>, CaptureError> {
        Err(CaptureError::Busy("device claimed elsewhere".to_owned()))
    }
}

fn pattern() -> TestPatternProvider {
    TestPatternProvider {
        size: FrameSize::COMPACT,
        budget: None,
    }
}

#[test]
fn first_available_provider_wins() {
    let providers: Vec<Box<dyn CaptureProvider>> =
        vec![Box::new(NeverAvailable), Box::new(pattern())];
    let mut source = acquire_stream(&providers, &CaptureConstraints::default()).unwrap();
    assert_eq!(source.state(), SourceState::Playing);
    assert!(source.frame().is_ok());
}

#[test]
fn empty_or_exhausted_chain_is_unavailable() {
    let none: Vec<Box<dyn CaptureProvider>> = Vec::new();
    assert_eq!(
        acquire_stream(&none, &CaptureConstraints::default()).unwrap_err(),
        CaptureError::Unavailable
    );

    let unavailable: Vec<Box<dyn CaptureProvider>> = vec![Box::new(NeverAvailable)];
    assert_eq!(
        acquire_stream(&unavailable, &CaptureConstraints::default()).unwrap_err(),
        CaptureError::Unavailable
    );
}

#[test]
fn open_failures_are_not_retried_on_later_providers() {
    let providers: Vec<Box<dyn CaptureProvider>> =
        vec![Box::new(AlwaysBusy), Box::new(pattern())];
    let err = acquire_stream(&providers, &CaptureConstraints::default()).unwrap_err();
    assert!(matches!(err, CaptureError::Busy(_)));
}

#[test]
fn video_constraint_is_required() {
    let constraints = CaptureConstraints {
        video: false,
        audio: false,
    };
    let err = pattern().open(&constraints).unwrap_err();
    assert!(matches!(err, CaptureError::Denied(_)));
}

#[test]
fn still_image_provider_serves_the_decoded_file() {
    let dir = std::path::PathBuf::from("target").join("still_probe");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cap.png");

    let pixels = [1u8, 2, 3, 255].repeat(4);
    image::save_buffer_with_format(
        &path,
        &pixels,
        2,
        2,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .unwrap();

    let provider = StillImageProvider {
        path: path.clone(),
        budget: Some(1),
    };
    assert!(provider.is_available());

    let mut source = provider.open(&CaptureConstraints::default()).unwrap();
    let frame = source.frame().unwrap();
    assert_eq!((frame.width, frame.height), (2, 2));
    assert_eq!(frame.data, pixels);

    // The one-frame budget is spent.
    assert_eq!(source.state(), SourceState::Ended);

    let missing = StillImageProvider {
        path: dir.join("nope.png"),
        budget: None,
    };
    assert!(!missing.is_available());
}
