use super::*;

#[test]
fn even_dimensions_are_required() {
    assert!(check_even_dimensions(800, 800).is_ok());
    assert!(check_even_dimensions(801, 800).is_err());
    assert!(check_even_dimensions(800, 3).is_err());
    assert!(check_even_dimensions(0, 2).is_err());
}

#[test]
fn push_before_begin_is_an_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/never.mp4"));
    let frame = FrameBuffer {
        width: 2,
        height: 2,
        data: vec![0; 16],
    };
    let err = sink.push_frame(FrameIndex(0), &frame).unwrap_err();
    assert!(matches!(err, TurrellError::Encode(_)));
    assert!(sink.end().is_err());
}

#[test]
fn begin_rejects_odd_canvas_before_spawning() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/unit_ffmpeg/odd.mp4"));
    let err = sink
        .begin(SinkConfig {
            width: 15,
            height: 16,
            fps: Fps::new(30, 1).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, TurrellError::InvalidConfig(_)));
}
