use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::color::Rgb8;
use crate::scene::config::SceneConfig;

struct Solid(Rgb8);

impl ColorSource for Solid {
    fn next_color(&mut self) -> Rgb8 {
        self.0
    }
}

fn small_scene(seed: Option<u64>) -> Scene {
    SceneConfig {
        width: 48,
        height: 48,
        fps: 10,
        frames: 12,
        seed,
        ..SceneConfig::default()
    }
    .validate()
    .unwrap()
}

#[test]
fn still_is_the_gradient_field() {
    let session = RenderSession::with_colors(small_scene(None), Solid(Rgb8::new(1, 1, 1)));
    let still = session.still();
    assert_eq!(still.rgb(24, 24), Rgb8::new(0, 174, 201));
    assert_eq!(still.rgb(0, 0), Rgb8::new(220, 220, 220));
    assert!(session.state().rings().is_empty());
}

#[test]
fn render_at_spawns_and_rejects_backwards_time() {
    let mut session = RenderSession::with_colors(small_scene(None), Solid(Rgb8::new(255, 0, 0)));
    session.render_at(0.0).unwrap();
    assert_eq!(session.state().rings().len(), 1);

    session.render_at(2500.0).unwrap();
    assert_eq!(session.state().rings().len(), 2);

    let err = session.render_at(100.0).unwrap_err();
    assert!(matches!(err, TurrellError::InvalidConfig(_)));
    assert!(session.render_at(f64::NAN).is_err());
}

#[test]
fn render_range_pushes_frames_in_order() {
    let mut session = RenderSession::with_colors(small_scene(None), Solid(Rgb8::new(0, 255, 0)));
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(3), FrameIndex(7)).unwrap();
    let stats = session.render_range(range, &mut sink).unwrap();

    assert_eq!(stats.frames_rendered, 4);
    assert_eq!(stats.frames_skipped, 3);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height), (48, 48));
    let idxs: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idxs, vec![3, 4, 5, 6]);
}

#[test]
fn render_range_replays_history() {
    let full = {
        let mut session = RenderSession::new(small_scene(Some(11)));
        let mut sink = InMemorySink::new();
        session.render_all(&mut sink).unwrap();
        sink.frames().to_vec()
    };
    assert_eq!(full.len(), 12);

    let tail = {
        let mut session = RenderSession::new(small_scene(Some(11)));
        let mut sink = InMemorySink::new();
        let range = FrameRange::new(FrameIndex(8), FrameIndex(12)).unwrap();
        session.render_range(range, &mut sink).unwrap();
        sink.frames().to_vec()
    };
    assert_eq!(tail.as_slice(), &full[8..]);
}

#[test]
fn empty_range_is_rejected() {
    let mut session = RenderSession::with_colors(small_scene(None), Solid(Rgb8::new(0, 0, 0)));
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(2), FrameIndex(2)).unwrap();
    assert!(session.render_range(range, &mut sink).is_err());
    assert!(sink.config().is_none());
}

#[derive(Default)]
struct FailingSink {
    pushed: u64,
    fail_at: u64,
    ended: bool,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _cfg: SinkConfig) -> TurrellResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameBuffer) -> TurrellResult<()> {
        if idx.0 == self.fail_at {
            return Err(TurrellError::encode("pipe closed"));
        }
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> TurrellResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[test]
fn failed_push_still_ends_the_sink() {
    let mut session = RenderSession::with_colors(small_scene(None), Solid(Rgb8::new(9, 9, 9)));
    let mut sink = FailingSink {
        fail_at: 4,
        ..FailingSink::default()
    };
    let err = session.render_all(&mut sink).unwrap_err();

    assert!(matches!(err, TurrellError::Encode(_)));
    assert_eq!(sink.pushed, 4);
    assert!(sink.ended);
}

#[test]
fn second_ring_spawns_on_the_interval_frame_at_49_fps() {
    let scene = SceneConfig {
        width: 16,
        height: 16,
        fps: 49,
        frames: 99,
        ..SceneConfig::default()
    }
    .validate()
    .unwrap();
    let mut session = RenderSession::with_colors(scene, Solid(Rgb8::new(0, 0, 255)));
    let mut sink = InMemorySink::new();
    let range = FrameRange::new(FrameIndex(98), FrameIndex(99)).unwrap();
    session.render_range(range, &mut sink).unwrap();

    let starts: Vec<f64> = session.state().rings().iter().map(|r| r.start_ms).collect();
    assert_eq!(starts, vec![0.0, 2000.0]);
}
