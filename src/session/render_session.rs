use std::time::{Duration, Instant};

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange, Threading};
use crate::foundation::error::{TurrellError, TurrellResult};
use crate::gradient::field::{GradientField, build_gradient_field_with};
use crate::render::compositor::render_frame_with;
use crate::render::frame::FrameBuffer;
use crate::scene::config::Scene;
use crate::waves::lifecycle::{AnimationState, ColorSource, RandomColors};
use crate::waves::ring::WaveGeometry;

/// Counters and the timing breakdown of a render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames_rendered: u64,
    /// Frames whose timeline was advanced without rendering (before the range start).
    pub frames_skipped: u64,
    /// Time spent building the gradient field when the session was created.
    pub field_build: Duration,
    /// Time spent compositing frames.
    pub composite: Duration,
    /// Time spent inside the sink (`begin`, `push_frame`, `end`).
    pub sink: Duration,
}

impl RenderStats {
    pub fn total(&self) -> Duration {
        self.field_build + self.composite + self.sink
    }
}

/// Owns everything needed to turn timeline positions into frames.
///
/// The gradient field is built once in the constructor and only read afterwards. Ring state
/// moves forward through [`RenderSession::render_at`] or is replayed by
/// [`RenderSession::render_range`].
pub struct RenderSession<C = RandomColors> {
    scene: Scene,
    geometry: WaveGeometry,
    field: GradientField,
    state: AnimationState,
    colors: C,
    last_now_ms: Option<f64>,
    threading: Threading,
    field_build: Duration,
}

impl RenderSession<RandomColors> {
    /// Session with random ring colors, seeded from `scene.seed` when present.
    pub fn new(scene: Scene) -> Self {
        let colors = match scene.seed {
            Some(seed) => RandomColors::seeded(seed),
            None => RandomColors::from_entropy(),
        };
        Self::with_colors(scene, colors)
    }
}

impl<C: ColorSource> RenderSession<C> {
    pub fn with_colors(scene: Scene, colors: C) -> Self {
        Self::with_colors_and_threading(scene, colors, Threading::default())
    }

    pub fn with_colors_and_threading(scene: Scene, colors: C, threading: Threading) -> Self {
        let started = Instant::now();
        let field = build_gradient_field_with(scene.canvas, &scene.gradient, threading);
        let field_build = started.elapsed();
        tracing::debug!(?field_build, canvas = ?scene.canvas, "built gradient field");

        Self {
            geometry: scene.wave_geometry(),
            state: AnimationState::new(&scene.waves),
            scene,
            field,
            colors,
            last_now_ms: None,
            threading,
            field_build,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn field(&self) -> &GradientField {
        &self.field
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Static-image mode: the gradient with no rings.
    pub fn still(&self) -> FrameBuffer {
        FrameBuffer::from_field(&self.field)
    }

    /// Move the ring timeline to `now_ms` (spawn, then prune).
    pub fn advance_to(&mut self, now_ms: f64) -> TurrellResult<()> {
        if !now_ms.is_finite() {
            return Err(TurrellError::invalid_config(format!(
                "time must be finite, got {now_ms}"
            )));
        }
        if let Some(last) = self.last_now_ms {
            if now_ms < last {
                return Err(TurrellError::invalid_config(format!(
                    "time must not go backwards: {now_ms} ms after {last} ms"
                )));
            }
        }

        let state = std::mem::replace(&mut self.state, AnimationState::new(&self.scene.waves));
        self.state = state.advance(now_ms, &self.scene.waves, &mut self.colors);
        self.last_now_ms = Some(now_ms);
        Ok(())
    }

    /// Composite the current ring state at `now_ms` without advancing it.
    pub fn composite(&self, now_ms: f64) -> FrameBuffer {
        render_frame_with(
            &self.field,
            self.state.rings(),
            &self.geometry,
            now_ms,
            self.threading,
        )
    }

    /// Advance to `now_ms` and render the frame for that instant.
    pub fn render_at(&mut self, now_ms: f64) -> TurrellResult<FrameBuffer> {
        self.advance_to(now_ms)?;
        Ok(self.composite(now_ms))
    }

    /// Render `range` into `sink`.
    ///
    /// The ring timeline is replayed from frame 0 on a fresh state, so frame `n` has the same ring
    /// history whatever the range start; frames before `range.start` are advanced but not
    /// composited. The color source is not rewound.
    #[tracing::instrument(skip(self, sink), fields(canvas = ?self.scene.canvas))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> TurrellResult<RenderStats> {
        if range.is_empty() {
            return Err(TurrellError::invalid_config("render range must be non-empty"));
        }

        self.state = AnimationState::new(&self.scene.waves);
        self.last_now_ms = None;

        let mut stats = RenderStats {
            field_build: self.field_build,
            ..RenderStats::default()
        };
        let fps = self.scene.fps;

        let started = Instant::now();
        sink.begin(SinkConfig {
            width: self.scene.canvas.width,
            height: self.scene.canvas.height,
            fps,
        })?;
        stats.sink += started.elapsed();

        let pushed = self.push_range(range, sink, &mut stats);

        // `end` runs on the error path too so sinks can reap child processes.
        let started = Instant::now();
        let ended = sink.end();
        stats.sink += started.elapsed();
        pushed?;
        ended?;

        tracing::info!(
            frames = stats.frames_rendered,
            skipped = stats.frames_skipped,
            field_build = ?stats.field_build,
            composite = ?stats.composite,
            sink = ?stats.sink,
            total = ?stats.total(),
            "render finished"
        );
        Ok(stats)
    }

    fn push_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
        stats: &mut RenderStats,
    ) -> TurrellResult<()> {
        let fps = self.scene.fps;
        for f in 0..range.end.0 {
            let idx = FrameIndex(f);
            let now_ms = fps.frame_time_ms(idx);
            self.advance_to(now_ms)?;
            if !range.contains(idx) {
                stats.frames_skipped += 1;
                continue;
            }

            let started = Instant::now();
            let frame = self.composite(now_ms);
            stats.composite += started.elapsed();

            let started = Instant::now();
            sink.push_frame(idx, &frame)?;
            stats.sink += started.elapsed();
            stats.frames_rendered += 1;
        }
        Ok(())
    }

    /// Render the scene's full length (`frames` at `fps`) into `sink`.
    pub fn render_all(&mut self, sink: &mut dyn FrameSink) -> TurrellResult<RenderStats> {
        let range = FrameRange::new(FrameIndex(0), FrameIndex(self.scene.frames))?;
        self.render_range(range, sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
