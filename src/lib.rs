//! turrell renders a radial color-gradient disc with lobed ring waves that expand outward and fade.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`SceneConfig`] (JSON, every field defaulted) validates into a [`Scene`].
//! 2. **Gradient**: the disc is computed once into an immutable [`GradientField`].
//! 3. **Animate**: [`AnimationState::advance`] spawns rings on a fixed timeline interval and prunes
//!    the expired ones; ring colors come from an injectable [`ColorSource`].
//! 4. **Composite**: [`render_frame`] averages every ring's band color onto the field, in spawn
//!    order, producing a [`FrameBuffer`].
//! 5. **Encode** (optional): a [`FrameSink`] receives frames in order (PNG sequence, `ffmpeg` MP4).
//!
//! [`RenderSession`] ties the steps together. Animation time is always supplied by the caller in
//! milliseconds; nothing in the pixel model reads the wall clock.
#![forbid(unsafe_code)]

mod foundation;
mod gradient;
mod render;
mod scene;
mod session;
mod waves;

/// Frame sinks.
pub mod encode;

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::color::{ColorDef, Rgb8, RgbF, lerp_channel, parse_hex_color};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Threading};
pub use crate::foundation::error::{TurrellError, TurrellResult};
pub use crate::gradient::field::{
    GradientField, GradientParams, build_gradient_field, build_gradient_field_with,
};
pub use crate::render::compositor::{composite_pixel, render_frame, render_frame_with};
pub use crate::render::frame::FrameBuffer;
pub use crate::scene::config::{Scene, SceneConfig};
pub use crate::session::render_session::{RenderSession, RenderStats};
pub use crate::waves::lifecycle::{
    AnimationState, ColorSource, RandomColors, maybe_spawn, prune_expired,
};
pub use crate::waves::ring::{
    RING_THICKNESS_FRACTION, Ring, WaveGeometry, WaveParams, lobe_intensity,
};
