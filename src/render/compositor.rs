use rayon::prelude::*;

use crate::foundation::color::Rgb8;
use crate::foundation::core::Threading;
use crate::gradient::field::GradientField;
use crate::render::frame::FrameBuffer;
use crate::waves::ring::{Ring, WaveGeometry};

/// Blend every contributing ring into `base`, in spawn order.
///
/// Each contribution replaces the running color with `(running + contribution) / 2`. This is a
/// sequential average, not alpha compositing: later rings weigh more and the order of `rings`
/// changes the result. The final value rounds ties to even.
pub fn composite_pixel(
    base: Rgb8,
    dist: f64,
    angle: f64,
    rings: &[Ring],
    geometry: &WaveGeometry,
    now_ms: f64,
) -> Rgb8 {
    let mut running = base.to_f();
    for ring in rings {
        if let Some(contribution) = geometry.ring_color_at(ring, dist, angle, now_ms) {
            running = running.average(contribution);
        }
    }
    running.to_rgb8_ties_even()
}

/// Composite `rings` over `field` at `now_ms` using the default (parallel) row schedule.
pub fn render_frame(
    field: &GradientField,
    rings: &[Ring],
    geometry: &WaveGeometry,
    now_ms: f64,
) -> FrameBuffer {
    render_frame_with(field, rings, geometry, now_ms, Threading::default())
}

pub fn render_frame_with(
    field: &GradientField,
    rings: &[Ring],
    geometry: &WaveGeometry,
    now_ms: f64,
    threading: Threading,
) -> FrameBuffer {
    let canvas = field.canvas();
    if rings.is_empty() || canvas.pixel_count() == 0 {
        return FrameBuffer::from_field(field);
    }

    let stride = (canvas.width as usize) * 4;
    let mut data = vec![0u8; canvas.pixel_count() * 4];

    let fill_row = |(y, row): (usize, &mut [u8])| {
        let y = y as u32;
        let base_row = field.row(y);
        for (x, (px, base)) in row.chunks_exact_mut(4).zip(base_row).enumerate() {
            let (dist, angle) = canvas.polar(x as u32, y);
            let color = composite_pixel(*base, dist, angle, rings, geometry, now_ms);
            px.copy_from_slice(&color.to_rgba());
        }
    };
    match threading {
        Threading::Serial => data.chunks_mut(stride).enumerate().for_each(fill_row),
        Threading::Parallel => data.par_chunks_mut(stride).enumerate().for_each(fill_row),
    }

    FrameBuffer {
        width: canvas.width,
        height: canvas.height,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
