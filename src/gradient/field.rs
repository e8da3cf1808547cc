use rayon::prelude::*;

use crate::foundation::color::Rgb8;
use crate::foundation::core::{Canvas, Threading};
use crate::foundation::error::{TurrellError, TurrellResult};

/// Colors and inner radius of the static disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientParams {
    /// Color of the flat center zone.
    pub center: Rgb8,
    /// Color reached at the rim of the disc.
    pub edge: Rgb8,
    /// Color outside the disc.
    pub background: Rgb8,
    /// Fraction of the disc radius that stays flat `center`, in `(0, 1]`.
    pub circle_radius_ratio: f64,
}

impl GradientParams {
    pub fn new(
        center: Rgb8,
        edge: Rgb8,
        background: Rgb8,
        circle_radius_ratio: f64,
    ) -> TurrellResult<Self> {
        let params = Self {
            center,
            edge,
            background,
            circle_radius_ratio,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> TurrellResult<()> {
        let r = self.circle_radius_ratio;
        if !r.is_finite() || r <= 0.0 || r > 1.0 {
            return Err(TurrellError::invalid_config(format!(
                "circle_radius_ratio must be in (0, 1], got {r}"
            )));
        }
        Ok(())
    }

    /// Color at `dist_ratio = dist / max_radius`.
    ///
    /// `t` is left unclamped: for a validated ratio the geometry already keeps it in `[0, 1]`.
    pub fn sample(&self, dist_ratio: f64) -> Rgb8 {
        if dist_ratio > 1.0 {
            return self.background;
        }

        let inner = self.circle_radius_ratio;
        let t = if dist_ratio <= inner {
            0.0
        } else {
            (dist_ratio - inner) / (1.0 - inner)
        };
        self.center.lerp(self.edge, t).to_rgb8()
    }
}

/// Precomputed, read-only base image of the disc.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientField {
    canvas: Canvas,
    pixels: Vec<Rgb8>,
}

impl GradientField {
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb8 {
        self.pixels[(y as usize) * (self.canvas.width as usize) + (x as usize)]
    }

    pub fn row(&self, y: u32) -> &[Rgb8] {
        let w = self.canvas.width as usize;
        let start = (y as usize) * w;
        &self.pixels[start..start + w]
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }
}

/// Build the gradient field using the default (parallel) row schedule.
pub fn build_gradient_field(canvas: Canvas, params: &GradientParams) -> GradientField {
    build_gradient_field_with(canvas, params, Threading::default())
}

#[tracing::instrument(skip(params))]
pub fn build_gradient_field_with(
    canvas: Canvas,
    params: &GradientParams,
    threading: Threading,
) -> GradientField {
    let width = canvas.width as usize;
    let max_radius = canvas.max_radius();
    let mut pixels = vec![params.background; canvas.pixel_count()];
    if pixels.is_empty() {
        return GradientField { canvas, pixels };
    }

    let fill_row = |(y, row): (usize, &mut [Rgb8])| {
        for (x, px) in row.iter_mut().enumerate() {
            let dist = canvas.distance(x as u32, y as u32);
            *px = params.sample(dist / max_radius);
        }
    };
    match threading {
        Threading::Serial => pixels.chunks_mut(width).enumerate().for_each(fill_row),
        Threading::Parallel => pixels.par_chunks_mut(width).enumerate().for_each(fill_row),
    }

    GradientField { canvas, pixels }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/field.rs"]
mod tests;
