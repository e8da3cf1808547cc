use crate::foundation::color::{Rgb8, RgbF};
use crate::foundation::core::Canvas;
use crate::foundation::error::{TurrellError, TurrellResult};

/// Band width as a fraction of the ring's travel distance.
pub const RING_THICKNESS_FRACTION: f64 = 0.1;

/// One expanding wave. Immutable once spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Timeline time of the spawn, in milliseconds.
    pub start_ms: f64,
    pub start_color: Rgb8,
    pub end_color: Rgb8,
}

/// Timing and shape of the ring waves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParams {
    /// Milliseconds between spawns.
    pub interval_ms: f64,
    /// Milliseconds from spawn to expiry.
    pub lifespan_ms: f64,
    /// Bright/dim repetitions around the ring.
    pub lobes: u32,
}

impl WaveParams {
    pub fn new(interval_ms: f64, lifespan_ms: f64, lobes: u32) -> TurrellResult<Self> {
        let params = Self {
            interval_ms,
            lifespan_ms,
            lobes,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> TurrellResult<()> {
        if !self.interval_ms.is_finite() || self.interval_ms <= 0.0 {
            return Err(TurrellError::invalid_config(format!(
                "wave_interval_ms must be > 0, got {}",
                self.interval_ms
            )));
        }
        if !self.lifespan_ms.is_finite() || self.lifespan_ms <= 0.0 {
            return Err(TurrellError::invalid_config(format!(
                "wave_lifespan_ms must be > 0, got {}",
                self.lifespan_ms
            )));
        }
        if self.lobes < 1 {
            return Err(TurrellError::invalid_config("wave_lobes must be >= 1"));
        }
        Ok(())
    }

    /// Normalized age of `ring` at `now_ms`; `[0, 1]` while the ring is alive.
    pub fn phase(&self, ring: &Ring, now_ms: f64) -> f64 {
        (now_ms - ring.start_ms) / self.lifespan_ms
    }
}

/// Angular modulation `0.5 + 0.5 * sin(angle * lobes)`.
pub fn lobe_intensity(angle: f64, lobes: u32) -> f64 {
    0.5 + 0.5 * (angle * f64::from(lobes)).sin()
}

/// Canvas-dependent ring geometry plus the wave timing, i.e. everything the per-pixel ring color
/// needs besides the ring itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveGeometry {
    /// Radius where rings are born: the flat center zone of the disc.
    pub main_circle_radius: f64,
    pub max_radius: f64,
    pub waves: WaveParams,
}

impl WaveGeometry {
    pub fn new(canvas: Canvas, circle_radius_ratio: f64, waves: WaveParams) -> Self {
        let max_radius = canvas.max_radius();
        Self {
            main_circle_radius: circle_radius_ratio * max_radius,
            max_radius,
            waves,
        }
    }

    fn travel(&self) -> f64 {
        2.0 * self.max_radius - self.main_circle_radius
    }

    /// Leading edge radius at `phase`; reaches twice the disc radius at expiry.
    pub fn current_radius(&self, phase: f64) -> f64 {
        self.main_circle_radius + self.travel() * phase
    }

    pub fn thickness(&self) -> f64 {
        RING_THICKNESS_FRACTION * self.travel()
    }

    /// Contribution of `ring` to a pixel at polar `(dist, angle)` at `now_ms`.
    ///
    /// `None` when the ring is not alive or the pixel lies outside its band.
    pub fn ring_color_at(&self, ring: &Ring, dist: f64, angle: f64, now_ms: f64) -> Option<RgbF> {
        let phase = self.waves.phase(ring, now_ms);
        if !(0.0..=1.0).contains(&phase) {
            return None;
        }

        let current_radius = self.current_radius(phase);
        if dist > current_radius {
            return None;
        }
        let thickness = self.thickness();
        let inner = current_radius - thickness;
        if dist < inner {
            return None;
        }

        let intensity = lobe_intensity(angle, self.waves.lobes);
        let band_pos = ((dist - inner) / thickness).clamp(0.0, 1.0);
        let thickness_fade = 1.0 - (band_pos - 0.5).abs() * 2.0;

        let color = ring.start_color.lerp(ring.end_color, phase);
        Some(color.scale(intensity * thickness_fade))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waves/ring.rs"]
mod tests;
