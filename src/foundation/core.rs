use std::f64::consts::TAU;

use crate::foundation::error::{TurrellError, TurrellResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> TurrellResult<Self> {
        if start.0 > end.0 {
            return Err(TurrellError::invalid_config(
                "FrameRange start must be <= end",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> TurrellResult<Self> {
        if den == 0 {
            return Err(TurrellError::invalid_config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(TurrellError::invalid_config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Timeline position of `frame`, in milliseconds since frame 0.
    ///
    /// Divides last so whole-millisecond instants come out exact (frame 98 at 49 fps is 2000.0).
    pub fn frame_time_ms(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * 1000.0 * f64::from(self.den) / f64::from(self.num)
    }
}

/// How per-pixel loops are scheduled. Both variants produce identical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Threading {
    /// Rows on the calling thread, top to bottom.
    Serial,
    /// Rows spread over the rayon global pool.
    #[default]
    Parallel,
}

/// Pixel dimensions of the output surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> TurrellResult<Self> {
        if width == 0 || height == 0 {
            return Err(TurrellError::invalid_config(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Geometric center `(width / 2, height / 2)`; not snapped to a pixel.
    pub fn center(self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Radius of the disc: half of the shorter side.
    pub fn max_radius(self) -> f64 {
        f64::from(self.width.min(self.height)) / 2.0
    }

    /// Euclidean distance of pixel `(x, y)` from the center.
    pub fn distance(self, x: u32, y: u32) -> f64 {
        let (cx, cy) = self.center();
        let dx = f64::from(x) - cx;
        let dy = f64::from(y) - cy;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from the center and angle in `[0, 2π)` of pixel `(x, y)`.
    pub fn polar(self, x: u32, y: u32) -> (f64, f64) {
        let (cx, cy) = self.center();
        let dx = f64::from(x) - cx;
        let dy = f64::from(y) - cy;
        let dist = (dx * dx + dy * dy).sqrt();
        let mut angle = dy.atan2(dx);
        if angle < 0.0 {
            angle += TAU;
        }
        (dist, angle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
