use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::color::ColorDef;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{TurrellError, TurrellResult};
use crate::gradient::field::GradientParams;
use crate::waves::ring::{WaveGeometry, WaveParams};

/// Scene description as read from JSON. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub center_color: ColorDef,
    pub edge_color: ColorDef,
    pub background_color: ColorDef,
    pub circle_radius_ratio: f64,
    pub wave_interval_ms: f64,
    pub wave_lifespan_ms: f64,
    pub wave_lobes: u32,
    pub fps: u32,
    /// Length of a full render, in frames.
    pub frames: u64,
    /// Seed for ring colors; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            center_color: ColorDef::hex("#00AEC9"),
            edge_color: ColorDef::hex("#0D6586"),
            background_color: ColorDef::hex("#DCDCDC"),
            circle_radius_ratio: 0.4,
            wave_interval_ms: 2000.0,
            wave_lifespan_ms: 3000.0,
            wave_lobes: 3,
            fps: 30,
            frames: 300,
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> TurrellResult<Self> {
        serde_json::from_str(s).map_err(|e| TurrellError::serde(e.to_string()))
    }

    pub fn from_json_path(path: &Path) -> TurrellResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| TurrellError::serde(format!("parse config '{}': {e}", path.display())))
    }

    /// Resolve colors and check every invariant; nothing is built from an invalid config.
    pub fn validate(&self) -> TurrellResult<Scene> {
        let canvas = Canvas::new(self.width, self.height)?;
        let gradient = GradientParams::new(
            self.center_color.resolve()?,
            self.edge_color.resolve()?,
            self.background_color.resolve()?,
            self.circle_radius_ratio,
        )?;
        let waves = WaveParams::new(self.wave_interval_ms, self.wave_lifespan_ms, self.wave_lobes)?;
        let fps = Fps::new(self.fps, 1)?;

        Ok(Scene {
            canvas,
            gradient,
            waves,
            fps,
            frames: self.frames,
            seed: self.seed,
        })
    }
}

/// Validated scene: the typed inputs of the gradient, the waves and the render timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    pub gradient: GradientParams,
    pub waves: WaveParams,
    pub fps: Fps,
    pub frames: u64,
    pub seed: Option<u64>,
}

impl Scene {
    pub fn wave_geometry(&self) -> WaveGeometry {
        WaveGeometry::new(self.canvas, self.gradient.circle_radius_ratio, self.waves)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
