use std::path::Path;

use anyhow::Context as _;

use crate::foundation::color::Rgb8;
use crate::foundation::core::Canvas;
use crate::foundation::error::{TurrellError, TurrellResult};
use crate::gradient::field::GradientField;

/// A rendered frame as RGBA8 pixels.
///
/// Alpha is always 255; the channel is kept so frames can go straight to RGBA consumers
/// (`image`, `ffmpeg -pix_fmt rgba`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameBuffer {
    /// Static-image mode: the gradient field alone.
    pub fn from_field(field: &GradientField) -> Self {
        let canvas = field.canvas();
        let data = field.pixels().iter().flat_map(|px| px.to_rgba()).collect();
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn rgb(&self, x: u32, y: u32) -> Rgb8 {
        let [r, g, b, _] = self.pixel(x, y);
        Rgb8::new(r, g, b)
    }

    pub fn to_image(&self) -> TurrellResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            TurrellError::encode(format!(
                "frame data length {} does not match {}x{} rgba8",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }

    pub fn save_png(&self, path: &Path) -> TurrellResult<()> {
        let img = self.to_image()?;
        img.save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
