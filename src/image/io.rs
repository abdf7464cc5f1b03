//! I/O helpers bridging the pipeline and the outside world.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA canvas.
//! - `save_field_png`: write an `IntensityField` to a grayscale PNG, optionally upscaled.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `render_ascii`: terminal rendering of a field for quick inspection.
use super::{IntensityField, PixelBuffer};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA buffer loaded from disk with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct RgbaCanvas {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbaCanvas {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a 4-channel `PixelBuffer` view
    pub fn as_view(&self) -> PixelBuffer<'_> {
        PixelBuffer::packed(self.width, self.height, 4, &self.data)
    }
}

/// Load an image from disk and expand it to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<RgbaCanvas, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbaCanvas::new(width, height, img.into_raw()))
}

/// Save a field to a grayscale PNG, each cell drawn as an `upscale × upscale` block.
pub fn save_field_png(field: &IntensityField, upscale: usize, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let upscale = upscale.max(1);
    let gray = field.to_gray_u8();
    let out = GrayImage::from_fn(
        (field.w * upscale) as u32,
        (field.h * upscale) as u32,
        |x, y| {
            let (cx, cy) = (x as usize / upscale, y as usize / upscale);
            Luma([gray[field.idx(cx, cy)]])
        },
    );
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Render a field as text, one character per cell, darker glyphs for more ink.
pub fn render_ascii(field: &IntensityField) -> String {
    const RAMP: &[u8] = b" .:-=+*#%@";
    let mut out = String::with_capacity((field.w + 1) * field.h);
    for row in field.rows() {
        for &v in row {
            let level = (v.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
            out.push(RAMP[level] as char);
        }
        out.push('\n');
    }
    out
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
