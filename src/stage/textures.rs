use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use raylib::prelude::*;

use crate::source::{Orientation, read_orientation};

/// Loads an image file into a texture, applying the EXIF rotation first.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let orientation = read_orientation(path, &bytes);

    // Extension hint is needed to decode from memory
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {}", path.display(), e))?;

    match orientation {
        Orientation::Rotate180 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Orientation::Rotate90Cw => image.rotate_cw(),
        Orientation::Rotate90Ccw => image.rotate_ccw(),
        Orientation::Normal => {}
    }
    if orientation != Orientation::Normal {
        log::debug!("{} rotated {:?}", path.display(), orientation);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {}", path.display(), e))
}

/// Scale that fits a `width` x `height` texture inside `bounds` without upscaling.
pub fn fit_scale(width: i32, height: i32, bounds: Rectangle) -> f32 {
    let sx = bounds.width / width.max(1) as f32;
    let sy = bounds.height / height.max(1) as f32;
    sx.min(sy).min(1.0)
}
