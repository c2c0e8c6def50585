//! Finding the images a slideshow is built from.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use log::warn;
use rand::seq::SliceRandom;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Rotation recorded by the camera, limited to the cases that need no flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    /// Maps the EXIF orientation tag. Mirrored variants are treated as normal.
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        anyhow::bail!("no image files found in {}", dir.display());
    }
    Ok(paths)
}

pub fn shuffle_paths(paths: &mut [PathBuf]) {
    paths.shuffle(&mut rand::rng());
}

/// Orientation stored in the EXIF block of a JPEG. Other formats, and JPEGs
/// without readable EXIF, are reported as [`Orientation::Normal`].
pub fn read_orientation(path: &Path, bytes: &[u8]) -> Orientation {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "jpg" && ext != "jpeg" {
        return Orientation::Normal;
    }
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            warn!("could not read EXIF data for {}: {}", path.display(), e);
            return Orientation::Normal;
        }
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Short(values)) => values
            .first()
            .map_or(Orientation::Normal, |&value| Orientation::from_exif(value)),
        _ => Orientation::Normal,
    }
}
