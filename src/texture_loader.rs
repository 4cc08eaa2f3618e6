use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_image_path(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&lowercase_extension(path).as_str())
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-critical, the image is shown as stored
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

/// The two looks of a card: desaturated at rest, full colour under the pointer.
#[derive(Debug)]
pub struct CardImages<T> {
    pub color: T,
    pub grayscale: T,
}

impl<T> CardImages<T> {
    pub fn for_hover(&self, hovered: bool) -> &T {
        if hovered { &self.color } else { &self.grayscale }
    }
}

// --- Load Image, Apply EXIF Rotation ---
fn load_image_with_exif_rotation(image_path: &Path) -> Result<Image> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = lowercase_extension(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    // Extension hint is required when loading from memory
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .with_context(|| format!("Failed to load image data for {}", image_path.display()))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!("Applied EXIF orientation {} to {}", orientation, image_path.display());
    }

    Ok(image)
}

// --- Create Colour And Grayscale Textures ---
pub fn load_card_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<CardImages<Texture2D>> {
    let mut image = load_image_with_exif_rotation(image_path)?;

    let color = rl
        .load_texture_from_image(thread, &image)
        .with_context(|| format!("Failed to create texture for {}", image_path.display()))?;

    image.color_grayscale();
    let grayscale = rl
        .load_texture_from_image(thread, &image)
        .with_context(|| format!("Failed to create grayscale texture for {}", image_path.display()))?;

    // Both textures live on the GPU now
    drop(image);

    Ok(CardImages { color, grayscale })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_image_extensions_case_insensitively() {
        assert!(is_image_path(Path::new("shot.PNG")));
        assert!(is_image_path(Path::new("dir/photo.jpeg")));
        assert!(!is_image_path(Path::new("slides.toml")));
        assert!(!is_image_path(Path::new("README")));
    }

    #[test]
    fn lists_only_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.jpg", "a.png", "notes.txt", "b.gif"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = load_sorted_image_paths(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.png", "b.gif", "c.jpg"]);
    }

    #[test]
    fn cards_rest_in_grayscale_and_colour_on_hover() {
        let images = CardImages { color: "color", grayscale: "gray" };
        assert_eq!(*images.for_hover(false), "gray");
        assert_eq!(*images.for_hover(true), "color");
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sorted_image_paths(dir.path()).is_err());
    }
}
