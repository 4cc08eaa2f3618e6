//! Slide catalogue loading.
//!
//! A slide directory either carries a `slides.toml` manifest describing each
//! project, or is a plain folder of images shown in file-name order:
//!
//! ```toml
//! [[slide]]
//! image = "mg-arquitectura.jpg"
//! title = "MG Arquitectura"
//! description = "Architecture studio website."
//! link = "https://www.mgarquitecturauy.com/"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::slide::Slide;
use crate::texture_loader::load_sorted_image_paths;

pub const MANIFEST_FILE_NAME: &str = "slides.toml";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read slide manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse slide manifest {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("slide manifest {} lists no slides", path.display())]
    Empty { path: PathBuf },
    #[error("no slides found in {}: {reason}", dir.display())]
    NoImages { dir: PathBuf, reason: String },
}

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "slide")]
    slides: Vec<SlideEntry>,
}

#[derive(Debug, Deserialize)]
struct SlideEntry {
    image: PathBuf,
    title: String,
    #[serde(default)]
    description: String,
    link: Option<String>,
}

impl SlideEntry {
    fn into_slide(self, base_dir: &Path) -> Slide {
        let image = if self.image.is_absolute() {
            self.image
        } else {
            base_dir.join(self.image)
        };
        if !image.is_file() {
            warn!("Slide \"{}\" image {} does not exist, a placeholder will be shown", self.title, image.display());
        }
        let slide = Slide::new(image, self.title).with_description(self.description);
        match self.link {
            Some(link) if !link.trim().is_empty() => slide.with_link(link),
            _ => slide,
        }
    }
}

/// Parses manifest text. Relative image paths resolve against `base_dir`.
pub fn parse_manifest(contents: &str, base_dir: &Path, origin: &Path) -> Result<Vec<Slide>, ManifestError> {
    let file: ManifestFile = toml::from_str(contents).map_err(|source| ManifestError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    if file.slides.is_empty() {
        return Err(ManifestError::Empty {
            path: origin.to_path_buf(),
        });
    }
    Ok(file
        .slides
        .into_iter()
        .map(|entry| entry.into_slide(base_dir))
        .collect())
}

pub fn read_manifest(path: &Path, base_dir: &Path) -> Result<Vec<Slide>, ManifestError> {
    let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&contents, base_dir, path)
}

fn slide_from_image(path: PathBuf) -> Slide {
    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default();
    Slide::new(path, title)
}

/// Loads the slides of `dir`, preferring an explicit manifest, then `dir/slides.toml`,
/// then every image in the directory.
pub fn load_slides(dir: &Path, manifest: Option<&Path>) -> Result<Vec<Slide>, ManifestError> {
    let manifest = manifest
        .map(Path::to_path_buf)
        .or_else(|| Some(dir.join(MANIFEST_FILE_NAME)).filter(|p| p.is_file()));

    let slides = match manifest {
        Some(path) => {
            info!("Reading slides from {}", path.display());
            read_manifest(&path, dir)?
        }
        None => load_sorted_image_paths(dir)
            .map_err(|err| ManifestError::NoImages {
                dir: dir.to_path_buf(),
                reason: format!("{err:#}"),
            })?
            .into_iter()
            .map(slide_from_image)
            .collect(),
    };
    info!("Loaded {} slides", slides.len());
    Ok(slides)
}
