use std::path::{Path, PathBuf};

/// One showcased project: an image with a caption and an optional external link.
///
/// Slides are handed to the carousel once and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    image: PathBuf,
    title: String,
    description: String,
    link: Option<String>,
}

impl Slide {
    pub fn new(image: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            description: String::new(),
            link: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn image(&self) -> &Path {
        &self.image
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_optional_fields() {
        let slide = Slide::new("mg.jpg", "MG Arquitectura")
            .with_description("Architecture studio site")
            .with_link("https://www.mgarquitecturauy.com/");

        assert_eq!(slide.image(), Path::new("mg.jpg"));
        assert_eq!(slide.title(), "MG Arquitectura");
        assert_eq!(slide.description(), "Architecture studio site");
        assert_eq!(slide.link(), Some("https://www.mgarquitecturauy.com/"));
    }

    #[test]
    fn link_defaults_to_none() {
        let slide = Slide::new("a.png", "A");
        assert_eq!(slide.link(), None);
        assert!(slide.description().is_empty());
    }
}
