pub mod carousel;
pub mod config;
pub mod constants;
pub mod engine;
pub mod manifest;
pub mod render;
pub mod slide;
pub mod state;
pub mod texture_loader;

pub use carousel::{Carousel, CarouselError, Placement};
pub use slide::Slide;
