//! Maps carousel placements onto the framebuffer and turns pointer input back into carousel events.

pub mod layout;
pub mod projection;
pub mod scene;
pub mod sprite;

pub use scene::CarouselScene;
