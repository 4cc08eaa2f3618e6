//! Ring carousel: which slide is active, where every other slide sits, and
//! when auto-play moves things along.

mod controller;
pub mod placement;
pub mod timer;

pub use controller::{Carousel, CarouselError};
pub use placement::{Placement, normalized_offset, place};
pub use timer::AutoAdvanceTimer;
