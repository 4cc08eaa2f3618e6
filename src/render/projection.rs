use raylib::prelude::*;

use crate::carousel::Placement;
use crate::constants::*;

/// Fixed geometry of the area the ring is drawn in, in framebuffer pixels.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub center: Vector2,
    pub card_width: f32,
    pub card_height: f32,
    pub perspective: f32,
}

impl Stage {
    pub fn new(render_width: i32) -> Self {
        Self {
            center: Vector2::new(render_width as f32 * 0.5, STAGE_CENTER_Y),
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            perspective: PERSPECTIVE,
        }
    }
}

/// A card flattened onto the framebuffer.
#[derive(Debug, Clone, Copy)]
pub struct ProjectedCard {
    pub bounds: Rectangle,
    pub opacity: f32,
    pub z_index: i32,
}

impl ProjectedCard {
    /// Whether the card can be seen, and therefore clicked.
    pub fn is_interactive(&self) -> bool {
        self.opacity > 0.0 && self.bounds.width >= 1.0 && self.bounds.height >= 1.0
    }
}

/// Projects a placement with a pinhole camera `stage.perspective` pixels in front of the stage.
///
/// Rotation around the vertical axis shows up as horizontal foreshortening.
pub fn project(stage: &Stage, placement: &Placement) -> ProjectedCard {
    let depth = (stage.perspective - placement.translate_z).max(1.0);
    let factor = stage.perspective / depth;
    let turn = placement.rotation_deg.to_radians().cos().abs();

    let width = stage.card_width * placement.scale * turn * factor;
    let height = stage.card_height * placement.scale * factor;
    let center_x = stage.center.x + placement.translate_x * factor;

    ProjectedCard {
        bounds: Rectangle::new(
            center_x - width * 0.5,
            stage.center.y - height * 0.5,
            width,
            height,
        ),
        opacity: placement.opacity.clamp(0.0, 1.0),
        z_index: placement.z_index,
    }
}

/// Source rectangle that crops a texture to fill `dest_width` x `dest_height` without stretching.
pub fn cover_source(tex_width: f32, tex_height: f32, dest_width: f32, dest_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || dest_width <= 0.0 || dest_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width.max(0.0), tex_height.max(0.0));
    }
    let tex_aspect = tex_width / tex_height;
    let dest_aspect = dest_width / dest_height;
    if tex_aspect > dest_aspect {
        // Too wide, trim the sides
        let width = tex_height * dest_aspect;
        Rectangle::new((tex_width - width) * 0.5, 0.0, width, tex_height)
    } else {
        let height = tex_width / dest_aspect;
        Rectangle::new(0.0, (tex_height - height) * 0.5, tex_width, height)
    }
}
