use raylib::prelude::*;

use crate::carousel::Placement;
use crate::constants::*;
use crate::render::projection::{ProjectedCard, Stage, cover_source, project};
use crate::texture_loader::CardImages;

const CARD_BACKGROUND: Color = Color::new(24, 24, 27, 255);
const CARD_BORDER_COLOR: Color = Color::new(99, 102, 241, 51);
const INDICATOR_COLOR: Color = Color::new(99, 102, 241, 255);

pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8,
    )
}

struct PlacementTweens {
    translate_x: ease::Tween,
    translate_z: ease::Tween,
    rotation: ease::Tween,
    scale: ease::Tween,
    opacity: ease::Tween,
}

impl PlacementTweens {
    fn between(from: &Placement, to: &Placement) -> Self {
        let tween = |start: f32, end: f32| ease::Tween::new(ease::cubic_out, start, end, TRANSITION_DURATION);
        Self {
            translate_x: tween(from.translate_x, to.translate_x),
            translate_z: tween(from.translate_z, to.translate_z),
            rotation: tween(from.rotation_deg, to.rotation_deg),
            scale: tween(from.scale, to.scale),
            opacity: tween(from.opacity, to.opacity),
        }
    }
}

/// One card on screen, easing from where it is drawn toward where the carousel wants it.
pub struct SlideSprite {
    textures: Option<CardImages<Texture2D>>,
    displayed: Placement,
    target: Placement,
    tweens: Option<PlacementTweens>,
    animation_timer: f32,
}

impl SlideSprite {
    pub fn new(textures: Option<CardImages<Texture2D>>, placement: Placement) -> Self {
        Self {
            textures,
            displayed: placement,
            target: placement,
            tweens: None,
            animation_timer: 0.0,
        }
    }

    #[cfg(test)]
    fn displayed(&self) -> &Placement {
        &self.displayed
    }

    #[cfg(test)]
    fn is_animating(&self) -> bool {
        self.tweens.is_some()
    }

    pub fn retarget(&mut self, target: Placement) {
        if target == self.target {
            return;
        }
        // Ordering and activity switch at once, geometry eases
        self.displayed.offset = target.offset;
        self.displayed.active = target.active;
        self.displayed.z_index = target.z_index;
        self.tweens = Some(PlacementTweens::between(&self.displayed, &target));
        self.target = target;
        self.animation_timer = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tweens) = self.tweens.as_mut() else {
            return;
        };

        self.displayed.translate_x = tweens.translate_x.apply(dt);
        self.displayed.translate_z = tweens.translate_z.apply(dt);
        self.displayed.rotation_deg = tweens.rotation.apply(dt);
        self.displayed.scale = tweens.scale.apply(dt);
        self.displayed.opacity = tweens.opacity.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= TRANSITION_DURATION {
            self.tweens = None;
            self.displayed = self.target;
        }
    }

    pub fn projected(&self, stage: &Stage) -> ProjectedCard {
        project(stage, &self.displayed)
    }

    /// Draws the card, desaturated unless `hovered`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, stage: &Stage, title: &str, hovered: bool) {
        let card = self.projected(stage);
        if !card.is_interactive() {
            return;
        }
        let bounds = card.bounds;
        let opacity = card.opacity;

        d.draw_rectangle_rec(bounds, with_opacity(CARD_BACKGROUND, opacity));

        match self.textures.as_ref().map(|textures| textures.for_hover(hovered)) {
            Some(texture) => {
                let source = cover_source(
                    texture.width() as f32,
                    texture.height() as f32,
                    stage.card_width,
                    stage.card_height,
                );
                d.draw_texture_pro(
                    texture,
                    source,
                    bounds,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    with_opacity(Color::WHITE, opacity),
                );
            }
            None => {
                // Placeholder card: just the title
                let size = (BODY_FONT_SIZE as f32 * bounds.height / stage.card_height).max(8.0) as i32;
                d.draw_text(
                    title,
                    (bounds.x + OVERLAY_PADDING * 0.5) as i32,
                    (bounds.y + bounds.height * 0.5) as i32 - size / 2,
                    size,
                    with_opacity(Color::LIGHTGRAY, opacity),
                );
            }
        }

        d.draw_rectangle_lines_ex(bounds, CARD_BORDER, with_opacity(CARD_BORDER_COLOR, opacity));

        if self.displayed.active {
            d.draw_circle_v(
                Vector2::new(bounds.x + bounds.width - 22.0, bounds.y + 22.0),
                6.0,
                with_opacity(INDICATOR_COLOR, opacity),
            );
        }
    }
}
