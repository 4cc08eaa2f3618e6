use anyhow::{Context, Result};
use log::{debug, info, warn};
use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::config::Settings;
use crate::constants::*;
use crate::engine::Engine;
use crate::render::layout::{
    NavButton, card_at, carousel_region, contains, dot_at, dot_rects, hovered_link_button, nav_button_at,
    nav_button_center, wrap_words,
};
use crate::render::projection::{ProjectedCard, Stage};
use crate::render::sprite::{SlideSprite, with_opacity};
use crate::slide::Slide;
use crate::texture_loader::load_card_textures;

const BACKGROUND: Color = Color::new(9, 9, 11, 255);
const PRIMARY: Color = Color::new(99, 102, 241, 255);
const MUTED: Color = Color::new(161, 161, 170, 77);
const BUTTON_FILL: Color = Color::new(9, 9, 11, 204);

/// What the pointer did this frame, in framebuffer coordinates.
struct PointerInput {
    position: Vector2,
    inside_window: bool,
    clicked: bool,
}

pub struct CarouselScene {
    carousel: Carousel,
    sprites: Vec<SlideSprite>,
    stage: Stage,
    pointer_inside: bool,
    hovered_card: Option<usize>,
}

impl CarouselScene {
    fn read_pointer(rl: &RaylibHandle) -> PointerInput {
        // The framebuffer is stretched over the whole window
        let sx = RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32;
        let sy = RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32;
        let mouse = rl.get_mouse_position();
        PointerInput {
            position: Vector2::new(mouse.x * sx, mouse.y * sy),
            inside_window: rl.is_cursor_on_screen(),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        }
    }

    fn projected_cards(&self) -> Vec<ProjectedCard> {
        self.sprites.iter().map(|sprite| sprite.projected(&self.stage)).collect()
    }

    fn update_hover(&mut self, pointer: &PointerInput) {
        let inside = pointer.inside_window
            && contains(&carousel_region(RENDER_WIDTH, RENDER_HEIGHT), pointer.position);
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            if inside {
                self.carousel.pointer_enter();
            } else {
                self.carousel.pointer_leave();
            }
        }
    }

    fn link_button(&self, cards: &[ProjectedCard]) -> Option<(usize, Rectangle)> {
        let slides = self.carousel.slides();
        hovered_link_button(self.hovered_card, cards, |index| slides[index].link().is_some())
    }

    fn handle_click(&mut self, position: Vector2, cards: &[ProjectedCard]) {
        if let Some(button) = nav_button_at(position, RENDER_WIDTH) {
            match button {
                NavButton::Prev => self.carousel.prev(),
                NavButton::Next => self.carousel.next(),
            }
            return;
        }

        // Opening a link never navigates, even on a side card
        if let Some((index, button)) = self.link_button(cards)
            && contains(&button, position)
        {
            if let Some(link) = self.carousel.slides()[index].link() {
                info!("Opening {}", link);
                open_url(link);
            }
            return;
        }

        let dots = dot_rects(self.carousel.len(), self.carousel.current_index(), self.stage.center.x, DOTS_Y);
        if let Some(index) = dot_at(position, &dots) {
            self.carousel.jump_to(index);
            return;
        }

        if let Some(index) = self.hovered_card
            && index != self.carousel.current_index()
        {
            self.carousel.jump_to(index);
        }
    }

    fn handle_keys(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.carousel.prev();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.carousel.next();
        }
    }

    fn draw_nav_button(&self, d: &mut RaylibDrawHandle, button: NavButton, hovered: bool) {
        let center = nav_button_center(button, RENDER_WIDTH);
        let radius = if hovered { NAV_BUTTON_RADIUS * 1.1 } else { NAV_BUTTON_RADIUS };
        d.draw_circle_v(center, radius, BUTTON_FILL);
        d.draw_circle_lines(center.x as i32, center.y as i32, radius, Color::LIGHTGRAY);
        let glyph = match button {
            NavButton::Prev => "<",
            NavButton::Next => ">",
        };
        let size = 32;
        let width = measure_text(glyph, size);
        d.draw_text(glyph, center.x as i32 - width / 2, center.y as i32 - size / 2, size, Color::WHITE);
    }

    fn draw_overlay(&self, d: &mut RaylibDrawHandle, slide: &Slide, card: &Rectangle, link_button: Option<Rectangle>, pointer: Vector2) {
        d.draw_rectangle_gradient_v(
            card.x as i32,
            card.y as i32,
            card.width as i32,
            card.height as i32,
            Color::new(0, 0, 0, 0),
            Color::new(0, 0, 0, 230),
        );

        let text_width = (card.width - OVERLAY_PADDING * 2.0) as i32;
        let lines = wrap_words(slide.description(), text_width, |s| measure_text(s, BODY_FONT_SIZE));
        let line_height = BODY_FONT_SIZE + 6;
        let button_space = if link_button.is_some() { 60 } else { 0 };

        let x = (card.x + OVERLAY_PADDING) as i32;
        let bottom = (card.y + card.height - OVERLAY_PADDING) as i32 - button_space;
        let mut y = bottom - lines.len() as i32 * line_height;
        d.draw_text(slide.title(), x, y - TITLE_FONT_SIZE - 8, TITLE_FONT_SIZE, Color::WHITE);
        for line in &lines {
            d.draw_text(line, x, y, BODY_FONT_SIZE, with_opacity(Color::WHITE, 0.9));
            y += line_height;
        }

        if let Some(button) = link_button {
            let fill = if contains(&button, pointer) { Color::WHITE } else { Color::LIGHTGRAY };
            d.draw_rectangle_rec(button, fill);
            d.draw_text(
                "Open project",
                button.x as i32 + 20,
                button.y as i32 + 12,
                BODY_FONT_SIZE,
                Color::BLACK,
            );
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, cards: &[ProjectedCard], pointer: Vector2) {
        d.clear_background(BACKGROUND);

        // Back to front
        let mut order: Vec<usize> = (0..self.sprites.len()).collect();
        order.sort_by_key(|&index| cards[index].z_index);
        for index in order {
            let hovered = self.hovered_card == Some(index);
            self.sprites[index].draw(d, &self.stage, self.carousel.slides()[index].title(), hovered);
        }

        // Overlay sits above every card
        if let Some(index) = self.hovered_card {
            let link_button = self.link_button(cards).map(|(_, button)| button);
            self.draw_overlay(d, &self.carousel.slides()[index], &cards[index].bounds, link_button, pointer);
        }

        let hovered_button = nav_button_at(pointer, RENDER_WIDTH);
        self.draw_nav_button(d, NavButton::Prev, hovered_button == Some(NavButton::Prev));
        self.draw_nav_button(d, NavButton::Next, hovered_button == Some(NavButton::Next));

        let current = self.carousel.current_index();
        let dots = dot_rects(self.carousel.len(), current, self.stage.center.x, DOTS_Y);
        for (index, dot) in dots.iter().enumerate() {
            let color = if index == current { PRIMARY } else { MUTED };
            d.draw_rectangle_rec(*dot, color);
        }
    }
}

impl Engine for CarouselScene {
    fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, slides: Vec<Slide>, settings: &Settings) -> Result<Self> {
        let mut sprites = Vec::with_capacity(slides.len());
        for slide in &slides {
            let textures = match load_card_textures(rl, thread, slide.image()) {
                Ok(textures) => Some(textures),
                Err(e) => {
                    warn!("Showing placeholder for \"{}\": {:#}", slide.title(), e);
                    None
                }
            };
            sprites.push(textures);
        }

        let mut carousel = Carousel::with_interval(slides, settings.interval).context("Cannot build carousel")?;
        if settings.start_paused {
            carousel.set_auto_playing(false);
        }

        let sprites = sprites
            .into_iter()
            .enumerate()
            .map(|(index, textures)| SlideSprite::new(textures, carousel.placement_for(index)))
            .collect();

        info!("Carousel ready with {} slides", carousel.len());
        Ok(Self {
            carousel,
            sprites,
            stage: Stage::new(RENDER_WIDTH),
            pointer_inside: false,
            hovered_card: None,
        })
    }

    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        let pointer = Self::read_pointer(rl);
        self.update_hover(&pointer);

        let cards = self.projected_cards();
        self.hovered_card = if self.pointer_inside {
            card_at(pointer.position, &cards)
        } else {
            None
        };

        let before = self.carousel.current_index();
        if pointer.clicked {
            self.handle_click(pointer.position, &cards);
        }
        self.handle_keys(rl);

        let advanced = self.carousel.tick(dt);
        if advanced > 0 {
            debug!("Auto-advanced {} slide(s)", advanced);
        }
        if self.carousel.current_index() != before {
            debug!(
                "Active slide {} -> {} ({})",
                before,
                self.carousel.current_index(),
                self.carousel.current_slide().title()
            );
        }

        for (index, sprite) in self.sprites.iter_mut().enumerate() {
            sprite.retarget(self.carousel.placement_for(index));
            sprite.update(dt);
        }

        let cards = self.projected_cards();
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            self.draw(&mut d, &cards, pointer.position);
        });

        true
    }

    fn shutdown(&mut self) {
        self.carousel.teardown();
    }
}

impl Drop for CarouselScene {
    fn drop(&mut self) {
        self.shutdown();
    }
}
