use raylib::prelude::*;

use crate::constants::*;
use crate::render::projection::ProjectedCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Area in which the pointer counts as hovering the carousel.
pub fn carousel_region(render_width: i32, render_height: i32) -> Rectangle {
    let top = STAGE_CENTER_Y - CARD_HEIGHT * 0.5 - 60.0;
    let bottom = (DOTS_Y + 60.0).min(render_height as f32);
    Rectangle::new(0.0, top.max(0.0), render_width as f32, bottom - top.max(0.0))
}

pub fn nav_button_center(button: NavButton, render_width: i32) -> Vector2 {
    let x = match button {
        NavButton::Prev => NAV_BUTTON_MARGIN,
        NavButton::Next => render_width as f32 - NAV_BUTTON_MARGIN,
    };
    Vector2::new(x, STAGE_CENTER_Y)
}

pub fn nav_button_at(point: Vector2, render_width: i32) -> Option<NavButton> {
    [NavButton::Prev, NavButton::Next].into_iter().find(|&button| {
        let center = nav_button_center(button, render_width);
        let (dx, dy) = (point.x - center.x, point.y - center.y);
        dx * dx + dy * dy <= NAV_BUTTON_RADIUS * NAV_BUTTON_RADIUS
    })
}

/// Indicator row under the stage: the active dot is stretched, the rest are squares.
pub fn dot_rects(count: usize, active: usize, center_x: f32, y: f32) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }
    let total = (count - 1) as f32 * (DOT_SIZE + DOT_GAP) + ACTIVE_DOT_WIDTH;
    let mut x = center_x - total * 0.5;
    (0..count)
        .map(|i| {
            let width = if i == active { ACTIVE_DOT_WIDTH } else { DOT_SIZE };
            let rect = Rectangle::new(x, y, width, DOT_SIZE);
            x += width + DOT_GAP;
            rect
        })
        .collect()
}

pub fn dot_at(point: Vector2, dots: &[Rectangle]) -> Option<usize> {
    // Dots are tiny, give them some slack
    let pad = DOT_GAP * 0.5;
    dots.iter().position(|dot| {
        let hit = Rectangle::new(dot.x - pad, dot.y - pad, dot.width + pad * 2.0, dot.height + pad * 2.0);
        contains(&hit, point)
    })
}

/// Index of the topmost visible card under `point`.
pub fn card_at(point: Vector2, cards: &[ProjectedCard]) -> Option<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|(_, card)| card.is_interactive() && contains(&card.bounds, point))
        .max_by_key(|(index, card)| (card.z_index, *index))
        .map(|(index, _)| index)
}

/// "Open project" button in the bottom-left corner of a card's overlay.
fn link_button_rect(card: &Rectangle) -> Rectangle {
    Rectangle::new(
        card.x + OVERLAY_PADDING,
        card.y + card.height - OVERLAY_PADDING - 44.0,
        190.0,
        44.0,
    )
}

/// Link button of the hovered card, if that slide has a link.
pub fn hovered_link_button(
    hovered: Option<usize>,
    cards: &[ProjectedCard],
    has_link: impl Fn(usize) -> bool,
) -> Option<(usize, Rectangle)> {
    let index = hovered.filter(|&index| has_link(index))?;
    cards.get(index).map(|card| (index, link_button_rect(&card.bounds)))
}

/// Greedy word wrap. `measure` returns the rendered width of a string.
pub fn wrap_words(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
