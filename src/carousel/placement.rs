use crate::constants::*;

/// Where a slide sits on the ring relative to the active slide.
///
/// The rendering layer maps these values to screen geometry; nothing here
/// knows about pixels on screen beyond the ring's own units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Circular distance to the active slide, in `(-n/2, n/2]`.
    pub offset: i32,
    pub active: bool,
    pub rotation_deg: f32,
    pub translate_z: f32,
    pub translate_x: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
}

impl Placement {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Signed distance from `current` to `index` going the short way around a ring of `n` slides.
///
/// Ties on even rings resolve to the positive side, so the result is always in `(-n/2, n/2]`.
pub fn normalized_offset(index: usize, current: usize, n: usize) -> i32 {
    debug_assert!(n > 0);
    let n = n as i64;
    let mut diff = index as i64 - current as i64;
    if diff * 2 > n {
        diff -= n;
    } else if diff * 2 <= -n {
        diff += n;
    }
    diff as i32
}

/// Placement of slide `index` when `current` is active on a ring of `n` slides.
pub fn place(index: usize, current: usize, n: usize) -> Placement {
    let offset = normalized_offset(index, current, n);
    let active = offset == 0;
    let distance = offset.abs();

    let opacity = if distance > VISIBLE_RADIUS {
        0.0
    } else if active {
        1.0
    } else {
        DIMMED_OPACITY
    };

    Placement {
        offset,
        active,
        rotation_deg: offset as f32 * ROTATION_STEP_DEG,
        translate_z: if active { 0.0 } else { RECEDED_DEPTH },
        translate_x: offset as f32 * SLIDE_SPACING,
        scale: if active { 1.0 } else { INACTIVE_SCALE },
        opacity,
        z_index: if active { ACTIVE_Z_INDEX } else { BASELINE_Z_INDEX - distance },
    }
}
