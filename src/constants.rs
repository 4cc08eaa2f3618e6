pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_INTERVAL_MS: u64 = 4000; // Time between automatic slide changes
pub const TRANSITION_DURATION: f32 = 0.7;       // Time for a slide to reach its new placement (seconds)

// Ring placement
pub const ROTATION_STEP_DEG: f32 = 45.0;      // Rotation per slide of distance from the active one
pub const RECEDED_DEPTH: f32 = -300.0;        // Depth of every inactive slide
pub const SLIDE_SPACING: f32 = 400.0;         // Horizontal distance between neighbouring slides
pub const INACTIVE_SCALE: f32 = 0.7;
pub const DIMMED_OPACITY: f32 = 0.6;
pub const VISIBLE_RADIUS: i32 = 2;            // Slides further than this are fully transparent
pub const ACTIVE_Z_INDEX: i32 = 10;
pub const BASELINE_Z_INDEX: i32 = 5;

// Stage
pub const PERSPECTIVE: f32 = 2000.0;          // Distance of the viewer from the stage plane
pub const CARD_WIDTH: f32 = 700.0;
pub const CARD_HEIGHT: f32 = 450.0;
pub const CARD_BORDER: f32 = 4.0;
pub const STAGE_CENTER_Y: f32 = 480.0;
pub const NAV_BUTTON_RADIUS: f32 = 28.0;
pub const NAV_BUTTON_MARGIN: f32 = 64.0;
pub const DOT_SIZE: f32 = 8.0;
pub const ACTIVE_DOT_WIDTH: f32 = 32.0;
pub const DOT_GAP: f32 = 8.0;
pub const DOTS_Y: f32 = 900.0;

// Overlay
pub const TITLE_FONT_SIZE: i32 = 36;
pub const BODY_FONT_SIZE: i32 = 22;
pub const OVERLAY_PADDING: f32 = 32.0;
