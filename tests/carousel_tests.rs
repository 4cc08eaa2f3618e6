//! End-to-end behaviour of the carousel driven through its public API.
//!
//! ## Test Organization
//!
//! 1. **Navigation** - Manual stepping, jumping, wrap-around
//! 2. **Auto-play** - Timer advance, hover pause, teardown
//! 3. **Placement** - Ring layout seen by the renderer

use std::fs;
use std::time::Duration;

use carousel3d::carousel::AutoAdvanceTimer;
use carousel3d::manifest::load_slides;
use carousel3d::state::AutoPlayState;
use carousel3d::{Carousel, Slide};

fn abc() -> Carousel {
    Carousel::new(vec![
        Slide::new("a.png", "A"),
        Slide::new("b.png", "B"),
        Slide::new("c.png", "C"),
    ])
    .unwrap()
}

// ============================================================================
// Navigation Tests
// ============================================================================

#[test]
fn test_next_walks_the_ring_and_wraps() {
    let mut carousel = abc();
    let mut seen = Vec::new();
    for _ in 0..3 {
        carousel.next();
        seen.push(carousel.current_slide().title().to_string());
        assert!(carousel.placement_for(carousel.current_index()).active);
    }
    assert_eq!(seen, ["B", "C", "A"]);
}

#[test]
fn test_prev_wraps_backwards() {
    let mut carousel = abc();
    carousel.prev();
    assert_eq!(carousel.current_slide().title(), "C");
    carousel.prev();
    assert_eq!(carousel.current_slide().title(), "B");
}

#[test]
fn test_jump_goes_directly_and_pauses() {
    let mut carousel = abc();
    carousel.jump_to(2);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(carousel.state(), AutoPlayState::Paused);
}

// ============================================================================
// Auto-play Tests
// ============================================================================

/// Simulates a 60 FPS frame loop for `seconds`.
fn run_frames(carousel: &mut Carousel, seconds: u32) -> u32 {
    let mut advanced = 0;
    for _ in 0..seconds * 60 {
        advanced += carousel.tick(1.0 / 60.0);
    }
    advanced
}

#[test]
fn test_auto_play_cycles_every_interval() {
    let mut carousel = Carousel::with_interval(
        vec![Slide::new("a.png", "A"), Slide::new("b.png", "B")],
        Duration::from_secs(1),
    )
    .unwrap();

    let advanced = run_frames(&mut carousel, 5);
    assert!((4..=5).contains(&advanced), "advanced {advanced} times");
    assert!(carousel.is_auto_playing());
}

#[test]
fn test_hover_freezes_the_ring_until_leave() {
    let mut carousel = abc();
    carousel.pointer_enter();
    assert_eq!(run_frames(&mut carousel, 10), 0);
    assert_eq!(carousel.current_index(), 0);

    carousel.pointer_leave();
    assert!(run_frames(&mut carousel, 5) >= 1);
}

#[test]
fn test_manual_navigation_does_not_resume() {
    let mut carousel = abc();
    carousel.next();
    assert_eq!(run_frames(&mut carousel, 10), 0);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_teardown_is_final_and_repeatable() {
    let mut carousel = abc();
    carousel.teardown();
    carousel.cancel_timer();
    carousel.teardown();
    carousel.pointer_leave();
    assert!(!carousel.is_auto_playing());
    assert_eq!(run_frames(&mut carousel, 10), 0);
}

#[test]
fn test_cancelled_timer_resumes_on_leave() {
    let mut carousel = abc();
    carousel.cancel_timer();
    assert_eq!(carousel.state(), AutoPlayState::Paused);
    carousel.pointer_leave();
    assert!(run_frames(&mut carousel, 5) >= 1);
}

#[test]
fn test_standalone_timer() {
    let mut timer = AutoAdvanceTimer::start(Duration::from_millis(4000));
    assert_eq!(timer.tick(2.0), 0);
    assert_eq!(timer.tick(2.0), 1);
}

// ============================================================================
// Placement Tests
// ============================================================================

#[test]
fn test_only_nearby_slides_are_visible() {
    let slides = (0..7).map(|i| Slide::new(format!("{i}.png"), format!("{i}"))).collect();
    let carousel = Carousel::new(slides).unwrap();
    let offsets: Vec<i32> = carousel
        .placements()
        .iter()
        .filter(|p| p.is_visible())
        .map(|p| p.offset)
        .collect();
    assert_eq!(offsets, [0, 1, 2, -2, -1]);
}

#[test]
fn test_manifest_feeds_the_carousel() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("slides.toml"),
        r#"
[[slide]]
image = "mg.jpg"
title = "MG Arquitectura"
link = "https://www.mgarquitecturauy.com/"

[[slide]]
image = "ferrecar.jpg"
title = "FerreCar Service"
"#,
    )
    .unwrap();

    let mut carousel = Carousel::new(load_slides(dir.path(), None).unwrap()).unwrap();
    assert_eq!(carousel.current_slide().link(), Some("https://www.mgarquitecturauy.com/"));
    carousel.next();
    assert_eq!(carousel.current_slide().title(), "FerreCar Service");
    assert_eq!(carousel.placement_for(0).offset, 1);
}
