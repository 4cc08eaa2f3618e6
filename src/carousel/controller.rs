use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::carousel::placement::{Placement, place};
use crate::carousel::timer::AutoAdvanceTimer;
use crate::constants::AUTO_ADVANCE_INTERVAL_MS;
use crate::slide::Slide;
use crate::state::AutoPlayState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    NoSlides,
}

/// Active slide index and auto-play state of one carousel instance.
///
/// Manual navigation pauses auto-play; only [`Carousel::pointer_leave`]
/// (or an explicit `set_auto_playing(true)`) resumes it.
#[derive(Debug)]
pub struct Carousel {
    slides: Vec<Slide>,
    current_index: usize,
    state: AutoPlayState,
    interval: Duration,
    timer: Option<AutoAdvanceTimer>,
    torn_down: bool,
}

impl Carousel {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        Self::with_interval(slides, Duration::from_millis(AUTO_ADVANCE_INTERVAL_MS))
    }

    pub fn with_interval(slides: Vec<Slide>, interval: Duration) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            slides,
            current_index: 0,
            state: AutoPlayState::Playing,
            interval,
            timer: Some(AutoAdvanceTimer::start(interval)),
            torn_down: false,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    // Always false, a carousel holds at least one slide
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current_index]
    }

    pub fn state(&self) -> AutoPlayState {
        self.state
    }

    pub fn is_auto_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next(&mut self) {
        self.set_auto_playing(false);
        self.advance();
    }

    pub fn prev(&mut self) {
        self.set_auto_playing(false);
        let n = self.len();
        self.current_index = (self.current_index + n - 1) % n;
    }

    /// Makes `index` the active slide. Indices outside the ring are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.len() {
            debug!("Ignoring jump to slide {} of {}", index, self.len());
            return;
        }
        self.set_auto_playing(false);
        self.current_index = index;
    }

    pub fn set_auto_playing(&mut self, enabled: bool) {
        let next = AutoPlayState::from(enabled);
        if self.torn_down || next == self.state {
            return;
        }
        self.state = next;
        match next {
            AutoPlayState::Playing => self.timer = Some(AutoAdvanceTimer::start(self.interval)),
            AutoPlayState::Paused => self.timer = None,
        }
        debug!("Auto-play {:?}", self.state);
    }

    pub fn pointer_enter(&mut self) {
        self.set_auto_playing(false);
    }

    pub fn pointer_leave(&mut self) {
        self.set_auto_playing(true);
    }

    /// Releases the auto-advance timer and pauses. Safe to call any number of times.
    pub fn cancel_timer(&mut self) {
        self.timer = None;
        self.state = AutoPlayState::Paused;
    }

    /// Stops the carousel for good: the timer is released and never re-armed.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.cancel_timer();
    }

    /// Feeds `dt` seconds to the auto-advance timer and returns how many slides it advanced.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return 0,
        };
        for _ in 0..fired {
            self.advance();
        }
        fired
    }

    pub fn placement_for(&self, index: usize) -> Placement {
        place(index, self.current_index, self.len())
    }

    pub fn placements(&self) -> Vec<Placement> {
        (0..self.len()).map(|index| self.placement_for(index)).collect()
    }

    // Timer-driven step, leaves auto-play untouched.
    fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("{i}.png"), format!("Slide {i}")))
            .collect()
    }

    fn carousel(n: usize) -> Carousel {
        Carousel::new(slides(n)).unwrap()
    }

    #[test]
    fn starts_on_first_slide_playing() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_auto_playing());
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert!(c.has_timer());
    }

    #[test]
    fn rejects_empty_slide_list() {
        assert_eq!(Carousel::new(Vec::new()).unwrap_err(), CarouselError::NoSlides);
    }

    #[test]
    fn active_iff_current() {
        for n in 1..=8 {
            let mut c = carousel(n);
            for current in 0..n {
                c.jump_to(current);
                for index in 0..n {
                    assert_eq!(c.placement_for(index).active, index == current);
                }
            }
        }
    }

    #[test]
    fn next_n_times_is_identity() {
        for n in 1..=6 {
            let mut c = carousel(n);
            c.jump_to(n / 2);
            let start = c.current_index();
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.current_index(), start);
        }
    }

    #[test]
    fn last_slide_is_one_step_left_of_first() {
        let c = carousel(5);
        assert_eq!(c.placement_for(4).offset, -1);
    }

    #[test]
    fn manual_navigation_stops_auto_play() {
        let mut c = carousel(4);
        c.next();
        assert!(!c.is_auto_playing());

        let mut c = carousel(4);
        c.prev();
        assert!(!c.is_auto_playing());
        assert_eq!(c.current_index(), 3);

        let mut c = carousel(4);
        c.jump_to(2);
        assert!(!c.is_auto_playing());
        assert!(!c.has_timer());
    }

    #[test]
    fn jump_to_current_still_pauses() {
        let mut c = carousel(3);
        c.jump_to(0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.state(), AutoPlayState::Paused);
    }

    #[test]
    fn out_of_range_jump_changes_nothing() {
        let mut c = carousel(3);
        c.jump_to(3);
        c.jump_to(usize::MAX);
        assert_eq!(c.current_index(), 0);
        assert!(c.is_auto_playing());
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let mut c = carousel(3);
        c.pointer_enter();
        assert_eq!(c.state(), AutoPlayState::Paused);
        assert!(!c.has_timer());
        c.pointer_leave();
        assert_eq!(c.state(), AutoPlayState::Playing);
        assert!(c.has_timer());
    }

    #[test]
    fn timer_advances_without_pausing() {
        let mut c = carousel(3);
        assert_eq!(c.tick(3.5), 0);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.tick(0.5), 1);
        assert_eq!(c.current_index(), 1);
        assert!(c.is_auto_playing());
    }

    #[test]
    fn paused_carousel_ignores_time() {
        let mut c = carousel(3);
        c.pointer_enter();
        assert_eq!(c.tick(60.0), 0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn resuming_rearms_a_fresh_period() {
        let mut c = carousel(3);
        c.tick(3.0);
        c.pointer_enter();
        c.pointer_leave();
        assert_eq!(c.tick(3.0), 0);
        assert_eq!(c.tick(1.0), 1);
    }

    #[test]
    fn repeated_resume_keeps_the_running_period() {
        let mut c = carousel(3);
        c.tick(3.0);
        c.set_auto_playing(true);
        assert_eq!(c.tick(1.0), 1);
    }

    #[test]
    fn double_cancel_is_harmless() {
        let mut c = carousel(3);
        c.cancel_timer();
        c.cancel_timer();
        assert!(!c.has_timer());
        assert_eq!(c.is_auto_playing(), c.has_timer());
        assert_eq!(c.tick(100.0), 0);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn leave_after_cancel_rearms() {
        let mut c = carousel(3);
        c.cancel_timer();
        c.pointer_leave();
        assert!(c.is_auto_playing());
        assert!(c.has_timer());
        assert_eq!(c.tick(4.0), 1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn teardown_blocks_rearming() {
        let mut c = carousel(3);
        c.teardown();
        c.teardown();
        assert_eq!(c.is_auto_playing(), c.has_timer());
        c.pointer_enter();
        c.pointer_leave();
        assert!(!c.is_auto_playing());
        assert!(!c.has_timer());
        assert_eq!(c.tick(100.0), 0);
    }

    #[test]
    fn auto_play_flag_always_matches_timer() {
        fn check(c: &Carousel) {
            assert_eq!(c.is_auto_playing(), c.has_timer());
        }

        let mut c = carousel(4);
        check(&c);
        c.next();
        check(&c);
        c.pointer_leave();
        check(&c);
        c.cancel_timer();
        check(&c);
        c.pointer_enter();
        c.pointer_leave();
        check(&c);
        c.teardown();
        check(&c);
        c.set_auto_playing(true);
        check(&c);
    }

    #[test]
    fn three_slides_wrap_forward() {
        let mut c = Carousel::new(vec![
            Slide::new("a.png", "A"),
            Slide::new("b.png", "B"),
            Slide::new("c.png", "C"),
        ])
        .unwrap();

        c.next();
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.current_slide().title(), "B");
        c.next();
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.current_slide().title(), "C");
        c.next();
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current_slide().title(), "A");
    }

    #[test]
    fn jump_skips_intermediate_slides() {
        let mut c = carousel(3);
        c.jump_to(2);
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_auto_playing());
    }

    #[test]
    fn placements_cover_every_slide() {
        let c = carousel(6);
        let placements = c.placements();
        assert_eq!(placements.len(), 6);
        assert_eq!(placements.iter().filter(|p| p.active).count(), 1);
        assert_eq!(placements.iter().filter(|p| p.is_visible()).count(), 5);
    }
}
