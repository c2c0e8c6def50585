//! Per-container coordinator: one animation, its controllers and the lock.
//!
//! Pointer handlers and the public skip/resume/pause calls never touch the
//! animation directly. They are turned into an [`Intent`] and fed to
//! [`Slideshow::dispatch`], the only code that reads or writes the lock.
//! While a slide is pinned nothing but a click may move the display.

use log::debug;

use crate::animation::Animation;
use crate::host::Host;
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Pointer entered an affordance for the given slide.
    Enter(usize),
    /// Pointer left an affordance.
    Leave,
    /// Affordance for the given slide was clicked.
    ToggleLock(usize),
    /// Explicit jump to a slide, e.g. the slide itself was clicked.
    Skip(usize),
    Resume,
    Pause,
}

#[derive(Debug)]
pub struct Slideshow {
    animation: Animation,
    // Target slide pinned by a click, if any
    lock: Option<usize>,
}

impl Slideshow {
    pub fn new(animation: Animation) -> Self {
        Self {
            animation,
            lock: None,
        }
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub(crate) fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub fn lock(&self) -> Option<usize> {
        self.lock
    }

    pub fn dispatch(&mut self, host: &mut impl Host, scheduler: &mut Scheduler, intent: Intent) {
        debug!("{:?} on {:?} (lock {:?})", intent, self.animation.container(), self.lock);
        match intent {
            Intent::Enter(target) => {
                if self.lock.is_none() {
                    self.animation.skip_to(host, scheduler, target);
                }
            }
            Intent::Leave | Intent::Resume => {
                if self.lock.is_none() {
                    self.animation.resume(scheduler);
                }
            }
            Intent::Skip(target) => {
                if self.lock.is_none() {
                    self.animation.skip_to(host, scheduler, target);
                }
            }
            Intent::Pause => self.animation.pause(scheduler),
            Intent::ToggleLock(target) if self.lock == Some(target) => {
                // Still on display, just no longer pinned
                if let Some(slide) = self.animation.slide_mut(target) {
                    slide.controller.on(host);
                }
                self.lock = None;
            }
            Intent::ToggleLock(target) => {
                if let Some(previous) = self.lock.and_then(|held| self.animation.slide_mut(held)) {
                    previous.controller.off(host);
                }
                self.animation.skip_to(host, scheduler, target);
                let target = self.animation.current();
                if let Some(slide) = self.animation.slide_mut(target) {
                    slide.controller.lock(host);
                }
                self.lock = Some(target);
            }
        }
    }

    /// Autonomous advance. A pinned slideshow stops its timer instead of moving.
    pub(crate) fn tick(&mut self, host: &mut impl Host, scheduler: &mut Scheduler) {
        if self.lock.is_some() {
            self.animation.pause(scheduler);
            return;
        }
        self.animation.tick(host, scheduler);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::host::{ElementId, Marker, Size};
    use crate::page::Page;
    use crate::scheduler::Task;
    use crate::state::{ControllerState, Direction};

    struct Fixture {
        page: Page,
        scheduler: Scheduler,
        show: Slideshow,
        thumbs: Vec<ElementId>,
    }

    fn fixture() -> Fixture {
        let mut page = Page::new();
        let container = page.create(None, "show");
        page.set_size(container, Size::new(900.0, 600.0));
        for _ in 0..3 {
            page.create(Some(container), "slide");
        }
        let animation = Animation::new(
            &mut page,
            &[container],
            ".slide",
            Direction::Horizontal,
            Duration::from_millis(2000),
        )
        .unwrap();
        let mut show = Slideshow::new(animation);
        let mut thumbs = Vec::new();
        for index in 0..3 {
            let thumb = page.create(None, "thumb");
            show.animation_mut()
                .slide_mut(index)
                .unwrap()
                .controller
                .attach(&mut page, thumb);
            thumbs.push(thumb);
        }
        show.animation_mut()
            .slide_mut(0)
            .unwrap()
            .controller
            .on(&mut page);
        Fixture {
            page,
            scheduler: Scheduler::new(),
            show,
            thumbs,
        }
    }

    impl Fixture {
        fn send(&mut self, intent: Intent) {
            self.show.dispatch(&mut self.page, &mut self.scheduler, intent);
        }

        fn state(&self, index: usize) -> ControllerState {
            self.show.animation().slide(index).unwrap().controller().state()
        }

        fn run(&mut self, elapsed: u64) {
            self.scheduler.advance(Duration::from_millis(elapsed));
            while let Some(task) = self.scheduler.pop_due() {
                match task {
                    Task::Tick { .. } => self.show.tick(&mut self.page, &mut self.scheduler),
                    Task::Settle { slide, generation, .. } => self
                        .show
                        .animation_mut()
                        .settle(&mut self.page, slide, generation),
                }
            }
        }
    }

    #[test]
    fn hover_skips_and_leave_resumes() {
        let mut f = fixture();
        f.send(Intent::Enter(2));
        assert_eq!(f.show.animation().current(), 2);
        assert_eq!(f.state(0), ControllerState::Default);
        assert_eq!(f.state(2), ControllerState::Current);
        assert!(!f.show.animation().is_running());

        f.send(Intent::Leave);
        assert!(f.show.animation().is_running());
        f.run(2000);
        assert_eq!(f.show.animation().current(), 0);
        assert_eq!(f.state(0), ControllerState::Current);
    }

    #[test]
    fn click_pins_moves_and_releases_the_lock() {
        let mut f = fixture();

        f.send(Intent::ToggleLock(1));
        assert_eq!(f.show.lock(), Some(1));
        assert_eq!(f.show.animation().current(), 1);
        assert_eq!(f.state(1), ControllerState::Locked);
        assert!(f.page.has_marker(f.thumbs[1], Marker::Locked));
        assert!(!f.page.has_marker(f.thumbs[1], Marker::Current));

        f.send(Intent::ToggleLock(2));
        assert_eq!(f.show.lock(), Some(2));
        assert_eq!(f.state(1), ControllerState::Default);
        assert_eq!(f.state(2), ControllerState::Locked);
        assert_eq!(f.show.animation().current(), 2);

        f.send(Intent::ToggleLock(2));
        assert_eq!(f.show.lock(), None);
        assert_eq!(f.state(2), ControllerState::Current);
        assert!(f.page.has_marker(f.thumbs[2], Marker::Current));
    }

    #[test]
    fn locking_the_displayed_slide_pins_it_in_place() {
        let mut f = fixture();
        f.send(Intent::ToggleLock(0));
        assert_eq!(f.show.lock(), Some(0));
        assert_eq!(f.show.animation().current(), 0);
        assert_eq!(f.state(0), ControllerState::Locked);
    }

    #[test]
    fn hover_is_ignored_while_locked() {
        let mut f = fixture();
        f.send(Intent::ToggleLock(1));
        f.send(Intent::Enter(2));
        assert_eq!(f.show.animation().current(), 1);
        f.send(Intent::Leave);
        assert!(!f.show.animation().is_running());

        f.run(10_000);
        assert_eq!(f.show.animation().current(), 1);
        assert_eq!(f.state(1), ControllerState::Locked);
    }

    #[test]
    fn at_most_one_controller_is_locked() {
        let mut f = fixture();
        for target in [0, 2, 1, 1, 2, 0] {
            f.send(Intent::ToggleLock(target));
            let locked = (0..3)
                .filter(|&i| f.state(i) == ControllerState::Locked)
                .count();
            assert!(locked <= 1);
            if let Some(held) = f.show.lock() {
                assert_eq!(f.state(held), ControllerState::Locked);
            }
        }
    }

    #[test]
    fn resume_and_skip_wait_for_the_lock_to_be_released() {
        let mut f = fixture();
        f.send(Intent::ToggleLock(1));

        f.send(Intent::Resume);
        assert!(!f.show.animation().is_running());
        f.run(2000);
        assert_eq!(f.show.animation().current(), 1);

        f.send(Intent::Skip(2));
        assert_eq!(f.show.animation().current(), 1);
        assert_eq!(f.state(1), ControllerState::Locked);
        assert!(f.page.has_marker(f.thumbs[1], Marker::Locked));

        f.send(Intent::ToggleLock(1));
        let current = (0..3)
            .filter(|&i| f.state(i) == ControllerState::Current)
            .collect::<Vec<_>>();
        assert_eq!(current, vec![1]);

        f.send(Intent::Resume);
        f.run(2000);
        assert_eq!(f.show.animation().current(), 2);
    }

    #[test]
    fn pinned_slideshow_ignores_a_stray_tick() {
        let mut f = fixture();
        f.send(Intent::ToggleLock(1));
        f.show.animation_mut().resume(&mut f.scheduler);

        f.run(2000);
        assert_eq!(f.show.animation().current(), 1);
        assert!(!f.show.animation().is_running());
        assert_eq!(f.state(1), ControllerState::Locked);
    }

    #[test]
    fn pause_is_idempotent_through_the_reducer() {
        let mut f = fixture();
        f.send(Intent::Resume);
        f.send(Intent::Pause);
        f.send(Intent::Pause);
        f.run(4000);
        assert_eq!(f.show.animation().current(), 0);
    }
}
