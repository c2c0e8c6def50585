//! Timed, directional cycling of the slides inside one container.

use std::time::Duration;

use log::debug;

use crate::constants::*;
use crate::error::{Result, SlideshowError};
use crate::host::{ElementId, Host, Style};
use crate::scheduler::{Scheduler, Task};
use crate::slide::Slide;
use crate::state::{Direction, SlidePhase};
use crate::timer::Timer;

pub struct Animation {
    container: ElementId,
    slides: Vec<Slide>,
    current: usize,

    direction: Direction,
    delay: Duration,
    offset: f32,

    timer: Timer,
}

impl Animation {
    /// Binds to the single element in `containers` and enumerates its slides.
    ///
    /// The first slide is shown, the others hidden, and the timer is left
    /// stopped until [`Animation::resume`].
    pub fn new(
        host: &mut impl Host,
        containers: &[ElementId],
        slide_selector: &str,
        direction: Direction,
        delay: Duration,
    ) -> Result<Self> {
        let container = match containers {
            [container] => *container,
            _ => {
                return Err(SlideshowError::Configuration(format!(
                    "a slideshow needs exactly one container, got {}",
                    containers.len()
                )));
            }
        };
        if delay.is_zero() {
            return Err(SlideshowError::Configuration(
                "slide delay must be positive".into(),
            ));
        }

        let elements = host.children(container, slide_selector);
        if elements.is_empty() {
            return Err(SlideshowError::Configuration(format!(
                "no slides matching '{slide_selector}' in container {container:?}"
            )));
        }

        // Computed once; resizing the container later does not move the offset
        let size = host.size(container);
        let offset = match direction {
            Direction::Horizontal => size.width,
            Direction::Vertical => size.height,
        } / OFFSET_DIVISOR;

        let slides = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| {
                let phase = if index == 0 {
                    SlidePhase::Current
                } else {
                    SlidePhase::Hidden
                };
                Slide::new(index, element, phase)
            })
            .collect();

        let animation = Self {
            container,
            slides,
            current: 0,
            direction,
            delay,
            offset,
            timer: Timer::new(delay, Task::Tick { container }),
        };
        for slide in &animation.slides {
            host.set_style(slide.element, &animation.style(slide.phase).with_transition(false));
        }
        debug!(
            "animation on {:?}: {} slides, {} every {:?}, offset {}",
            container,
            animation.slides.len(),
            direction,
            delay,
            offset
        );
        Ok(animation)
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub(crate) fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Autonomous advance to the next slide, wrapping after the last one.
    pub fn tick(&mut self, host: &mut impl Host, scheduler: &mut Scheduler) {
        if self.slides.len() < 2 {
            return;
        }
        let next = (self.current + 1) % self.slides.len();
        debug!("tick {:?}: {} -> {}", self.container, self.current, next);
        self.transition(host, scheduler, next);
    }

    /// Jumps to `index` (clamped to the last slide) and leaves the timer
    /// stopped. Autonomous advance only restarts through [`Animation::resume`].
    pub fn skip_to(&mut self, host: &mut impl Host, scheduler: &mut Scheduler, index: usize) {
        let index = index.min(self.slides.len() - 1);
        self.timer.stop(scheduler);
        if index != self.current {
            debug!("skip {:?}: {} -> {}", self.container, self.current, index);
            self.transition(host, scheduler, index);
        }
        self.timer = Timer::new(self.delay, Task::Tick {
            container: self.container,
        });
    }

    pub fn resume(&mut self, scheduler: &mut Scheduler) {
        self.timer.start(scheduler);
    }

    pub fn pause(&mut self, scheduler: &mut Scheduler) {
        self.timer.stop(scheduler);
    }

    /// Visual completion of an enter or exit started `TRANSITION_DURATION` ago.
    pub fn settle(&mut self, host: &mut impl Host, index: usize, generation: u64) {
        let Some(slide) = self.slides.get_mut(index) else {
            return;
        };
        let Some(phase) = slide.settle(generation) else {
            debug!("stale settle for slide {index} (generation {generation})");
            return;
        };
        let element = slide.element;
        host.set_style(element, &self.style(phase));
    }

    fn transition(&mut self, host: &mut impl Host, scheduler: &mut Scheduler, to: usize) {
        let container = self.container;
        let end = self.style(SlidePhase::Exiting);
        let start = self.style(SlidePhase::Start).with_transition(false);
        let intermediate = self.style(SlidePhase::Entering);

        let outgoing = &mut self.slides[self.current];
        let generation = outgoing.begin(SlidePhase::Exiting);
        host.set_style(outgoing.element, &end);
        outgoing.controller.off(host);
        Timer::once(scheduler, TRANSITION_DURATION, Task::Settle {
            container,
            slide: outgoing.index,
            generation,
        });

        self.current = to;

        // Without the flush between the two writes the host coalesces them
        // and the slide appears in place without animating
        let incoming = &mut self.slides[to];
        incoming.begin(SlidePhase::Start);
        host.set_style(incoming.element, &start);
        host.flush_layout(incoming.element);
        let generation = incoming.begin(SlidePhase::Entering);
        host.set_style(incoming.element, &intermediate);
        incoming.controller.on(host);
        Timer::once(scheduler, TRANSITION_DURATION, Task::Settle {
            container,
            slide: to,
            generation,
        });
    }

    fn style(&self, phase: SlidePhase) -> Style {
        let (opacity, shift) = match phase {
            SlidePhase::Hidden => return Style::HIDDEN,
            SlidePhase::Start => (0.0, -self.offset),
            SlidePhase::Entering | SlidePhase::Current => (1.0, 0.0),
            SlidePhase::Exiting => (0.0, self.offset),
        };
        let (translate_x, translate_y) = match self.direction {
            Direction::Horizontal => (shift, 0.0),
            Direction::Vertical => (0.0, shift),
        };
        Style {
            displayed: true,
            opacity,
            translate_x,
            translate_y,
            transition: true,
        }
    }
}

impl std::fmt::Debug for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Animation")
            .field("container", &self.container)
            .field("current", &self.current)
            .field("len", &self.slides.len())
            .field("direction", &self.direction)
            .field("running", &self.timer.is_running())
            .finish()
    }
}
