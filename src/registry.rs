//! Owner of every installed slideshow and the entry point for host events.

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info, warn};

use crate::animation::Animation;
use crate::config::{ControllerConfig, SlideshowConfig};
use crate::constants::MIN_HOST_VERSION;
use crate::error::{Result, SlideshowError};
use crate::host::{ElementId, Host};
use crate::scheduler::{Scheduler, Task};
use crate::slideshow::{Intent, Slideshow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
}

/// Where an element sits: its container and the slide index it is or targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub container: ElementId,
    pub slide: usize,
}

/// Outcome of [`Registry::install_slideshow`]. A container that cannot host
/// a slideshow fails alone; the rest of the selection is still installed.
#[derive(Debug, Default, PartialEq)]
pub struct Installation {
    pub bound: Vec<ElementId>,
    pub failed: Vec<(ElementId, SlideshowError)>,
}

#[derive(Debug)]
pub struct Registry {
    scheduler: Scheduler,
    slideshows: HashMap<ElementId, Slideshow>,
    slides: HashMap<ElementId, Binding>,
    affordances: HashMap<ElementId, Binding>,
}

impl Registry {
    /// Fails when the host is older than the widgets can work with.
    pub fn new(host: &impl Host) -> Result<Self> {
        let found = host.version();
        if found < MIN_HOST_VERSION {
            return Err(SlideshowError::MissingDependency {
                found,
                required: MIN_HOST_VERSION,
            });
        }
        Ok(Self {
            scheduler: Scheduler::new(),
            slideshows: HashMap::new(),
            slides: HashMap::new(),
            affordances: HashMap::new(),
        })
    }

    pub fn now(&self) -> u64 {
        self.scheduler.now()
    }

    pub fn slideshow(&self, container: ElementId) -> Option<&Slideshow> {
        self.slideshows.get(&container)
    }

    pub fn slide_binding(&self, element: ElementId) -> Option<Binding> {
        self.slides.get(&element).copied()
    }

    pub fn affordance_binding(&self, element: ElementId) -> Option<Binding> {
        self.affordances.get(&element).copied()
    }

    /// Turns every element matching `selector` into a running slideshow.
    /// Containers already bound are left alone and reported as bound.
    pub fn install_slideshow(
        &mut self,
        host: &mut impl Host,
        selector: &str,
        config: &SlideshowConfig,
    ) -> Installation {
        let mut installation = Installation::default();
        for container in host.select(selector) {
            if self.slideshows.contains_key(&container) {
                debug!("{container:?} is already a slideshow");
                installation.bound.push(container);
                continue;
            }
            let direction = config.direction_for(&*host, container);
            let delay = config.delay_for(&*host, container);
            let mut animation =
                match Animation::new(host, &[container], &config.slide_selector, direction, delay) {
                    Ok(animation) => animation,
                    Err(e) => {
                        warn!("no slideshow on {container:?}: {e}");
                        installation.failed.push((container, e));
                        continue;
                    }
                };
            for slide in animation.slides() {
                self.slides.insert(slide.element(), Binding {
                    container,
                    slide: slide.index(),
                });
            }
            animation.resume(&mut self.scheduler);
            info!(
                "slideshow installed on {container:?}: {} slides, {direction}, {delay:?}",
                animation.len()
            );
            self.slideshows.insert(container, Slideshow::new(animation));
            installation.bound.push(container);
        }
        installation
    }

    /// Attaches every element matching `selector` to the controller of its
    /// target slide. Elements whose target does not resolve to an installed
    /// slide are skipped. The first bound affordance's target is shown as current.
    pub fn install_controller(
        &mut self,
        host: &mut impl Host,
        selector: &str,
        config: &ControllerConfig,
    ) -> Vec<ElementId> {
        let mut bound = Vec::new();
        for affordance in host.select(selector) {
            if self.affordances.contains_key(&affordance) {
                debug!("{affordance:?} is already a controller");
                continue;
            }
            let Some(target) = config.target_for(&*host, affordance) else {
                debug!("{affordance:?} has no target");
                continue;
            };
            let resolved = host.select(&target).into_iter().next();
            let Some(binding) = resolved.and_then(|element| self.slide_binding(element)) else {
                debug!("target '{target}' of {affordance:?} is not a slide");
                continue;
            };
            let Some(slide) = self
                .slideshows
                .get_mut(&binding.container)
                .and_then(|show| show.animation_mut().slide_mut(binding.slide))
            else {
                continue;
            };
            slide.controller.attach(host, affordance);
            if bound.is_empty() {
                slide.controller.on(host);
            }
            self.affordances.insert(affordance, binding);
            bound.push(affordance);
        }
        info!("{} controllers installed for '{selector}'", bound.len());
        bound
    }

    /// Skips the owning slideshow to `element`. Elements that are not slides are ignored.
    pub fn skip_to_slide(&mut self, host: &mut impl Host, element: ElementId) {
        let Some(binding) = self.slide_binding(element) else {
            debug!("{element:?} is not a slide");
            return;
        };
        self.dispatch(host, binding.container, Intent::Skip(binding.slide));
    }

    /// Restarts autoplay unless a slide is pinned.
    pub fn resume(&mut self, host: &mut impl Host, container: ElementId) {
        self.dispatch(host, container, Intent::Resume);
    }

    pub fn pause(&mut self, host: &mut impl Host, container: ElementId) {
        self.dispatch(host, container, Intent::Pause);
    }

    /// Routes a pointer event on a controller affordance to its slideshow.
    pub fn pointer(&mut self, host: &mut impl Host, affordance: ElementId, event: PointerEvent) {
        let Some(binding) = self.affordance_binding(affordance) else {
            return;
        };
        let intent = match event {
            PointerEvent::Enter => Intent::Enter(binding.slide),
            PointerEvent::Leave => Intent::Leave,
            PointerEvent::Click => Intent::ToggleLock(binding.slide),
        };
        self.dispatch(host, binding.container, intent);
    }

    fn dispatch(&mut self, host: &mut impl Host, container: ElementId, intent: Intent) {
        if let Some(show) = self.slideshows.get_mut(&container) {
            show.dispatch(host, &mut self.scheduler, intent);
        }
    }

    /// Moves time forward by `elapsed` and runs everything that came due, in order.
    pub fn advance(&mut self, host: &mut impl Host, elapsed: Duration) {
        self.scheduler.advance(elapsed);
        while let Some(task) = self.scheduler.pop_due() {
            match task {
                Task::Tick { container } => {
                    if let Some(show) = self.slideshows.get_mut(&container) {
                        show.tick(host, &mut self.scheduler);
                    }
                }
                Task::Settle {
                    container,
                    slide,
                    generation,
                } => {
                    if let Some(show) = self.slideshows.get_mut(&container) {
                        show.animation_mut().settle(host, slide, generation);
                    }
                }
            }
        }
    }
}
