//! Widget options. Explicit values win, then `data-*` attributes on the
//! element, then the defaults in [`crate::constants`].

use std::time::Duration;

use log::warn;

use crate::constants::*;
use crate::error::{Result, SlideshowError};
use crate::host::{ElementId, Host};
use crate::state::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct SlideshowConfig {
    pub slide_selector: String,
    pub direction: Option<Direction>,
    pub delay: Option<Duration>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            slide_selector: DEFAULT_SLIDE_SELECTOR.to_owned(),
            direction: None,
            delay: None,
        }
    }
}

impl SlideshowConfig {
    pub fn new(slide_selector: impl Into<String>) -> Self {
        Self {
            slide_selector: slide_selector.into(),
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Direction for `container`, falling back to `data-direction`.
    pub fn direction_for(&self, host: &impl Host, container: ElementId) -> Direction {
        self.direction.unwrap_or_else(|| {
            attribute(host, container, DIRECTION_ATTRIBUTE, |value| {
                value.parse::<Direction>()
            })
            .unwrap_or_default()
        })
    }

    /// Delay for `container`, falling back to `data-delay`.
    pub fn delay_for(&self, host: &impl Host, container: ElementId) -> Duration {
        self.delay.unwrap_or_else(|| {
            attribute(host, container, DELAY_ATTRIBUTE, parse_delay).unwrap_or(DEFAULT_DELAY)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControllerConfig {
    /// Selector of the slide the affordances control.
    pub target: Option<String>,
}

impl ControllerConfig {
    pub fn targeting(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
        }
    }

    /// Target selector for `affordance`, falling back to `data-target`.
    pub fn target_for(&self, host: &impl Host, affordance: ElementId) -> Option<String> {
        self.target
            .clone()
            .or_else(|| host.attribute(affordance, TARGET_ATTRIBUTE))
            .filter(|target| !target.trim().is_empty())
    }
}

/// Parses a delay in whole milliseconds; zero and negative values are rejected.
pub fn parse_delay(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(SlideshowError::InvalidDelay(value.to_owned())),
    }
}

fn attribute<T>(
    host: &impl Host,
    element: ElementId,
    name: &str,
    parse: impl Fn(&str) -> Result<T>,
) -> Option<T> {
    let raw = host.attribute(element, name)?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("ignoring {name} on {element:?}: {e}");
            None
        }
    }
}
