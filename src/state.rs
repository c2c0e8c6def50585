use std::fmt;
use std::str::FromStr;

use crate::error::SlideshowError;

/// Axis slides travel along while entering and leaving.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl FromStr for Direction {
    type Err = SlideshowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Direction::Horizontal),
            "vertical" => Ok(Direction::Vertical),
            _ => Err(SlideshowError::InvalidDirection(s.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Horizontal => "horizontal",
            Direction::Vertical => "vertical",
        })
    }
}

/// Visual phase of a single slide.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlidePhase {
    Hidden,   // Not displayed
    Start,    // Transparent, pre-translated by -offset, about to enter
    Entering, // Animating towards full opacity at rest
    Current,  // At rest and fully visible
    Exiting,  // Fading out while moving on by +offset
}

impl SlidePhase {
    /// Entering and Current both count as the slide on display.
    pub fn is_shown(self) -> bool {
        matches!(self, SlidePhase::Entering | SlidePhase::Current)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ControllerState {
    #[default]
    Default,
    Current,
    Locked,
}
