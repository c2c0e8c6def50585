//! Timed slideshow widgets with hover and click controllers.
//!
//! A [`Registry`] owns every installed slideshow. Each one cycles the slides
//! of a container on its own timer; controller affordances skip to a slide on
//! hover and pin it on click. Time is virtual: the embedding loop calls
//! [`Registry::advance`] with the frame time.

pub mod animation;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod page;
pub mod registry;
pub mod scheduler;
pub mod slide;
pub mod slideshow;
pub mod source;
pub mod state;
pub mod timer;

#[cfg(feature = "stage")]
pub mod stage;

pub use animation::Animation;
pub use config::{ControllerConfig, SlideshowConfig};
pub use error::{Result, SlideshowError};
pub use host::{ElementId, Host, Marker, Size, Style};
pub use page::Page;
pub use registry::{Binding, Installation, PointerEvent, Registry};
pub use slideshow::{Intent, Slideshow};
pub use state::{ControllerState, Direction, SlidePhase};
