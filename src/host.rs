//! The document/layout collaborator the widgets are installed into.
//!
//! Everything the slideshow needs from its surroundings goes through [`Host`]:
//! element lookup, attribute reads, box sizes, style writes and marker classes.
//! [`crate::page::Page`] is the in-memory implementation shipped with the crate.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
}

impl HostVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Presentation properties written onto a slide element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub displayed: bool,
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    /// Whether property changes animate over the transition duration or snap.
    pub transition: bool,
}

impl Style {
    pub const HIDDEN: Style = Style {
        displayed: false,
        opacity: 0.0,
        translate_x: 0.0,
        translate_y: 0.0,
        transition: false,
    };

    pub fn with_transition(mut self, transition: bool) -> Self {
        self.transition = transition;
        self
    }
}

/// Marker classes toggled on controller affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Current,
    Locked,
}

impl Marker {
    pub fn class_name(self) -> &'static str {
        match self {
            Marker::Current => "current",
            Marker::Locked => "locked",
        }
    }
}

pub trait Host {
    fn version(&self) -> HostVersion;

    /// Elements matching `selector` anywhere in the document, in document order.
    fn select(&self, selector: &str) -> Vec<ElementId>;
    /// Direct children of `parent` matching `selector`, in document order.
    fn children(&self, parent: ElementId, selector: &str) -> Vec<ElementId>;
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn size(&self, element: ElementId) -> Size;
    fn set_style(&mut self, element: ElementId, style: &Style);
    /// Forces pending style writes to be laid out before the next write.
    fn flush_layout(&mut self, element: ElementId) -> Size;

    fn set_marker(&mut self, element: ElementId, marker: Marker, on: bool);
    fn has_marker(&self, element: ElementId, marker: Marker) -> bool;
}
