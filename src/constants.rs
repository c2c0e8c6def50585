use std::time::Duration;

use crate::host::HostVersion;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000); // Time each slide stays current
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500); // Shared by all slideshows
pub const OFFSET_DIVISOR: f32 = 3.0; // Offset is a third of the container along the transition axis

pub const MIN_HOST_VERSION: HostVersion = HostVersion::new(1, 0);

pub const DEFAULT_SLIDE_SELECTOR: &str = ".slide";
pub const DIRECTION_ATTRIBUTE: &str = "data-direction";
pub const DELAY_ATTRIBUTE: &str = "data-delay";
pub const TARGET_ATTRIBUTE: &str = "data-target";
