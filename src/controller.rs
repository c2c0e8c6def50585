use log::debug;

use crate::host::{ElementId, Host, Marker};
use crate::state::ControllerState;

/// Visual state shared by every affordance pointing at one slide.
#[derive(Debug, Default)]
pub struct Controller {
    state: ControllerState,
    affordances: Vec<ElementId>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn affordances(&self) -> &[ElementId] {
        &self.affordances
    }

    /// Adds an affordance and brings its markers in line with the current state.
    pub fn attach(&mut self, host: &mut impl Host, affordance: ElementId) {
        if !self.affordances.contains(&affordance) {
            self.affordances.push(affordance);
        }
        paint(host, affordance, self.state);
    }

    pub fn on(&mut self, host: &mut impl Host) {
        self.set(host, ControllerState::Current);
    }

    pub fn off(&mut self, host: &mut impl Host) {
        self.set(host, ControllerState::Default);
    }

    pub fn lock(&mut self, host: &mut impl Host) {
        self.set(host, ControllerState::Locked);
    }

    fn set(&mut self, host: &mut impl Host, state: ControllerState) {
        if self.state != state {
            debug!("controller {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        for &affordance in &self.affordances {
            paint(host, affordance, state);
        }
    }
}

fn paint(host: &mut impl Host, affordance: ElementId, state: ControllerState) {
    host.set_marker(affordance, Marker::Current, state == ControllerState::Current);
    host.set_marker(affordance, Marker::Locked, state == ControllerState::Locked);
}
