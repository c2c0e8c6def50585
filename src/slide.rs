use crate::controller::Controller;
use crate::host::ElementId;
use crate::state::SlidePhase;

pub struct Slide {
    pub(crate) index: usize,
    pub(crate) element: ElementId,
    pub(crate) phase: SlidePhase,

    // Bumped on every phase request; settle callbacks carrying an older value are stale
    pub(crate) generation: u64,

    pub(crate) controller: Controller,
}

impl Slide {
    pub(crate) fn new(index: usize, element: ElementId, phase: SlidePhase) -> Self {
        Self {
            index,
            element,
            phase,
            generation: 0,
            controller: Controller::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Moves to `phase` and returns the generation a later settle must present.
    pub(crate) fn begin(&mut self, phase: SlidePhase) -> u64 {
        self.phase = phase;
        self.generation += 1;
        self.generation
    }

    /// Completes an in-flight transition if `generation` is still the latest.
    pub(crate) fn settle(&mut self, generation: u64) -> Option<SlidePhase> {
        if generation != self.generation {
            return None;
        }
        let settled = match self.phase {
            SlidePhase::Exiting => SlidePhase::Hidden,
            SlidePhase::Entering => SlidePhase::Current,
            _ => return None,
        };
        self.phase = settled;
        Some(settled)
    }
}

impl std::fmt::Debug for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slide")
            .field("index", &self.index)
            .field("phase", &self.phase)
            .field("generation", &self.generation)
            .field("controller", &self.controller.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_only_honours_the_latest_generation() {
        let mut slide = Slide::new(1, ElementId(4), SlidePhase::Hidden);
        let stale = slide.begin(SlidePhase::Exiting);
        let fresh = slide.begin(SlidePhase::Entering);

        assert_eq!(slide.settle(stale), None);
        assert_eq!(slide.phase(), SlidePhase::Entering);
        assert_eq!(slide.settle(fresh), Some(SlidePhase::Current));
        assert_eq!(slide.phase(), SlidePhase::Current);
        assert_eq!(slide.settle(fresh), None);
        assert_eq!((slide.index(), slide.element()), (1, ElementId(4)));
    }
}
