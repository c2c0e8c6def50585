//! End-to-end runs through the public widget API on an in-memory page.
use std::time::Duration;

use slideshow::constants::TRANSITION_DURATION;
use slideshow::{
    ControllerConfig, ControllerState, ElementId, Host, Marker, Page, PointerEvent, Registry,
    Size, SlidePhase, SlideshowConfig,
};

struct Gallery {
    page: Page,
    registry: Registry,
    show: ElementId,
    slides: Vec<ElementId>,
    thumbs: Vec<ElementId>,
}

fn gallery(count: usize) -> Gallery {
    let mut page = Page::new();
    let show = page.create(None, "show");
    page.set_size(show, Size::new(900.0, 500.0));
    page.set_attribute(show, "data-direction", "horizontal");
    page.set_attribute(show, "data-delay", "2000");
    let slides: Vec<_> = (0..count)
        .map(|i| {
            let slide = page.create(Some(show), "slide");
            page.set_attribute(slide, "id", &format!("slide-{i}"));
            slide
        })
        .collect();
    let thumbs: Vec<_> = (0..count)
        .map(|i| {
            let thumb = page.create(None, "thumb");
            page.set_attribute(thumb, "data-target", &format!("#slide-{i}"));
            thumb
        })
        .collect();

    let mut registry = Registry::new(&page).unwrap();
    registry.install_slideshow(&mut page, ".show", &SlideshowConfig::default());
    registry.install_controller(&mut page, ".thumb", &ControllerConfig::default());
    Gallery {
        page,
        registry,
        show,
        slides,
        thumbs,
    }
}

impl Gallery {
    fn wait(&mut self, ms: u64) {
        self.registry.advance(&mut self.page, Duration::from_millis(ms));
    }

    fn current(&self) -> usize {
        self.registry.slideshow(self.show).unwrap().animation().current()
    }

    fn controller(&self, index: usize) -> ControllerState {
        self.registry
            .slideshow(self.show)
            .unwrap()
            .animation()
            .slide(index)
            .unwrap()
            .controller()
            .state()
    }

    fn pointer(&mut self, index: usize, event: PointerEvent) {
        let thumb = self.thumbs[index];
        self.registry.pointer(&mut self.page, thumb, event);
    }
}

#[test]
fn skip_then_resume_wraps_around() {
    let mut g = gallery(3);
    assert_eq!(g.current(), 0);
    assert_eq!(g.registry.slideshow(g.show).unwrap().animation().offset(), 300.0);

    let last = g.slides[2];
    g.registry.skip_to_slide(&mut g.page, last);
    assert_eq!(g.current(), 2);
    assert!(!g.registry.slideshow(g.show).unwrap().animation().is_running());

    g.registry.resume(&mut g.page, g.show);
    g.wait(2000);
    assert_eq!(g.current(), 0);
}

#[test]
fn exactly_one_slide_on_display_after_any_skip() {
    let mut g = gallery(4);
    for target in [3, 1, 1, 0, 2] {
        let element = g.slides[target];
        g.registry.skip_to_slide(&mut g.page, element);
        let animation = g.registry.slideshow(g.show).unwrap().animation();
        let shown: Vec<_> = animation
            .slides()
            .iter()
            .filter(|slide| slide.phase().is_shown())
            .map(|slide| slide.index())
            .collect();
        assert_eq!(shown, vec![target]);
        g.wait(100);
    }
}

#[test]
fn autoplay_settles_outgoing_slides_hidden() {
    let mut g = gallery(3);
    g.wait(2000 + TRANSITION_DURATION.as_millis() as u64);
    let animation = g.registry.slideshow(g.show).unwrap().animation();
    assert_eq!(animation.current(), 1);
    assert_eq!(animation.slide(0).unwrap().phase(), SlidePhase::Hidden);
    assert_eq!(animation.slide(1).unwrap().phase(), SlidePhase::Current);
    assert_eq!(g.controller(1), ControllerState::Current);
    assert!(g.page.has_marker(g.thumbs[1], Marker::Current));
    assert!(!g.page.has_marker(g.thumbs[0], Marker::Current));
}

#[test]
fn hover_browses_and_leave_restarts_autoplay() {
    let mut g = gallery(3);
    g.pointer(2, PointerEvent::Enter);
    assert_eq!(g.current(), 2);
    g.wait(5000);
    assert_eq!(g.current(), 2);

    g.pointer(2, PointerEvent::Leave);
    g.wait(2000);
    assert_eq!(g.current(), 0);
}

#[test]
fn lock_protocol_across_affordances() {
    let mut g = gallery(3);

    g.pointer(1, PointerEvent::Click);
    assert_eq!(g.registry.slideshow(g.show).unwrap().lock(), Some(1));
    assert_eq!(g.controller(1), ControllerState::Locked);

    // Hover and leave are inert while pinned
    g.pointer(2, PointerEvent::Enter);
    g.pointer(2, PointerEvent::Leave);
    g.wait(10_000);
    assert_eq!(g.current(), 1);

    g.pointer(2, PointerEvent::Click);
    assert_eq!(g.controller(1), ControllerState::Default);
    assert_eq!(g.controller(2), ControllerState::Locked);
    assert_eq!(g.current(), 2);

    g.pointer(2, PointerEvent::Click);
    assert_eq!(g.registry.slideshow(g.show).unwrap().lock(), None);
    assert_eq!(g.controller(2), ControllerState::Current);

    // Unlocked again: leaving resumes autoplay
    g.pointer(2, PointerEvent::Leave);
    g.wait(2000);
    assert_eq!(g.current(), 0);
}

#[test]
fn several_affordances_share_one_controller() {
    let mut g = gallery(2);
    let extra = g.page.create(None, "extra");
    g.page.set_attribute(extra, "data-target", "#slide-1");
    let bound = g
        .registry
        .install_controller(&mut g.page, ".extra", &ControllerConfig::default());
    assert_eq!(bound, vec![extra]);

    g.registry.pointer(&mut g.page, extra, PointerEvent::Click);
    assert!(g.page.has_marker(extra, Marker::Locked));
    assert!(g.page.has_marker(g.thumbs[1], Marker::Locked));

    // Same target through the other affordance releases the lock
    g.pointer(1, PointerEvent::Click);
    assert!(g.page.has_marker(extra, Marker::Current));
    assert!(!g.page.has_marker(extra, Marker::Locked));
}
