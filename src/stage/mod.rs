//! Interactive raylib front end: one slideshow filling the window and a
//! strip of thumbnail controllers along the bottom.

pub mod sprite;
pub mod textures;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use log::{info, warn};
use raylib::prelude::*;

use crate::config::{ControllerConfig, SlideshowConfig};
use crate::host::{ElementId, Host, Marker, Size};
use crate::page::{Op, Page};
use crate::registry::{PointerEvent, Registry};
use crate::state::Direction;
use sprite::Sprite;
use textures::{fit_scale, load_texture_with_exif_rotation};

pub const FPS: u32 = 60;
const STRIP_HEIGHT: f32 = 120.0; // Thumbnail strip below the slides
const THUMB_GAP: f32 = 8.0;

#[derive(Debug, Clone)]
pub struct StageOptions {
    pub width: i32,
    pub height: i32,
    pub direction: Option<Direction>,
    pub delay: Option<Duration>,
}

struct Thumb {
    element: ElementId,
    sprite: usize,
    bounds: Rectangle,
}

pub struct Stage {
    page: Page,
    registry: Registry,
    container: ElementId,
    bounds: Rectangle,
    sprites: Vec<Sprite>,
    thumbs: Vec<Thumb>,
    hovered: Option<ElementId>,
}

impl Stage {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        paths: Vec<PathBuf>,
        options: &StageOptions,
    ) -> Result<Self> {
        let mut page = Page::new();
        let mut registry = Registry::new(&page)?;

        let bounds = Rectangle::new(
            0.0,
            0.0,
            options.width as f32,
            options.height as f32 - STRIP_HEIGHT,
        );
        let container = page.create(None, "show");
        page.set_size(container, Size::new(bounds.width, bounds.height));

        let mut sprites = Vec::new();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(texture) => {
                    let element = page.create(Some(container), "slide");
                    page.set_attribute(element, "id", &format!("slide-{}", sprites.len()));
                    sprites.push(Sprite::new(element, texture));
                }
                Err(e) => warn!("skipping {}: {:#}", path.display(), e),
            }
        }
        if sprites.is_empty() {
            bail!("no slides could be loaded");
        }

        let count = sprites.len() as f32;
        let thumb_width = ((options.width as f32 - THUMB_GAP) / count - THUMB_GAP).min(160.0);
        let thumb_height = STRIP_HEIGHT - 2.0 * THUMB_GAP;
        let strip_width = count * (thumb_width + THUMB_GAP) - THUMB_GAP;
        let left = (options.width as f32 - strip_width) * 0.5;
        let thumbs = (0..sprites.len())
            .map(|index| {
                let element = page.create(None, "thumb");
                page.set_attribute(element, "data-target", &format!("#slide-{index}"));
                Thumb {
                    element,
                    sprite: index,
                    bounds: Rectangle::new(
                        left + index as f32 * (thumb_width + THUMB_GAP),
                        bounds.height + THUMB_GAP,
                        thumb_width,
                        thumb_height,
                    ),
                }
            })
            .collect();

        let config = SlideshowConfig {
            direction: options.direction,
            delay: options.delay,
            ..SlideshowConfig::default()
        };
        let installation = registry.install_slideshow(&mut page, ".show", &config);
        if let Some((_, e)) = installation.failed.into_iter().next() {
            bail!("slideshow could not be installed: {e}");
        }
        registry.install_controller(&mut page, ".thumb", &ControllerConfig::default());
        info!("stage ready with {} slides", sprites.len());

        Ok(Self {
            page,
            registry,
            container,
            bounds,
            sprites,
            thumbs,
            hovered: None,
        })
    }

    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        while !rl.window_should_close() {
            let dt = rl.get_frame_time();
            self.handle_input(rl);
            self.registry
                .advance(&mut self.page, Duration::from_secs_f32(dt));
            self.sync();
            for sprite in self.sprites.iter_mut() {
                sprite.update(dt);
            }

            let mut d = rl.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            self.draw(&mut d);
        }
    }

    fn handle_input(&mut self, rl: &RaylibHandle) {
        if rl.is_key_pressed(KeyboardKey::KEY_P) {
            info!("paused");
            self.registry.pause(&mut self.page, self.container);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            info!("resumed");
            self.registry.resume(&mut self.page, self.container);
        }

        let mouse = rl.get_mouse_position();
        let hit = self
            .thumbs
            .iter()
            .find(|thumb| thumb.bounds.check_collision_point_rec(mouse))
            .map(|thumb| thumb.element);
        if hit != self.hovered {
            if let Some(previous) = self.hovered {
                self.registry.pointer(&mut self.page, previous, PointerEvent::Leave);
            }
            if let Some(current) = hit {
                self.registry.pointer(&mut self.page, current, PointerEvent::Enter);
            }
            self.hovered = hit;
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(thumb) = hit {
                self.registry.pointer(&mut self.page, thumb, PointerEvent::Click);
            } else if self.bounds.check_collision_point_rec(mouse) {
                // The slide in front is the one being clicked
                let clicked = self
                    .sprites
                    .iter()
                    .filter(|sprite| sprite.is_visible())
                    .max_by(|a, b| a.opacity().total_cmp(&b.opacity()))
                    .map(|sprite| sprite.element);
                if let Some(element) = clicked {
                    self.registry.skip_to_slide(&mut self.page, element);
                }
            }
        }
    }

    /// Replays the style writes of this frame onto the sprites, in order.
    fn sync(&mut self) {
        for op in self.page.take_journal() {
            if let Op::Style(element, style) = op {
                if let Some(sprite) = self.sprites.iter_mut().find(|s| s.element == element) {
                    sprite.apply(&style);
                }
            }
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        for sprite in &self.sprites {
            sprite.draw(d, self.bounds);
        }

        for thumb in &self.thumbs {
            let texture = self.sprites[thumb.sprite].texture();
            let scale = fit_scale(texture.width(), texture.height(), thumb.bounds);
            let width = texture.width() as f32 * scale;
            let height = texture.height() as f32 * scale;
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                Rectangle::new(
                    thumb.bounds.x + (thumb.bounds.width - width) * 0.5,
                    thumb.bounds.y + (thumb.bounds.height - height) * 0.5,
                    width,
                    height,
                ),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
            if self.page.has_marker(thumb.element, Marker::Locked) {
                d.draw_rectangle_lines_ex(thumb.bounds, 4.0, Color::RED);
            } else if self.page.has_marker(thumb.element, Marker::Current) {
                d.draw_rectangle_lines_ex(thumb.bounds, 2.0, Color::WHITE);
            }
        }

        if let Some(show) = self.registry.slideshow(self.container) {
            let animation = show.animation();
            let status = match (show.lock(), animation.is_running()) {
                (Some(_), _) => "locked",
                (None, true) => "playing",
                (None, false) => "paused",
            };
            d.draw_text(
                &format!("{} / {}  {}", animation.current() + 1, animation.len(), status),
                10,
                10,
                20,
                Color::RAYWHITE,
            );
        }
    }
}
