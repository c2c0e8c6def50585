use raylib::prelude::*;

use crate::constants::TRANSITION_DURATION;
use crate::host::{ElementId, Style};
use crate::stage::textures::fit_scale;

/// On-screen slide following the styles the slideshow writes to its element.
pub struct Sprite {
    pub element: ElementId,
    texture: Texture2D,

    displayed: bool,
    opacity: f32,
    translate: Vector2,

    tween_opacity: Option<ease::Tween>,
    tween_x: Option<ease::Tween>,
    tween_y: Option<ease::Tween>,
    tween_timer: f32,
}

impl Sprite {
    pub fn new(element: ElementId, texture: Texture2D) -> Self {
        Self {
            element,
            texture,
            displayed: false,
            opacity: 0.0,
            translate: Vector2::new(0.0, 0.0),
            tween_opacity: None,
            tween_x: None,
            tween_y: None,
            tween_timer: 0.0,
        }
    }

    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    pub fn is_visible(&self) -> bool {
        self.displayed && self.opacity > 0.0
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Transitioned styles animate from wherever the sprite is now; others snap.
    pub fn apply(&mut self, style: &Style) {
        let animate = style.transition && self.displayed && style.displayed;
        self.displayed = style.displayed;
        if animate {
            let duration = TRANSITION_DURATION.as_secs_f32();
            let tween =
                |from: f32, to: f32| Some(ease::Tween::new(ease::cubic_out, from, to, duration));
            self.tween_opacity = tween(self.opacity, style.opacity);
            self.tween_x = tween(self.translate.x, style.translate_x);
            self.tween_y = tween(self.translate.y, style.translate_y);
            self.tween_timer = 0.0;
        } else {
            self.tween_opacity = None;
            self.tween_x = None;
            self.tween_y = None;
            self.opacity = style.opacity;
            self.translate = Vector2::new(style.translate_x, style.translate_y);
        }
    }

    pub fn update(&mut self, dt: f32) {
        let (Some(opacity), Some(x), Some(y)) = (
            self.tween_opacity.as_mut(),
            self.tween_x.as_mut(),
            self.tween_y.as_mut(),
        ) else {
            return;
        };
        self.opacity = opacity.apply(dt);
        self.translate.x = x.apply(dt);
        self.translate.y = y.apply(dt);

        self.tween_timer += dt;
        if self.tween_timer >= TRANSITION_DURATION.as_secs_f32() {
            self.tween_opacity = None;
            self.tween_x = None;
            self.tween_y = None;
        }
    }

    /// Draws the texture centred in `bounds`, shifted by the current translation.
    pub fn draw(&self, d: &mut RaylibDrawHandle, bounds: Rectangle) {
        if !self.is_visible() {
            return;
        }
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        let scale = fit_scale(self.texture.width(), self.texture.height(), bounds);
        let width = tex_width * scale;
        let height = tex_height * scale;

        let dest = Rectangle::new(
            bounds.x + (bounds.width - width) * 0.5 + self.translate.x,
            bounds.y + (bounds.height - height) * 0.5 + self.translate.y,
            width,
            height,
        );
        let alpha = (self.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
