//! Drawable building blocks shared by the screens.
//!
//! Widgets only paint; the screen that draws a widget also registers the
//! matching click region with the same rectangle.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use super::style;
use crate::text::draw_text_centered;

/// Filled rectangle with a centered text label
#[derive(Debug, Clone)]
pub struct RectButton {
    pub label: String,
    pub color: Color,
    pub text_color: Color,
    pub text_scale: u32,
}

impl RectButton {
    pub fn new(label: &str, color: Color) -> Self {
        RectButton {
            label: label.to_string(),
            color,
            text_color: style::TEXT,
            text_scale: 3,
        }
    }

    pub fn with_text_scale(mut self, scale: u32) -> Self {
        self.text_scale = scale;
        self
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, bounds: Rect) -> Result<(), String> {
        self.render_label(canvas, bounds, &self.label, self.color)
    }

    /// Renders with a label and color decided for this frame only
    pub fn render_label(
        &self,
        canvas: &mut Canvas<Window>,
        bounds: Rect,
        label: &str,
        color: Color,
    ) -> Result<(), String> {
        canvas.set_draw_color(color);
        canvas.fill_rect(bounds)?;
        canvas.set_draw_color(style::BORDER);
        canvas.draw_rect(bounds)?;

        if !label.is_empty() {
            draw_text_centered(canvas, label, bounds, self.text_color, self.text_scale)?;
        }
        Ok(())
    }
}

/// Blits a whole texture scaled into `bounds`
pub fn draw_texture(
    canvas: &mut Canvas<Window>,
    texture: &Texture,
    bounds: Rect,
) -> Result<(), String> {
    canvas.copy(texture, None, bounds)
}
