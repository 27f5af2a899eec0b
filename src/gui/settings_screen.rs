//! Settings Screen
//!
//! Seat and card spacing are cycled in place; nothing reaches disk until
//! SAVE is pressed. Leaving with unsaved edits keeps them for this session.

use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::style;
use super::widgets::RectButton;
use crate::event::ClickRegion;
use crate::game::{ScreenId, UiContext, UiRegistry};
use crate::text::draw_text_centered;

const BUTTON_WIDTH: u32 = 320;
const BUTTON_HEIGHT: u32 = 70;
const BUTTON_PITCH: i32 = 90;
const FIRST_BUTTON_Y: i32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsLayout {
    pub title: Rect,
    pub seat: Rect,
    pub spacing: Rect,
    pub save: Rect,
    pub back: Rect,
    /// Strip under the buttons for the unsaved-changes note
    pub status: Rect,
}

impl SettingsLayout {
    pub fn compute(width: u32, _height: u32) -> Self {
        let x = (width as i32 - BUTTON_WIDTH as i32) / 2;
        let row = |i: i32| {
            Rect::new(
                x,
                FIRST_BUTTON_Y + i * BUTTON_PITCH,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
        };

        SettingsLayout {
            title: Rect::new(0, 60, width.max(1), 80),
            seat: row(0),
            spacing: row(1),
            save: row(2),
            back: row(3),
            status: Rect::new(0, FIRST_BUTTON_Y + 4 * BUTTON_PITCH, width.max(1), 40),
        }
    }
}

pub fn register_regions(registry: &mut UiRegistry, layout: &SettingsLayout) {
    registry.register(ClickRegion::button("SEAT", layout.seat, |ctx: &mut UiContext| {
        ctx.cycle_seat();
        Ok(())
    }));
    registry.register(ClickRegion::button(
        "SPACING",
        layout.spacing,
        |ctx: &mut UiContext| {
            ctx.cycle_spacing();
            Ok(())
        },
    ));
    registry.register(ClickRegion::button("SAVE", layout.save, |ctx: &mut UiContext| {
        ctx.save_settings()
    }));
    registry.register(ClickRegion::button("BACK", layout.back, |ctx: &mut UiContext| {
        ctx.switch_to(ScreenId::MainMenu);
        Ok(())
    }));
}

pub struct SettingsScreen {
    option: RectButton,
    save: RectButton,
    back: RectButton,
}

impl SettingsScreen {
    pub fn new() -> Self {
        SettingsScreen {
            option: RectButton::new("", style::SILVER),
            save: RectButton::new("SAVE", style::GREEN),
            back: RectButton::new("BACK", style::SILVER),
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        ctx: &UiContext,
        registry: &mut UiRegistry,
    ) -> Result<(), String> {
        registry.clear();

        let (width, height) = canvas.output_size()?;
        let layout = SettingsLayout::compute(width, height);

        canvas.set_draw_color(style::MENU_BACKGROUND);
        canvas.fill_rect(None)?;

        draw_text_centered(canvas, "SETTINGS", layout.title, style::WHITE, 5)?;

        let seat = format!("SEAT: {}", ctx.settings.seat.label());
        self.option
            .render_label(canvas, layout.seat, &seat, self.option.color)?;
        let spacing = format!("SPACING: {}", ctx.settings.card_spacing);
        self.option
            .render_label(canvas, layout.spacing, &spacing, self.option.color)?;
        self.save.render(canvas, layout.save)?;
        self.back.render(canvas, layout.back)?;

        if ctx.settings_dirty {
            draw_text_centered(canvas, "UNSAVED", layout.status, style::WHITE, 2)?;
        }

        register_regions(registry, &layout);
        Ok(())
    }
}

impl Default for SettingsScreen {
    fn default() -> Self {
        Self::new()
    }
}
