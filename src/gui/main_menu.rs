//! Main Menu Screen
//!
//! Card icon in the top half, PLAY / SETTINGS / QUIT stacked below it.

use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::style;
use super::widgets::{RectButton, draw_texture};
use crate::assets::{AssetStore, CARD_ICON};
use crate::event::ClickRegion;
use crate::game::{ScreenId, UiContext, UiRegistry};
use crate::geometry::{center_in, center_rect};

/// Sizing of the stacked menu buttons
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub button_width: u32,
    pub button_height: u32,
    /// Vertical distance between the tops of two buttons
    pub button_pitch: i32,
    /// Gap between the middle of the window and the first button
    pub top_margin: i32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            button_width: 240,
            button_height: 70,
            button_pitch: 90,
            top_margin: 40,
        }
    }
}

/// Rectangles of the main menu for one window size
#[derive(Debug, Clone, PartialEq)]
pub struct MainMenuLayout {
    pub icon_area: Rect,
    pub play: Rect,
    pub settings: Rect,
    pub quit: Rect,
}

impl MainMenuLayout {
    pub fn compute(style: &MenuStyle, width: u32, height: u32) -> Self {
        let x = (width as i32 - style.button_width as i32) / 2;
        let first_y = height as i32 / 2 + style.top_margin;
        let button = |i: i32| {
            Rect::new(
                x,
                first_y + i * style.button_pitch,
                style.button_width,
                style.button_height,
            )
        };

        MainMenuLayout {
            icon_area: Rect::new(0, 0, width, (height / 2).max(1)),
            play: button(0),
            settings: button(1),
            quit: button(2),
        }
    }
}

/// Registers the menu buttons, in no particular priority since they never overlap
pub fn register_regions(registry: &mut UiRegistry, layout: &MainMenuLayout) {
    registry.register(ClickRegion::button("PLAY", layout.play, |ctx: &mut UiContext| {
        ctx.start_new_game()
    }));
    registry.register(ClickRegion::button(
        "SETTINGS",
        layout.settings,
        |ctx: &mut UiContext| {
            ctx.switch_to(ScreenId::Settings);
            Ok(())
        },
    ));
    registry.register(ClickRegion::button("QUIT", layout.quit, |ctx: &mut UiContext| {
        ctx.quit();
        Ok(())
    }));
}

pub struct MainMenuScreen {
    style: MenuStyle,
    play: RectButton,
    settings: RectButton,
    quit: RectButton,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        MainMenuScreen {
            style: MenuStyle::default(),
            play: RectButton::new("PLAY", style::GREEN),
            settings: RectButton::new("SETTINGS", style::SILVER),
            quit: RectButton::new("QUIT", style::SILVER),
        }
    }

    /// Draws the menu and rebuilds its click regions
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &AssetStore,
        registry: &mut UiRegistry,
    ) -> Result<(), String> {
        registry.clear();

        let (width, height) = canvas.output_size()?;
        let layout = MainMenuLayout::compute(&self.style, width, height);

        canvas.set_draw_color(style::MENU_BACKGROUND);
        canvas.fill_rect(None)?;

        let icon = assets.get(CARD_ICON).map_err(|e| e.to_string())?;
        let query = icon.query();
        let area = layout.icon_area;
        let dest = if query.width <= area.width() && query.height <= area.height() {
            center_in(query.width, query.height, area)
        } else {
            // Shrink oversized art into the top half, keeping its aspect ratio
            let scale = f64::min(
                area.width() as f64 / query.width as f64,
                area.height() as f64 / query.height as f64,
            );
            let w = ((query.width as f64 * scale) as u32).max(1);
            let h = ((query.height as f64 * scale) as u32).max(1);
            center_rect(w, h, area.width(), area.height())
        };
        draw_texture(canvas, icon, dest)?;

        self.play.render(canvas, layout.play)?;
        self.settings.render(canvas, layout.settings)?;
        self.quit.render(canvas, layout.quit)?;

        register_regions(registry, &layout);
        Ok(())
    }
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
