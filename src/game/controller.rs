// Frame loop and screen switching
//
// Each frame: poll input, apply actions against the active screen's registry,
// then repaint the active screen, which rebuilds that registry. Action
// handling itself lives in actions.rs and needs no SDL objects.

use log::{error, info, warn};
use sdl2::EventPump;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::actions::{Registries, apply_actions, new_registries};
use super::context::{ScreenId, UiContext};
use crate::assets::AssetStore;
use crate::error::AppError;
use crate::event::EventRegistry;
use crate::gui::style;
use crate::gui::{GameScreen, MainMenuScreen, SettingsScreen};
use crate::input_system::InputSystem;

pub struct App<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    assets: AssetStore<'a>,
    registries: Registries,
    input: InputSystem,
    ctx: UiContext,
    main_menu: MainMenuScreen,
    game_screen: GameScreen,
    settings_screen: SettingsScreen,
}

impl<'a> App<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        assets: AssetStore<'a>,
        ctx: UiContext,
    ) -> Self {
        App {
            canvas,
            event_pump,
            assets,
            registries: new_registries(),
            input: InputSystem::new(),
            ctx,
            main_menu: MainMenuScreen::new(),
            game_screen: GameScreen::new(),
            settings_screen: SettingsScreen::new(),
        }
    }

    pub fn run(mut self) -> Result<(), AppError> {
        info!("Entering frame loop on {:?}", self.ctx.screen);

        while self.ctx.running {
            self.input.update_context(self.ctx.screen);
            let actions = self.input.poll_events(&mut self.event_pump);
            apply_actions(&mut self.ctx, &mut self.registries, actions);

            match self.draw_frame().map_err(AppError::Sdl) {
                Ok(()) => self.canvas.present(),
                Err(e) => error!("Frame skipped on {:?}: {}", self.ctx.screen, e),
            }

            std::thread::sleep(self.ctx.settings.frame_delay());
        }

        if self.ctx.settings_dirty {
            warn!("Exiting with unsaved settings");
        }
        info!("Frame loop finished");
        Ok(())
    }

    fn draw_frame(&mut self) -> Result<(), String> {
        self.canvas.set_draw_color(style::BLACK);
        self.canvas.clear();

        let screen = self.ctx.screen;
        let registry = self
            .registries
            .entry(screen)
            .or_insert_with(|| EventRegistry::new(screen));

        match screen {
            ScreenId::MainMenu => self.main_menu.render(&mut self.canvas, &self.assets, registry),
            ScreenId::Game => {
                self.game_screen
                    .render(&mut self.canvas, &self.assets, &self.ctx, registry)
            }
            ScreenId::Settings => {
                self.settings_screen
                    .render(&mut self.canvas, &self.ctx, registry)
            }
        }
    }
}
