// Shared state reached by click callbacks
//
// Every screen's registry dispatches into the same UiContext, so a callback
// can switch screens, edit settings or act on the running game session.

use log::info;
use rand::Rng;
use std::path::PathBuf;

use crate::error::AppError;
use crate::event::EventRegistry;
use crate::settings::Settings;
use crate::table::{Deck, GameContext, GameTableState};

/// Cards dealt to the local player at the start of a game
pub const HAND_SIZE: usize = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    MainMenu,
    Game,
    Settings,
}

impl ScreenId {
    pub const ALL: [ScreenId; 3] = [ScreenId::MainMenu, ScreenId::Game, ScreenId::Settings];
}

pub type UiRegistry = EventRegistry<UiContext, AppError>;

pub struct UiContext {
    pub screen: ScreenId,
    pub running: bool,
    pub settings: Settings,
    pub settings_path: PathBuf,
    /// Settings edited since the last save
    pub settings_dirty: bool,
    table: Option<GameTableState>,
}

impl UiContext {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        UiContext {
            screen: ScreenId::MainMenu,
            running: true,
            settings,
            settings_path,
            settings_dirty: false,
            table: None,
        }
    }

    pub fn switch_to(&mut self, screen: ScreenId) {
        if self.screen != screen {
            info!("Screen: {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }

    /// Leaves the current screen; backing out of the main menu quits
    pub fn back(&mut self) {
        match self.screen {
            ScreenId::MainMenu => self.quit(),
            _ => self.switch_to(ScreenId::MainMenu),
        }
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.running = false;
    }

    pub fn table(&self) -> Option<&GameTableState> {
        self.table.as_ref()
    }

    pub fn table_mut(&mut self) -> Result<&mut GameTableState, AppError> {
        self.table.as_mut().ok_or(AppError::NoActiveGame)
    }

    /// Starts a fresh session with a shuffled deck and opens the game screen
    pub fn start_new_game(&mut self) -> Result<(), AppError> {
        self.start_new_game_with(&mut rand::thread_rng())
    }

    pub fn start_new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), AppError> {
        let context = GameContext::local_table(&self.settings.player_name, self.settings.seat)?;
        let device_player = context.host.clone();
        let mut table = GameTableState::new(device_player, context)?;

        let mut deck = Deck::standard();
        deck.shuffle(rng);
        let dealt = table.deal_from(&mut deck, HAND_SIZE)?;
        table.start_game();

        info!(
            "Started {} as {} ({}), hosted by {}, {} players, {} cards dealt, {} left in deck",
            table.game_id(),
            table.device_player().name,
            table.device_player().direction,
            table.host().name,
            table.players().len(),
            dealt,
            deck.remaining()
        );

        self.table = Some(table);
        self.switch_to(ScreenId::Game);
        Ok(())
    }

    pub fn cycle_seat(&mut self) {
        self.settings.cycle_seat();
        self.settings_dirty = true;
    }

    pub fn cycle_spacing(&mut self) {
        self.settings.cycle_spacing();
        self.settings_dirty = true;
    }

    pub fn save_settings(&mut self) -> Result<(), AppError> {
        self.settings.save_to_file(&self.settings_path)?;
        self.settings_dirty = false;
        Ok(())
    }
}
