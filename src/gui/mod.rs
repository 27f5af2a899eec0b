//! Screen GUI
//!
//! One module per screen, plus the shared colors and widgets they draw with.
//!
//! # Architecture
//!
//! Every screen follows the same frame contract:
//! - Clear its [`UiRegistry`](crate::game::UiRegistry) before painting
//! - Paint with SDL2 primitives, textures and the bitmap font
//! - Register one click region per interactive element, topmost first,
//!   using the rectangles it just painted
//!
//! Screens never hold game state; they read it from the
//! [`UiContext`](crate::game::UiContext) each frame.
//!
//! # Available Screens
//!
//! - [`MainMenuScreen`] - PLAY / SETTINGS / QUIT
//! - [`GameScreen`] - the card table
//! - [`SettingsScreen`] - seat and spacing options

pub mod game_screen;
pub mod main_menu;
pub mod settings_screen;
pub mod style;
pub mod widgets;

pub use game_screen::GameScreen;
pub use main_menu::MainMenuScreen;
pub use settings_screen::SettingsScreen;
