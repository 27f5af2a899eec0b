use thiserror::Error;

use crate::assets::AssetError;
use crate::settings::SettingsError;
use crate::table::TableError;

/// Errors surfaced to the screen controller
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A game action arrived while no game session exists
    #[error("no game session is active")]
    NoActiveGame,

    /// Error string reported by SDL
    #[error("sdl error: {0}")]
    Sdl(String),
}

impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}
