use thiserror::Error;

use super::card::Card;
use super::player::Direction;

/// Errors raised by table setup and table mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Player is not seated at this table
    #[error("change player error: {0:?} not found in game")]
    PlayerNotFound(String),

    /// A turn-gated action was attempted while another player holds the turn
    #[error("not {player}'s turn")]
    NotYourTurn { player: String },

    /// Card is not part of the local hand
    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),

    /// Hand would contain the same card twice
    #[error("card {0} dealt more than once")]
    DuplicateCard(Card),

    /// Text is not a card id such as "c1" or "hX"
    #[error("invalid card id: {0:?}")]
    InvalidCard(String),

    /// Seat already has a player
    #[error("seat {0} is already taken")]
    SeatTaken(Direction),

    #[error("the device player cannot leave the table")]
    CannotRemoveDevicePlayer,

    /// Host named in a game context is not one of its players
    #[error("host {0:?} is not seated at the table")]
    HostNotSeated(String),
}
