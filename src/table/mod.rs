// Card table module
//
// This module holds everything about a game session that does not touch SDL:
// - card.rs: card identifiers and the 52-card deck
// - player.rs: compass seats, players and the game context
// - state.rs: the mutable table state (hand, selection, turns, claims)
// - layout.rs: pixel layout of the table for a given window size
// - error.rs: validation errors raised by table operations

pub mod card;
pub mod error;
pub mod layout;
pub mod player;
pub mod state;

// Re-export main types
pub use card::{Card, Deck};
pub use error::TableError;
pub use layout::{LayoutParams, TableLayout};
pub use player::{Direction, GameContext};
pub use state::GameTableState;
