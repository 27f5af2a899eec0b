//! Game Table State
//!
//! The mutable side of a game session: who sits where, whose turn it is, the
//! local player's hand and selection, the card each seat has played and how
//! many hands the local player has claimed.
//!
//! # Selection
//!
//! Selecting a card toggles it: selecting the selected card deselects it,
//! selecting another card replaces the selection.
//!
//! # Turn gating
//!
//! `play_selected` and `claim` only succeed while the device player holds the
//! turn, whether or not a UI happens to hide the controls.

use log::debug;
use std::collections::{HashMap, HashSet};

use super::card::{Card, Deck};
use super::error::TableError;
use super::player::{Direction, GameContext, Player};

#[derive(Debug, Clone)]
pub struct GameTableState {
    game_id: String,
    players: Vec<Player>,
    host: Player,
    device_player: Player,
    current_player: Option<Player>,
    hand: Vec<Card>,
    played_by_seat: HashMap<Direction, Card>,
    selected_card: Option<Card>,
    claimed_hands: u32,
    game_started: bool,
}

impl GameTableState {
    /// Sets up a table for `device_player`, who must be one of the context's players
    pub fn new(device_player: Player, context: GameContext) -> Result<Self, TableError> {
        if !context.players.contains(&device_player) {
            return Err(TableError::PlayerNotFound(device_player.name));
        }

        Ok(GameTableState {
            game_id: context.game_id,
            players: context.players,
            host: context.host,
            device_player,
            current_player: None,
            hand: Vec::new(),
            played_by_seat: HashMap::new(),
            selected_card: None,
            claimed_hands: 0,
            game_started: false,
        })
    }

    // === Setup ===

    /// Replaces the local hand. Clears any selection.
    pub fn assign_cards(&mut self, cards: Vec<Card>) -> Result<(), TableError> {
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(duplicate) = cards.iter().find(|card| !seen.insert(**card)) {
            return Err(TableError::DuplicateCard(*duplicate));
        }

        self.hand = cards;
        self.selected_card = None;
        Ok(())
    }

    /// Deals `count` cards from `deck` into the local hand
    pub fn deal_from(&mut self, deck: &mut Deck, count: usize) -> Result<usize, TableError> {
        let cards = deck.deal(count);
        let dealt = cards.len();
        self.assign_cards(cards)?;
        Ok(dealt)
    }

    /// Marks the game as running and hands the first turn to the host
    pub fn start_game(&mut self) {
        self.game_started = true;
        self.current_player = Some(self.host.clone());
        debug!("{}: started, {} to play", self.game_id, self.host.name);
    }

    #[allow(dead_code)] // Reserved for the lobby flow
    pub fn add_player(&mut self, player: Player) -> Result<(), TableError> {
        if self.seat_occupant(player.direction).is_some() {
            return Err(TableError::SeatTaken(player.direction));
        }
        self.players.push(player);
        Ok(())
    }

    /// Removes a player from the table.
    ///
    /// Removing the turn holder leaves no active turn; a removed host passes
    /// hosting to the device player.
    #[allow(dead_code)] // Reserved for the lobby flow
    pub fn remove_player(&mut self, player: &Player) -> Result<(), TableError> {
        if *player == self.device_player {
            return Err(TableError::CannotRemoveDevicePlayer);
        }

        let index = self
            .players
            .iter()
            .position(|p| p == player)
            .ok_or_else(|| TableError::PlayerNotFound(player.name.clone()))?;
        self.players.remove(index);
        self.played_by_seat.remove(&player.direction);

        if self.current_player.as_ref() == Some(player) {
            self.current_player = None;
        }
        if self.host == *player {
            self.host = self.device_player.clone();
        }
        Ok(())
    }

    // === Turn-based actions ===

    /// Toggles the selection of a card in the local hand
    pub fn select_card(&mut self, card: Card) -> Result<(), TableError> {
        if !self.hand.contains(&card) {
            return Err(TableError::CardNotInHand(card));
        }

        self.selected_card = if self.selected_card == Some(card) {
            None
        } else {
            Some(card)
        };
        debug!("{}: selected {:?}", self.game_id, self.selected_card);
        Ok(())
    }

    /// Plays the selected card onto the device player's seat.
    ///
    /// Returns the played card, or `None` if nothing was selected.
    pub fn play_selected(&mut self) -> Result<Option<Card>, TableError> {
        self.ensure_device_turn()?;

        let Some(card) = self.selected_card.take() else {
            return Ok(None);
        };

        if let Some(index) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(index);
        }
        self.played_by_seat.insert(self.device_player.direction, card);
        debug!("{}: {} played {}", self.game_id, self.device_player.name, card);

        Ok(Some(card))
    }

    /// Claims a hand for the local player. Returns the new claimed count.
    pub fn claim(&mut self) -> Result<u32, TableError> {
        self.ensure_device_turn()?;
        self.claimed_hands += 1;
        debug!("{}: claimed hands = {}", self.game_id, self.claimed_hands);
        Ok(self.claimed_hands)
    }

    pub fn set_current_player(&mut self, player: &Player) -> Result<(), TableError> {
        if !self.players.contains(player) {
            return Err(TableError::PlayerNotFound(player.name.clone()));
        }
        self.current_player = Some(player.clone());
        Ok(())
    }

    /// Passes the turn to the next occupied seat clockwise.
    ///
    /// With no active turn, the host gets it.
    pub fn advance_turn(&mut self) -> Option<&Player> {
        let next = match &self.current_player {
            None => Some(self.host.clone()),
            Some(current) => {
                let mut seat = current.direction.next();
                let mut found = None;
                for _ in 0..Direction::CLOCKWISE.len() {
                    if let Some(player) = self.seat_occupant(seat) {
                        found = Some(player.clone());
                        break;
                    }
                    seat = seat.next();
                }
                found
            }
        };

        self.current_player = next;
        if let Some(player) = &self.current_player {
            debug!("{}: turn passes to {}", self.game_id, player.name);
        }
        self.current_player.as_ref()
    }

    fn ensure_device_turn(&self) -> Result<(), TableError> {
        if self.is_device_turn() {
            Ok(())
        } else {
            Err(TableError::NotYourTurn {
                player: self.device_player.name.clone(),
            })
        }
    }

    // === Queries ===

    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn host(&self) -> &Player {
        &self.host
    }

    pub fn device_player(&self) -> &Player {
        &self.device_player
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.as_ref()
    }

    pub fn is_device_turn(&self) -> bool {
        self.current_player.as_ref() == Some(&self.device_player)
    }

    pub fn seat_occupant(&self, direction: Direction) -> Option<&Player> {
        self.players.iter().find(|p| p.direction == direction)
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn selected_card(&self) -> Option<Card> {
        self.selected_card
    }

    pub fn played_card(&self, direction: Direction) -> Option<Card> {
        self.played_by_seat.get(&direction).copied()
    }

    pub fn claimed_hands(&self) -> u32 {
        self.claimed_hands
    }
}
