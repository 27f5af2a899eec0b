use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::TableError;

/// Compass seat at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Seating cycle used for turn order and opponent placement
    pub const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Next seat clockwise
    pub fn next(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % Self::CLOCKWISE.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A participant in a game session. The direction doubles as the seat key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub direction: Direction,
}

impl Player {
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Player {
            name: name.into(),
            direction,
        }
    }
}

/// Snapshot used to set up a table
#[derive(Debug, Clone)]
pub struct GameContext {
    pub game_id: String,
    pub players: Vec<Player>,
    pub host: Player,
}

impl GameContext {
    /// Validates that every player has their own seat and that the host is seated
    pub fn new(
        game_id: impl Into<String>,
        players: Vec<Player>,
        host: Player,
    ) -> Result<Self, TableError> {
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|other| other.direction == player.direction) {
                return Err(TableError::SeatTaken(player.direction));
            }
        }

        if !players.contains(&host) {
            return Err(TableError::HostNotSeated(host.name));
        }

        Ok(GameContext {
            game_id: game_id.into(),
            players,
            host,
        })
    }

    /// Four-seat hot-seat table hosted by the local player.
    ///
    /// Empty seats are filled with players named after their direction.
    pub fn local_table(name: &str, seat: Direction) -> Result<Self, TableError> {
        let host = Player::new(name, seat);
        let players = Direction::CLOCKWISE
            .iter()
            .map(|&direction| {
                if direction == seat {
                    host.clone()
                } else {
                    Player::new(direction.label(), direction)
                }
            })
            .collect();

        GameContext::new(new_game_id(), players, host)
    }
}

/// Timestamped session id, e.g. `game-20250101-120000`
pub fn new_game_id() -> String {
    format!("game-{}", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_cycle() {
        assert_eq!(Direction::North.next(), Direction::East);
        assert_eq!(Direction::West.next(), Direction::North);

        let mut seat = Direction::South;
        for _ in 0..4 {
            seat = seat.next();
        }
        assert_eq!(seat, Direction::South);
    }

    #[test]
    fn test_context_rejects_shared_seat() {
        let a = Player::new("a", Direction::North);
        let b = Player::new("b", Direction::North);
        let result = GameContext::new("g", vec![a.clone(), b], a);
        assert_eq!(result.unwrap_err(), TableError::SeatTaken(Direction::North));
    }

    #[test]
    fn test_context_rejects_unseated_host() {
        let a = Player::new("a", Direction::North);
        let host = Player::new("host", Direction::South);
        let result = GameContext::new("g", vec![a], host);
        assert_eq!(
            result.unwrap_err(),
            TableError::HostNotSeated("host".to_string())
        );
    }

    #[test]
    fn test_local_table_fills_all_seats() {
        let context = GameContext::local_table("Alex", Direction::East).unwrap();

        assert_eq!(context.players.len(), 4);
        assert_eq!(context.host, Player::new("Alex", Direction::East));
        assert!(context.players.contains(&context.host));
        assert!(context.players.contains(&Player::new("WEST", Direction::West)));
        assert!(context.game_id.starts_with("game-"));
    }
}
