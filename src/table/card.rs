//! Playing cards and the deck they are dealt from.
//!
//! A card is identified by a two-character id: the suit letter followed by
//! the rank letter (`c1` is the ace of clubs, `hX` the ten of hearts). The same
//! id names the card's front texture in the asset store.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

use super::error::TableError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Spades => 's',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|suit| suit.letter() == letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Single-character rank code; ten is `X` so every id stays two characters
    pub fn letter(self) -> char {
        match self {
            Rank::Ace => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'X',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|rank| rank.letter() == letter)
    }
}

/// One of the 52 standard playing cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    /// All 52 cards, suit-major
    pub fn all() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }

    /// Texture key of this card's front image
    pub fn asset_key(&self) -> String {
        format!("cards/fronts/{}", self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank.letter())
    }
}

impl FromStr for Card {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(suit), Some(rank), None) => {
                Suit::from_letter(suit).zip(Rank::from_letter(rank.to_ascii_uppercase()))
            }
            _ => None,
        };

        parsed
            .map(|(suit, rank)| Card::new(suit, rank))
            .ok_or_else(|| TableError::InvalidCard(s.to_string()))
    }
}

/// Draw pile of cards
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Fresh, unshuffled 52-card deck
    pub fn standard() -> Self {
        Deck { cards: Card::all() }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals up to `count` cards off the top. Returns fewer if the deck runs low.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let split_at = self.cards.len().saturating_sub(count);
        let mut dealt = self.cards.split_off(split_at);
        dealt.reverse();
        dealt
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_card_id_parsing() {
        assert_eq!("c1".parse::<Card>(), Ok(Card::new(Suit::Clubs, Rank::Ace)));
        assert_eq!("hX".parse::<Card>(), Ok(Card::new(Suit::Hearts, Rank::Ten)));
        assert_eq!("sq".parse::<Card>(), Ok(Card::new(Suit::Spades, Rank::Queen)));
        assert_eq!(Card::new(Suit::Diamonds, Rank::King).to_string(), "dK");
    }

    #[test]
    fn test_invalid_card_ids() {
        for id in ["", "c", "c10", "z1", "cZ", "1c"] {
            assert_eq!(
                id.parse::<Card>(),
                Err(TableError::InvalidCard(id.to_string())),
                "{id:?} should not parse"
            );
        }
    }

    #[test]
    fn test_asset_key() {
        let card: Card = "d7".parse().unwrap();
        assert_eq!(card.asset_key(), "cards/fronts/d7");
    }

    #[test]
    fn test_standard_deck_has_52_unique_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.remaining(), 52);

        let unique: HashSet<Card> = Card::all().into_iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_deal_reduces_deck() {
        let mut deck = Deck::standard();
        deck.shuffle(&mut StdRng::seed_from_u64(7));

        let hand = deck.deal(13);
        assert_eq!(hand.len(), 13);
        assert_eq!(deck.remaining(), 39);

        let rest = deck.deal(100);
        assert_eq!(rest.len(), 39);
        assert_eq!(deck.remaining(), 0);
        assert!(deck.deal(1).is_empty());

        let all: HashSet<Card> = hand.iter().chain(rest.iter()).copied().collect();
        assert_eq!(all.len(), 52);
    }
}
