use sdl2::rect::Rect;
use std::fmt;

use crate::geometry::contains_inclusive;
use crate::table::{Card, Direction};

/// What kind of UI element a region belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionKind {
    /// Filled rectangle with a text label
    Button(String),
    /// Texture drawn as a button, identified by its asset key
    ImageButton(String),
    /// Seat marker of a player at the table
    PlayerIcon(Direction),
    /// Card in the local hand
    Card(Card),
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegionKind::Button(label) => write!(f, "button {:?}", label),
            RegionKind::ImageButton(key) => write!(f, "image button {:?}", key),
            RegionKind::PlayerIcon(direction) => write!(f, "player icon {}", direction),
            RegionKind::Card(card) => write!(f, "card {}", card),
        }
    }
}

/// Anything that occupies a screen rectangle and reacts to being clicked.
///
/// `C` is the state the callback mutates, `E` the error it may fail with.
pub trait Clickable<C, E> {
    fn bounds(&self) -> Rect;

    fn kind(&self) -> &RegionKind;

    fn activate(&self, ctx: &mut C) -> Result<(), E>;

    /// Inclusive hit test against `bounds()`
    fn contains(&self, x: i32, y: i32) -> bool {
        contains_inclusive(&self.bounds(), x, y)
    }
}

pub type ClickCallback<C, E> = Box<dyn Fn(&mut C) -> Result<(), E>>;

/// A rectangle bound to a callback
pub struct ClickRegion<C, E> {
    kind: RegionKind,
    bounds: Rect,
    callback: ClickCallback<C, E>,
}

impl<C, E> ClickRegion<C, E> {
    pub fn new<F>(kind: RegionKind, bounds: Rect, callback: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), E> + 'static,
    {
        ClickRegion {
            kind,
            bounds,
            callback: Box::new(callback),
        }
    }

    pub fn button<F>(label: &str, bounds: Rect, callback: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), E> + 'static,
    {
        Self::new(RegionKind::Button(label.to_string()), bounds, callback)
    }

    pub fn image_button<F>(asset_key: &str, bounds: Rect, callback: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), E> + 'static,
    {
        Self::new(RegionKind::ImageButton(asset_key.to_string()), bounds, callback)
    }

    pub fn player_icon<F>(direction: Direction, bounds: Rect, callback: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), E> + 'static,
    {
        Self::new(RegionKind::PlayerIcon(direction), bounds, callback)
    }

    pub fn card<F>(card: Card, bounds: Rect, callback: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), E> + 'static,
    {
        Self::new(RegionKind::Card(card), bounds, callback)
    }
}

impl<C, E> Clickable<C, E> for ClickRegion<C, E> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn kind(&self) -> &RegionKind {
        &self.kind
    }

    fn activate(&self, ctx: &mut C) -> Result<(), E> {
        (self.callback)(ctx)
    }
}

impl<C, E> fmt::Debug for ClickRegion<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ClickRegion")
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .finish()
    }
}
