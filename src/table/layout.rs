//! Card Table Layout Engine
//!
//! Pure pixel layout of the game screen. Nothing here draws; the game screen
//! asks for a [`TableLayout`] every frame and paints/registers what it gets.
//!
//! # Seating
//!
//! Opponents are placed relative to the local player's seat: the next three
//! seats clockwise land in the left, top and right regions, in that order.
//! A player sitting North therefore sees East on the left, South on top and
//! West on the right.

use sdl2::rect::Rect;

use super::card::Card;
use super::player::Direction;
use super::state::GameTableState;
use crate::geometry::percent;
use crate::settings::Settings;

const RACK_HEIGHT_PERCENT: i32 = 20;

const BUTTON_WIDTH: u32 = 200;
const BUTTON_HEIGHT: u32 = 100;
const BUTTON_MARGIN: i32 = 20;
/// Vertical gap between the top of the rack and the top of the action buttons
const BUTTON_LIFT: i32 = 225;

const ICON_SIZE: u32 = 150;
const ICON_MARGIN: i32 = 15;
const TOP_ICON_Y: i32 = 150;
/// Horizontal offset of the top seat's and local player's played cards from the left icon
const CENTER_CARD_OFFSET: i32 = 110;

const CLAIMED_LABEL: (i32, i32, u32, u32) = (50, 50, 150, 50);
const HOME_SIZE: u32 = 64;
const HOME_MARGIN: i32 = 20;

/// Screen region an opponent occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatRegion {
    Left,
    Top,
    Right,
}

/// Evenly spaced x-positions for `count` items of `item_width`, centered in `total_width`.
///
/// Items overlap when `spacing < item_width`. Returns an empty vector for `count == 0`.
pub fn centered_intervals(total_width: i32, item_width: i32, count: usize, spacing: i32) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }

    let span = (count as i32 - 1) * spacing + item_width;
    let start = (total_width - span) / 2;
    (0..count as i32).map(|i| start + i * spacing).collect()
}

/// The three opponent seats for a local player, in left/top/right order
pub fn opponent_seats(local: Direction) -> [(Direction, SeatRegion); 3] {
    let left = local.next();
    let top = left.next();
    let right = top.next();
    [
        (left, SeatRegion::Left),
        (top, SeatRegion::Top),
        (right, SeatRegion::Right),
    ]
}

/// Window and card dimensions the layout is computed for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub window_width: i32,
    pub window_height: i32,
    pub card_width: u32,
    pub card_height: u32,
    pub card_spacing: i32,
    pub raise_offset: i32,
}

impl LayoutParams {
    pub fn new(window_width: u32, window_height: u32, settings: &Settings) -> Self {
        LayoutParams {
            window_width: window_width as i32,
            window_height: window_height as i32,
            card_width: settings.card_width,
            card_height: settings.card_height,
            card_spacing: settings.card_spacing,
            raise_offset: settings.raise_offset,
        }
    }

    fn card_rect(&self, x: i32, y: i32) -> Rect {
        Rect::new(x, y, self.card_width, self.card_height)
    }
}

/// Placement of one occupied opponent seat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatLayout {
    pub direction: Direction,
    pub icon: Rect,
    pub played_card: Rect,
}

/// Every rectangle the game screen paints or registers for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    pub rack: Rect,
    /// Hand cards in paint order (left to right)
    pub hand: Vec<(Card, Rect)>,
    pub play_button: Rect,
    pub claim_button: Rect,
    pub seats: Vec<SeatLayout>,
    pub local_played_card: Rect,
    pub claimed_label: Rect,
    pub home_button: Rect,
}

impl TableLayout {
    pub fn compute(params: &LayoutParams, table: &GameTableState) -> Self {
        let w = params.window_width;
        let h = params.window_height;

        let rack_height = percent(h, RACK_HEIGHT_PERCENT);
        let rack_y = h - rack_height;
        let rack = Rect::new(0, rack_y, w as u32, rack_height as u32);

        let selected = table.selected_card();
        let xs = centered_intervals(
            w,
            params.card_width as i32,
            table.hand().len(),
            params.card_spacing,
        );
        let hand = table
            .hand()
            .iter()
            .zip(xs)
            .map(|(&card, x)| {
                let y = if selected == Some(card) {
                    rack_y - params.raise_offset
                } else {
                    rack_y
                };
                (card, params.card_rect(x, y))
            })
            .collect();

        let button_y = rack_y - BUTTON_LIFT;
        let play_button = Rect::new(BUTTON_MARGIN, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let claim_button = Rect::new(
            w - BUTTON_WIDTH as i32 - BUTTON_MARGIN,
            button_y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        );

        let seats = opponent_seats(table.device_player().direction)
            .into_iter()
            .filter(|(direction, _)| table.seat_occupant(*direction).is_some())
            .map(|(direction, region)| Self::seat(params, direction, region))
            .collect();

        let side_y = h / 2 - 50;
        let local_played_card = params.card_rect(
            ICON_MARGIN + ICON_SIZE as i32 + CENTER_CARD_OFFSET,
            side_y + ICON_SIZE as i32 / 2,
        );

        let (lx, ly, lw, lh) = CLAIMED_LABEL;
        let home_button = Rect::new(
            w - HOME_SIZE as i32 - HOME_MARGIN,
            HOME_MARGIN,
            HOME_SIZE,
            HOME_SIZE,
        );

        TableLayout {
            rack,
            hand,
            play_button,
            claim_button,
            seats,
            local_played_card,
            claimed_label: Rect::new(lx, ly, lw, lh),
            home_button,
        }
    }

    fn seat(params: &LayoutParams, direction: Direction, region: SeatRegion) -> SeatLayout {
        let w = params.window_width;
        let side_y = params.window_height / 2 - 50;
        let icon_size = ICON_SIZE as i32;

        let (icon_x, icon_y, card_x, card_y) = match region {
            SeatRegion::Left => (
                ICON_MARGIN,
                side_y,
                ICON_MARGIN + icon_size + ICON_MARGIN,
                side_y - 50,
            ),
            SeatRegion::Top => (
                w / 2 - icon_size / 2,
                TOP_ICON_Y,
                ICON_MARGIN + icon_size + CENTER_CARD_OFFSET,
                side_y - 200,
            ),
            SeatRegion::Right => {
                let icon_x = w - icon_size - ICON_MARGIN;
                (
                    icon_x,
                    side_y,
                    icon_x - params.card_width as i32 - ICON_MARGIN,
                    side_y - 50,
                )
            }
        };

        SeatLayout {
            direction,
            icon: Rect::new(icon_x, icon_y, ICON_SIZE, ICON_SIZE),
            played_card: params.card_rect(card_x, card_y),
        }
    }

    /// Hand cards ordered topmost-first, the order they must be hit-tested in
    pub fn hand_hit_order(&self) -> impl Iterator<Item = &(Card, Rect)> + '_ {
        self.hand.iter().rev()
    }
}
