//! Game Screen
//!
//! Paints the card table from a [`TableLayout`] and registers its click
//! regions. Paint order is back to front:
//!
//! 1. Felt, card rack and the hand (left to right, selected card raised)
//! 2. Opponent icons with the card each seat played, then the local played card
//! 3. Play button (local turn only) and claim button
//! 4. Claimed-hands label and the home button
//!
//! Regions are registered front to back so the visible element wins a click.

use log::debug;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::style;
use super::widgets::{RectButton, draw_texture};
use crate::assets::{AssetStore, HOME_ICON};
use crate::event::ClickRegion;
use crate::game::{ScreenId, UiContext, UiRegistry};
use crate::table::{Card, GameTableState, LayoutParams, TableLayout};
use crate::text::draw_text_centered;

pub struct GameScreen {
    play: RectButton,
    claim: RectButton,
    player_icon: RectButton,
    claimed_label: RectButton,
}

impl GameScreen {
    pub fn new() -> Self {
        GameScreen {
            play: RectButton::new("PLAY", style::GREEN),
            claim: RectButton::new("CLAIM", style::GREEN),
            player_icon: RectButton::new("", style::SILVER),
            claimed_label: RectButton::new("", style::CLAIMED_LABEL).with_text_scale(2),
        }
    }

    /// Draws the table and rebuilds the screen's click regions
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &AssetStore,
        ctx: &UiContext,
        registry: &mut UiRegistry,
    ) -> Result<(), String> {
        registry.clear();

        canvas.set_draw_color(style::TABLE_BACKGROUND);
        canvas.fill_rect(None)?;

        let Some(table) = ctx.table().filter(|table| table.game_started()) else {
            // No session running; Escape still leads back to the menu
            let (width, height) = canvas.output_size()?;
            draw_text_centered(
                canvas,
                "NO GAME",
                Rect::new(0, 0, width, height),
                style::WHITE,
                3,
            )?;
            return Ok(());
        };

        let (width, height) = canvas.output_size()?;
        let params = LayoutParams::new(width, height, &ctx.settings);
        let layout = TableLayout::compute(&params, table);

        self.render_hand(canvas, assets, &layout)?;
        self.render_seats(canvas, assets, table, &layout)?;
        self.render_actions(canvas, table, &layout)?;

        let claimed = format!("CLAIMED: {}", table.claimed_hands());
        self.claimed_label
            .render_label(canvas, layout.claimed_label, &claimed, style::CLAIMED_LABEL)?;

        let home = assets.get(HOME_ICON).map_err(|e| e.to_string())?;
        draw_texture(canvas, home, layout.home_button)?;

        register_regions(registry, table, &layout);
        Ok(())
    }

    fn render_hand(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &AssetStore,
        layout: &TableLayout,
    ) -> Result<(), String> {
        canvas.set_draw_color(style::RACK);
        canvas.fill_rect(layout.rack)?;

        for (card, bounds) in &layout.hand {
            draw_card(canvas, assets, *card, *bounds)?;
        }
        Ok(())
    }

    fn render_actions(
        &self,
        canvas: &mut Canvas<Window>,
        table: &GameTableState,
        layout: &TableLayout,
    ) -> Result<(), String> {
        if table.is_device_turn() {
            let color = if table.selected_card().is_some() {
                style::GREEN
            } else {
                style::SILVER
            };
            self.play
                .render_label(canvas, layout.play_button, &self.play.label, color)?;
        }

        let claim_color = if table.is_device_turn() {
            style::GREEN
        } else {
            style::SILVER
        };
        self.claim
            .render_label(canvas, layout.claim_button, &self.claim.label, claim_color)
    }

    fn render_seats(
        &self,
        canvas: &mut Canvas<Window>,
        assets: &AssetStore,
        table: &GameTableState,
        layout: &TableLayout,
    ) -> Result<(), String> {
        for seat in &layout.seats {
            let Some(player) = table.seat_occupant(seat.direction) else {
                continue;
            };

            let color = if table.current_player() == Some(player) {
                style::BRIGHT_GREEN
            } else {
                style::SILVER
            };
            self.player_icon
                .render_label(canvas, seat.icon, seat.direction.label(), color)?;

            if let Some(card) = table.played_card(seat.direction) {
                draw_card(canvas, assets, card, seat.played_card)?;
            }
        }

        if let Some(card) = table.played_card(table.device_player().direction) {
            draw_card(canvas, assets, card, layout.local_played_card)?;
        }
        Ok(())
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_card(
    canvas: &mut Canvas<Window>,
    assets: &AssetStore,
    card: Card,
    bounds: Rect,
) -> Result<(), String> {
    let texture = assets.card(card).map_err(|e| e.to_string())?;
    draw_texture(canvas, texture, bounds)
}

/// Registers the table's click regions, topmost first.
///
/// The play button is only registered while the device player holds the
/// turn, matching what is painted.
pub fn register_regions(registry: &mut UiRegistry, table: &GameTableState, layout: &TableLayout) {
    registry.register(ClickRegion::image_button(
        HOME_ICON,
        layout.home_button,
        |ctx: &mut UiContext| {
            ctx.switch_to(ScreenId::MainMenu);
            Ok(())
        },
    ));

    if table.is_device_turn() {
        registry.register(ClickRegion::button(
            "PLAY",
            layout.play_button,
            |ctx: &mut UiContext| {
                let played = ctx.table_mut()?.play_selected()?;
                debug!("Play button: {:?}", played);
                Ok(())
            },
        ));
    }

    registry.register(ClickRegion::button(
        "CLAIM",
        layout.claim_button,
        |ctx: &mut UiContext| {
            ctx.table_mut()?.claim()?;
            Ok(())
        },
    ));

    // Clicking an opponent hands them the turn (hot-seat play)
    for seat in &layout.seats {
        if let Some(player) = table.seat_occupant(seat.direction) {
            let player = player.clone();
            registry.register(ClickRegion::player_icon(
                seat.direction,
                seat.icon,
                move |ctx: &mut UiContext| {
                    ctx.table_mut()?.set_current_player(&player)?;
                    Ok(())
                },
            ));
        }
    }

    for (card, bounds) in layout.hand_hit_order() {
        let card = *card;
        registry.register(ClickRegion::card(card, *bounds, move |ctx: &mut UiContext| {
            ctx.table_mut()?.select_card(card)?;
            Ok(())
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRegistry;
    use crate::event::region::RegionKind;
    use crate::settings::Settings;
    use crate::table::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::path::PathBuf;

    fn card(id: &str) -> Card {
        id.parse().unwrap()
    }

    fn context_with_hand(ids: &[&str]) -> UiContext {
        let mut ctx = UiContext::new(Settings::default(), PathBuf::from("unused.json"));
        ctx.start_new_game_with(&mut StdRng::seed_from_u64(3)).unwrap();
        ctx.table_mut()
            .unwrap()
            .assign_cards(ids.iter().map(|id| card(id)).collect())
            .unwrap();
        ctx
    }

    fn rebuild(ctx: &UiContext) -> (UiRegistry, TableLayout) {
        let table = ctx.table().unwrap();
        let params = LayoutParams::new(480, 800, &ctx.settings);
        let layout = TableLayout::compute(&params, table);
        let mut registry = EventRegistry::new(ScreenId::Game);
        register_regions(&mut registry, table, &layout);
        (registry, layout)
    }

    #[test]
    fn test_overlapping_cards_resolve_to_topmost() {
        let mut ctx = context_with_hand(&["c1", "c2", "c3"]);
        let (registry, _) = rebuild(&ctx);

        // Cards at x = 155, 200, 245 (80 wide) all cover x = 230 on the baseline row
        let hit = registry.dispatch(230, 700, &mut ctx).unwrap();
        assert_eq!(hit, Some(RegionKind::Card(card("c2"))));
        assert_eq!(ctx.table().unwrap().selected_card(), Some(card("c2")));

        // Only the first card is visible at x = 160
        registry.dispatch(160, 700, &mut ctx).unwrap();
        assert_eq!(ctx.table().unwrap().selected_card(), Some(card("c1")));
    }

    #[test]
    fn test_select_then_play_through_regions() {
        let mut ctx = context_with_hand(&["c1", "c2", "c3"]);

        let (registry, layout) = rebuild(&ctx);
        registry.dispatch(160, 700, &mut ctx).unwrap();

        // Raised card moves up by the raise offset on the next frame
        let (registry, next_layout) = rebuild(&ctx);
        assert_eq!(next_layout.hand[0].1.y(), layout.hand[0].1.y() - 100);

        let play = next_layout.play_button.center();
        let hit = registry.dispatch(play.x(), play.y(), &mut ctx).unwrap();
        assert_eq!(hit, Some(RegionKind::Button("PLAY".to_string())));

        let table = ctx.table().unwrap();
        assert_eq!(table.hand(), &[card("c2"), card("c3")]);
        assert_eq!(table.played_card(Direction::South), Some(card("c1")));
        assert_eq!(table.selected_card(), None);
    }

    #[test]
    fn test_play_button_hidden_out_of_turn() {
        let mut ctx = context_with_hand(&["c1"]);
        ctx.table_mut().unwrap().advance_turn();
        let (registry, layout) = rebuild(&ctx);

        // Bottom-right corner of the play button, clear of the left player icon
        let hit = registry.dispatch(200, 510, &mut ctx).unwrap();
        assert_eq!(hit, None);

        // Claim is still registered but refuses out of turn
        let claim = layout.claim_button.center();
        let result = registry.dispatch(claim.x(), claim.y(), &mut ctx);
        assert!(result.is_err());
        assert_eq!(ctx.table().unwrap().claimed_hands(), 0);
    }

    #[test]
    fn test_claim_button_counts() {
        let mut ctx = context_with_hand(&[]);
        let (registry, layout) = rebuild(&ctx);

        let claim = layout.claim_button.center();
        registry.dispatch(claim.x(), claim.y(), &mut ctx).unwrap();
        registry.dispatch(claim.x(), claim.y(), &mut ctx).unwrap();
        assert_eq!(ctx.table().unwrap().claimed_hands(), 2);
    }

    #[test]
    fn test_player_icon_hands_over_turn() {
        let mut ctx = context_with_hand(&[]);
        let (registry, layout) = rebuild(&ctx);

        let top = layout.seats[1];
        assert_eq!(top.direction, Direction::North);
        let center = top.icon.center();
        registry.dispatch(center.x(), center.y(), &mut ctx).unwrap();

        let current = ctx.table().unwrap().current_player().unwrap();
        assert_eq!(current.direction, Direction::North);
    }

    #[test]
    fn test_home_button_returns_to_menu() {
        let mut ctx = context_with_hand(&[]);
        let (registry, layout) = rebuild(&ctx);

        let home = layout.home_button.center();
        registry.dispatch(home.x(), home.y(), &mut ctx).unwrap();
        assert_eq!(ctx.screen, ScreenId::MainMenu);
    }
}
