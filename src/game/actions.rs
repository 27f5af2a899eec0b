// Action handling between frames
//
// Applies queued input to the UiContext through the active screen's registry.
// A failing action is logged and the rest of the queue still runs; only a quit
// stops the queue early.

use log::{debug, info, trace, warn};
use std::collections::HashMap;

use super::context::{ScreenId, UiContext, UiRegistry};
use crate::error::AppError;
use crate::event::EventRegistry;
use crate::input_system::UiAction;

/// One click registry per screen
pub type Registries = HashMap<ScreenId, UiRegistry>;

pub fn new_registries() -> Registries {
    ScreenId::ALL
        .into_iter()
        .map(|screen| (screen, EventRegistry::new(screen)))
        .collect()
}

/// Applies `actions` in order and returns how many of them failed
pub fn apply_actions(
    ctx: &mut UiContext,
    registries: &mut Registries,
    actions: impl IntoIterator<Item = UiAction>,
) -> usize {
    let mut failed = 0;

    for action in actions {
        let screen = ctx.screen;

        if let Err(e) = apply_action(ctx, registries, action) {
            failed += 1;
            match action {
                UiAction::Click { x, y, button } => {
                    warn!("Click at ({}, {}) with {:?} on {:?} failed: {}", x, y, button, screen, e)
                }
                _ => warn!("{:?} on {:?} failed: {}", action, screen, e),
            }
        }

        // Regions of the screen being left must not answer clicks on the new one
        if ctx.screen != screen {
            if let Some(registry) = registries.get_mut(&ctx.screen) {
                registry.clear();
            }
        }

        if !ctx.running {
            break;
        }
    }

    failed
}

fn apply_action(
    ctx: &mut UiContext,
    registries: &Registries,
    action: UiAction,
) -> Result<(), AppError> {
    match action {
        UiAction::Quit => {
            ctx.quit();
            Ok(())
        }
        UiAction::Back => {
            ctx.back();
            Ok(())
        }
        UiAction::Click { x, y, .. } => dispatch_click(ctx, registries, x, y),
        UiAction::PlaySelected => {
            ctx.table_mut()?.play_selected()?;
            Ok(())
        }
        UiAction::Claim => {
            ctx.table_mut()?.claim()?;
            Ok(())
        }
        UiAction::NextTurn => {
            if let Some(player) = ctx.table_mut()?.advance_turn() {
                info!("Turn passes to {} ({})", player.name, player.direction);
            }
            Ok(())
        }
    }
}

fn dispatch_click(
    ctx: &mut UiContext,
    registries: &Registries,
    x: i32,
    y: i32,
) -> Result<(), AppError> {
    let Some(registry) = registries.get(&ctx.screen) else {
        return Ok(());
    };
    if registry.is_empty() {
        debug!("{:?} has no regions yet, click dropped", registry.screen());
        return Ok(());
    }

    trace!(
        "Click at ({}, {}) against {} regions of {:?}",
        x,
        y,
        registry.len(),
        registry.screen()
    );
    registry.dispatch(x, y, ctx)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::main_menu::{self, MainMenuLayout, MenuStyle};
    use crate::gui::{game_screen, settings_screen};
    use crate::settings::Settings;
    use crate::table::{Card, LayoutParams, TableLayout};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sdl2::mouse::MouseButton;
    use std::path::PathBuf;

    fn click(x: i32, y: i32) -> UiAction {
        UiAction::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    fn card(id: &str) -> Card {
        id.parse().unwrap()
    }

    fn context() -> UiContext {
        UiContext::new(Settings::default(), PathBuf::from("unused.json"))
    }

    fn register_game(ctx: &UiContext, registries: &mut Registries) -> TableLayout {
        let table = ctx.table().unwrap();
        let params = LayoutParams::new(480, 800, &ctx.settings);
        let layout = TableLayout::compute(&params, table);
        let registry = registries.get_mut(&ScreenId::Game).unwrap();
        registry.clear();
        game_screen::register_regions(registry, table, &layout);
        layout
    }

    #[test]
    fn test_failed_click_does_not_stop_later_input() {
        let mut ctx = context();
        ctx.start_new_game_with(&mut StdRng::seed_from_u64(5)).unwrap();
        let table = ctx.table_mut().unwrap();
        table
            .assign_cards(vec![card("c1"), card("c2"), card("c3")])
            .unwrap();
        table.advance_turn();

        let mut registries = new_registries();
        let layout = register_game(&ctx, &mut registries);

        // Claiming out of turn fails; the card click after it still lands
        let claim = layout.claim_button.center();
        let failed = apply_actions(
            &mut ctx,
            &mut registries,
            [click(claim.x(), claim.y()), click(160, 700)],
        );

        assert_eq!(failed, 1);
        assert!(ctx.running);
        let table = ctx.table().unwrap();
        assert_eq!(table.claimed_hands(), 0);
        assert_eq!(table.selected_card(), Some(card("c1")));
    }

    #[test]
    fn test_screen_switch_clears_destination_registry() {
        let mut ctx = context();
        let mut registries = new_registries();

        let menu = MainMenuLayout::compute(&MenuStyle::default(), 480, 800);
        main_menu::register_regions(registries.get_mut(&ScreenId::MainMenu).unwrap(), &menu);
        // Left over from an earlier visit to the settings screen
        let settings = settings_screen::SettingsLayout::compute(480, 800);
        settings_screen::register_regions(
            registries.get_mut(&ScreenId::Settings).unwrap(),
            &settings,
        );

        // The second click sits on the old BACK button; it must not fire before a redraw
        let open = menu.settings.center();
        let stale_back = menu.play.center();
        assert!(settings.back.contains_point(stale_back));
        let failed = apply_actions(
            &mut ctx,
            &mut registries,
            [click(open.x(), open.y()), click(stale_back.x(), stale_back.y())],
        );

        assert_eq!(failed, 0);
        assert_eq!(ctx.screen, ScreenId::Settings);
        assert!(registries[&ScreenId::Settings].is_empty());
    }

    #[test]
    fn test_quit_stops_the_queue() {
        let mut ctx = context();
        let mut registries = new_registries();
        let menu = MainMenuLayout::compute(&MenuStyle::default(), 480, 800);
        main_menu::register_regions(registries.get_mut(&ScreenId::MainMenu).unwrap(), &menu);

        let open = menu.settings.center();
        apply_actions(
            &mut ctx,
            &mut registries,
            [UiAction::Quit, click(open.x(), open.y())],
        );

        assert!(!ctx.running);
        assert_eq!(ctx.screen, ScreenId::MainMenu);
    }

    #[test]
    fn test_table_keys_without_session_fail_quietly() {
        let mut ctx = context();
        let mut registries = new_registries();

        let failed = apply_actions(
            &mut ctx,
            &mut registries,
            [UiAction::Claim, UiAction::PlaySelected, UiAction::NextTurn],
        );

        assert_eq!(failed, 3);
        assert!(ctx.running);
    }

    #[test]
    fn test_table_keys_play_and_pass_turn() {
        let mut ctx = context();
        ctx.start_new_game_with(&mut StdRng::seed_from_u64(9)).unwrap();
        let table = ctx.table_mut().unwrap();
        table.assign_cards(vec![card("s4"), card("s5")]).unwrap();
        table.select_card(card("s5")).unwrap();
        let mut registries = new_registries();

        let failed = apply_actions(
            &mut ctx,
            &mut registries,
            [UiAction::PlaySelected, UiAction::NextTurn, UiAction::Claim],
        );

        // Claim after the turn passed is refused
        assert_eq!(failed, 1);
        let table = ctx.table().unwrap();
        assert_eq!(table.hand(), &[card("s4")]);
        assert_eq!(table.played_card(table.device_player().direction), Some(card("s5")));
        assert!(!table.is_device_turn());
    }
}
