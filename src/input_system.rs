use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use crate::game::ScreenId;

/// High-level actions produced from raw SDL2 input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    // === System ===
    Quit,
    /// Escape / Android back: leave the current screen
    Back,

    // === Pointer ===
    /// Button press at window coordinates; only the left button is produced
    Click { x: i32, y: i32, button: MouseButton },

    // === Table shortcuts ===
    PlaySelected,
    Claim,
    NextTurn,
}

/// Translates SDL2 events into [`UiAction`]s for the active screen.
///
/// Table shortcuts are only produced while the game screen is active; every
/// screen gets quit, back and left clicks.
pub struct InputSystem {
    pub screen: ScreenId,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            screen: ScreenId::MainMenu,
        }
    }

    /// Call before `poll_events` whenever the active screen may have changed
    pub fn update_context(&mut self, screen: ScreenId) {
        self.screen = screen;
    }

    /// Drains every pending SDL2 event
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<UiAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            let action = match event {
                Event::Quit { .. } => Some(UiAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    ..
                } => self.handle_keydown(key),
                Event::MouseButtonDown {
                    mouse_btn, x, y, ..
                } => self.handle_mouse_down(mouse_btn, x, y),
                _ => None,
            };
            actions.extend(action);
        }

        actions
    }

    fn handle_keydown(&self, key: Keycode) -> Option<UiAction> {
        match key {
            Keycode::Escape | Keycode::AcBack => Some(UiAction::Back),
            _ if self.screen == ScreenId::Game => self.handle_table_keys(key),
            _ => None,
        }
    }

    fn handle_table_keys(&self, key: Keycode) -> Option<UiAction> {
        match key {
            Keycode::Return | Keycode::KpEnter => Some(UiAction::PlaySelected),
            Keycode::C => Some(UiAction::Claim),
            Keycode::Tab => Some(UiAction::NextTurn),
            _ => None,
        }
    }

    /// Only the left button is dispatched to click regions
    fn handle_mouse_down(&self, button: MouseButton, x: i32, y: i32) -> Option<UiAction> {
        match button {
            MouseButton::Left => Some(UiAction::Click { x, y, button }),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_means_back_everywhere() {
        let mut input = InputSystem::new();
        for screen in ScreenId::ALL {
            input.update_context(screen);
            assert_eq!(input.handle_keydown(Keycode::Escape), Some(UiAction::Back));
            assert_eq!(input.handle_keydown(Keycode::AcBack), Some(UiAction::Back));
        }
    }

    #[test]
    fn test_table_keys_only_in_game() {
        let mut input = InputSystem::new();
        assert_eq!(input.handle_keydown(Keycode::Return), None);
        assert_eq!(input.handle_keydown(Keycode::Tab), None);

        input.update_context(ScreenId::Game);
        assert_eq!(
            input.handle_keydown(Keycode::Return),
            Some(UiAction::PlaySelected)
        );
        assert_eq!(input.handle_keydown(Keycode::C), Some(UiAction::Claim));
        assert_eq!(input.handle_keydown(Keycode::Tab), Some(UiAction::NextTurn));
        assert_eq!(input.handle_keydown(Keycode::Z), None);
    }

    #[test]
    fn test_only_left_clicks_dispatch() {
        let input = InputSystem::new();
        assert_eq!(
            input.handle_mouse_down(MouseButton::Left, 12, 34),
            Some(UiAction::Click {
                x: 12,
                y: 34,
                button: MouseButton::Left
            })
        );
        assert_eq!(input.handle_mouse_down(MouseButton::Right, 12, 34), None);
        assert_eq!(input.handle_mouse_down(MouseButton::Middle, 12, 34), None);
    }
}
