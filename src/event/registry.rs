use log::trace;

use super::region::{Clickable, RegionKind};
use crate::game::ScreenId;

/// Ordered click regions of one screen
pub struct EventRegistry<C, E> {
    screen: ScreenId,
    registered: Vec<Box<dyn Clickable<C, E>>>,
}

impl<C, E> EventRegistry<C, E> {
    pub fn new(screen: ScreenId) -> Self {
        EventRegistry {
            screen,
            registered: Vec::with_capacity(8),
        }
    }

    pub fn screen(&self) -> ScreenId {
        self.screen
    }

    /// Appends a region. Duplicates are allowed; earlier registrations take priority.
    pub fn register<R>(&mut self, region: R)
    where
        R: Clickable<C, E> + 'static,
    {
        self.registered.push(Box::new(region));
    }

    /// Drops every region, ready for the next draw pass
    pub fn clear(&mut self) {
        self.registered.clear();
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Runs the callback of the first region containing `(x, y)`.
    ///
    /// Returns the kind of the region that fired, or `None` when the click
    /// missed everything. A failing callback's error is returned as-is.
    pub fn dispatch(&self, x: i32, y: i32, ctx: &mut C) -> Result<Option<RegionKind>, E> {
        match self.registered.iter().find(|region| region.contains(x, y)) {
            Some(region) => {
                region.activate(ctx)?;
                Ok(Some(region.kind().clone()))
            }
            None => {
                trace!("{:?}: click at ({}, {}) hit nothing", self.screen, x, y);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ClickRegion;
    use sdl2::rect::Rect;

    type Log = Vec<&'static str>;

    fn recorder(name: &'static str, rect: Rect) -> ClickRegion<Log, String> {
        ClickRegion::button(name, rect, move |log: &mut Log| {
            log.push(name);
            Ok(())
        })
    }

    #[test]
    fn test_first_registered_wins_on_overlap() {
        let mut registry = EventRegistry::new(ScreenId::Game);
        registry.register(recorder("R1", Rect::new(0, 0, 10, 10)));
        registry.register(recorder("R2", Rect::new(5, 5, 10, 10)));

        let mut log = Log::new();
        let hit = registry.dispatch(7, 7, &mut log).unwrap();

        assert_eq!(log, vec!["R1"]);
        assert_eq!(hit, Some(RegionKind::Button("R1".to_string())));
    }

    #[test]
    fn test_second_region_reachable_outside_overlap() {
        let mut registry = EventRegistry::new(ScreenId::Game);
        registry.register(recorder("R1", Rect::new(0, 0, 10, 10)));
        registry.register(recorder("R2", Rect::new(5, 5, 10, 10)));

        let mut log = Log::new();
        registry.dispatch(15, 15, &mut log).unwrap();
        assert_eq!(log, vec!["R2"]);
    }

    #[test]
    fn test_miss_is_silent_success() {
        let mut registry = EventRegistry::new(ScreenId::MainMenu);
        registry.register(recorder("R1", Rect::new(0, 0, 10, 10)));

        let mut log = Log::new();
        assert_eq!(registry.dispatch(50, 50, &mut log), Ok(None));
        assert!(log.is_empty());
    }

    #[test]
    fn test_callback_error_propagates() {
        let mut registry: EventRegistry<Log, String> = EventRegistry::new(ScreenId::Game);
        registry.register(ClickRegion::button("broken", Rect::new(0, 0, 10, 10), |_: &mut Log| {
            Err("boom".to_string())
        }));
        registry.register(recorder("fallback", Rect::new(0, 0, 10, 10)));

        let mut log = Log::new();
        assert_eq!(registry.dispatch(1, 1, &mut log), Err("boom".to_string()));
        assert!(log.is_empty());
    }

    #[test]
    fn test_duplicates_and_clear() {
        let mut registry = EventRegistry::new(ScreenId::Settings);
        registry.register(recorder("A", Rect::new(0, 0, 10, 10)));
        registry.register(recorder("A", Rect::new(0, 0, 10, 10)));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.screen(), ScreenId::Settings);

        registry.clear();
        assert!(registry.is_empty());

        let mut log = Log::new();
        assert_eq!(registry.dispatch(1, 1, &mut log), Ok(None));
    }
}
