//! Click Event System
//!
//! Screens describe their clickable elements as [`ClickRegion`]s and hand them
//! to the [`EventRegistry`] of that screen while drawing. Pointer-down events
//! are later dispatched against the registry.
//!
//! # Lifecycle
//!
//! A registry is created once per screen at startup. Each draw pass starts
//! with [`EventRegistry::clear`] and re-registers the regions for the frame
//! being drawn, so regions are only valid until the next draw or screen switch.
//!
//! # Priority
//!
//! The first registered region containing the click wins. Screens register
//! elements topmost-first (reverse paint order) so overlapping elements, such
//! as a fanned hand of cards, resolve to the one the player can see.

pub mod region;
pub mod registry;

pub use region::ClickRegion;
pub use registry::EventRegistry;
