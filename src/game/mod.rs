// Game module - screen switching and the frame loop
//
// This module contains:
// - actions.rs: applies queued input through the active screen's registry
// - context.rs: ScreenId and UiContext, the state click callbacks mutate
// - controller.rs: App, which owns the window and runs the frame loop

pub mod actions;
pub mod context;
pub mod controller;

// Re-export types for convenience
pub use context::{ScreenId, UiContext, UiRegistry};
pub use controller::App;
