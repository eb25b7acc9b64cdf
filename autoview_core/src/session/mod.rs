//! Session module — the explicit context object owning all generation
//! state, and the action surface driving it.

mod action;
mod context;

pub use action::Action;
pub use context::Session;
