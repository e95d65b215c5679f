//! Ember Player - reference host for the Ember loop
//!
//! Provides the collaborator layer the core only declares seams for: a
//! terminal-grid implementation of the `Renderer` capability and a small
//! particle game implementing `Game`. The driver loop itself lives in the
//! binary (`main.rs`).

mod sparks;
mod term;

pub use sparks::SparksGame;
pub use term::TermRenderer;
