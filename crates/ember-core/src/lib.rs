//! Ember Core - Foundational types for the Ember loop
//!
//! This crate provides the types every other Ember crate depends on:
//! - `Entity` / `EntityRef` - the drawable, liveness-checkable participant contract
//! - `Renderer` - the drawing-surface capability seam
//! - `Game` - the host-facing hook an external driver loop ticks
//! - `Color` - RGBA value type for the renderer seam
//! - Error types and Result alias

mod entity;
mod error;
mod game;
mod render;
mod types;

pub use entity::{entity_ref, Entity, EntityRef};
pub use error::{EmberError, Result};
pub use game::Game;
pub use render::Renderer;
pub use types::Color;
