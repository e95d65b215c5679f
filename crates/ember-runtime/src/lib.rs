//! Ember Runtime - Frame-loop building blocks
//!
//! Provides the loop substrate an external driver ticks once per frame:
//! - `FrameClock` — elapsed-delta measurement between ticks
//! - `IntervalTimer` — periodic-interval accumulation with remainder carry
//! - `Signal` / `Waiter` — one-shot multi-subscriber event broadcast
//! - `EntityCollection` — per-frame entity drive and liveness pruning
//! - `RuntimeConfig` — TOML-backed driver-loop configuration
//!
//! The runtime never schedules its own ticks: the host calls
//! [`FrameClock::delta`] once per frame and feeds the result into
//! [`EntityCollection::drive`] and any [`IntervalTimer::count`] checks.

mod clock;
mod collection;
mod config;
mod signal;

pub use clock::{FrameClock, IntervalTimer};
pub use collection::EntityCollection;
pub use config::RuntimeConfig;
pub use signal::{Signal, Waiter};
