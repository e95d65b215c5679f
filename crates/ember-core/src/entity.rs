//! The two-operation contract every loop participant implements

use crate::render::Renderer;
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// A drawable, liveness-checkable participant in the frame loop.
///
/// `draw` runs once per frame with the elapsed seconds since the previous
/// frame and may mutate both the entity and the surface. `is_alive` is a
/// pure predicate; an entity reporting `false` is pruned after the pass in
/// which it drew its final frame.
pub trait Entity {
    /// Render one frame and advance internal state.
    fn draw(&mut self, renderer: &mut dyn Renderer, delta: f64) -> Result<()>;

    /// Does this entity survive past the current frame?
    fn is_alive(&self) -> bool;
}

/// Shared handle to an entity. Identity is reference identity
/// (`Rc::ptr_eq`); the loop assigns no IDs.
pub type EntityRef = Rc<RefCell<dyn Entity>>;

/// Wrap a concrete entity into a shareable [`EntityRef`].
pub fn entity_ref<E: Entity + 'static>(entity: E) -> EntityRef {
    Rc::new(RefCell::new(entity))
}
