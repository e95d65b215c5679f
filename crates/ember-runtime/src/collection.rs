//! Entity collection — per-frame drive and liveness pruning

use ember_core::{Entity, EntityRef, Renderer, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// An ordered collection of entities driven once per frame.
///
/// The collection is a cheap handle: clones share the same underlying
/// sequence, so an entity may keep a clone of the collection it lives in and
/// call [`add`](EntityCollection::add) or [`remove`](EntityCollection::remove)
/// from inside its own draw. Mutations made mid-drive become visible at the
/// post-pass rebuild, never in the pass already in progress.
///
/// Insertion order is preserved and duplicates are permitted; identity is
/// reference identity.
#[derive(Clone, Default)]
pub struct EntityCollection {
    entities: Rc<RefCell<Vec<EntityRef>>>,
}

impl EntityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity to the end of the sequence.
    pub fn add(&self, entity: EntityRef) {
        self.entities.borrow_mut().push(entity);
    }

    /// Remove every occurrence of the given entity. No-op if absent.
    pub fn remove(&self, entity: &EntityRef) {
        self.entities.borrow_mut().retain(|e| !Rc::ptr_eq(e, entity));
    }

    /// Empty the sequence. No teardown hooks run on the removed entities.
    pub fn clear(&self) {
        self.entities.borrow_mut().clear();
    }

    /// Snapshot of the current sequence; mutating it does not affect the
    /// collection.
    pub fn all(&self) -> Vec<EntityRef> {
        self.entities.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entities.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.borrow().is_empty()
    }

    /// Drive one frame: draw every entity, then prune the dead.
    ///
    /// Iterates a snapshot taken at call start. Each entity's `draw` runs
    /// before its own `is_alive` check, and every snapshotted entity gets
    /// both calls regardless of other entities' liveness, so dead entities
    /// still render their final frame. After the pass the live sequence is
    /// rebuilt without the entities that reported themselves dead,
    /// preserving relative order.
    ///
    /// The first draw error aborts the whole call: remaining entities are
    /// not drawn and the liveness filter does not run for this frame.
    pub fn drive(&self, renderer: &mut dyn Renderer, delta: f64) -> Result<()> {
        let pass: Vec<EntityRef> = self.entities.borrow().clone();
        let mut dead: Vec<EntityRef> = Vec::new();

        for entity in &pass {
            entity.borrow_mut().draw(renderer, delta)?;
            if !entity.borrow().is_alive() {
                dead.push(Rc::clone(entity));
            }
        }

        if !dead.is_empty() {
            log::trace!("pruning {} dead entities", dead.len());
            self.entities
                .borrow_mut()
                .retain(|e| !dead.iter().any(|d| Rc::ptr_eq(d, e)));
        }

        Ok(())
    }
}

/// Collections nest: a collection drawn as an entity drives its members and
/// never reports itself dead.
impl Entity for EntityCollection {
    fn draw(&mut self, renderer: &mut dyn Renderer, delta: f64) -> Result<()> {
        self.drive(renderer, delta)
    }

    fn is_alive(&self) -> bool {
        true
    }
}
