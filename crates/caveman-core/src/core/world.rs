use crate::api::types::EntityIndex;
use crate::components::entity::Entity;

/// Fixed number of entity slots. The pool never grows.
pub const MAX_ENTITIES: usize = 1024;

/// Fixed-capacity entity pool.
///
/// Slots live in one heap allocation made at startup and reused in place for
/// the life of the session. A free slot is `None`; spawning claims the first
/// free slot, destruction clears a slot for reuse. Iteration order is slot
/// order, not spawn order.
pub struct World {
    slots: Box<[Option<Entity>]>,
}

impl World {
    pub fn new() -> Self {
        Self {
            slots: vec![None; MAX_ENTITIES].into_boxed_slice(),
        }
    }

    /// Claim the first free slot for `entity`.
    ///
    /// # Panics
    ///
    /// Panics when the pool is exhausted. Capacity is fixed at
    /// [`MAX_ENTITIES`]; running out means the population logic is wrong, not
    /// something to recover from.
    pub fn spawn(&mut self, entity: Entity) -> EntityIndex {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(entity);
                return EntityIndex(i as u32);
            }
        }
        panic!("entity pool exhausted: all {MAX_ENTITIES} slots in use");
    }

    /// Clear the slot in place, making it eligible for reuse.
    pub fn destroy(&mut self, index: EntityIndex) {
        if let Some(slot) = self.slots.get_mut(index.0 as usize) {
            *slot = None;
        }
    }

    pub fn get(&self, index: EntityIndex) -> Option<&Entity> {
        self.slots.get(index.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, index: EntityIndex) -> Option<&mut Entity> {
        self.slots.get_mut(index.0 as usize)?.as_mut()
    }

    /// Iterate occupied slots in slot-index order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityIndex, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|en| (EntityIndex(i as u32), en)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
