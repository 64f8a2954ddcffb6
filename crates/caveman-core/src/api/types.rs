/// Handle to an entity slot in the [`World`](crate::core::world::World).
///
/// The index is a storage location, nothing more — slots are reused after
/// destruction, so a handle held across a destroy may observe a different
/// entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityIndex(pub u32);
