//! Domain Layer - Core Entity Trait
//!
//! Entities carry a unique, copyable identifier.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id`, if any
pub fn position_of<T: Entity>(items: &[T], id: T::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
