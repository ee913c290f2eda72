//! Domain Layer - Core Entity Trait
//!
//! All server records carry an integer identifier assigned by the server.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find an entity in a snapshot by ID
pub fn find_by_id<T: Entity>(entities: &[T], id: T::Id) -> Option<&T> {
    entities.iter().find(|e| e.id() == id)
}
