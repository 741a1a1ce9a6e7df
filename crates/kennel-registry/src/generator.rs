pub mod random;
pub mod slug;

pub use random::RandomIdGenerator;
pub use slug::SlugGenerator;

use kennel_core::PuppyId;

/// Trait for assigning record identities.
///
/// Implementations are pure generators that don't interact with storage;
/// global uniqueness comes from a random component, and the store's
/// uniqueness constraint is the backstop for the astronomically unlikely
/// collision (the service regenerates once on conflict).
pub trait IdGenerator: Send + Sync + 'static {
    /// Produces a fresh identity for a record with the given breed and
    /// name. Implementations may ignore both inputs.
    fn generate(&self, breed: &str, name: &str) -> PuppyId;

    /// Whether an update recomputes the record's identity from its
    /// (possibly changed) breed and name. Slug-deriving generators return
    /// `true`; stable-id generators return `false`.
    fn recomputes_on_update(&self) -> bool;
}
