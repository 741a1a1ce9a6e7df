use crate::generator::IdGenerator;
use kennel_core::PuppyId;
use uuid::Uuid;

/// Derives human-readable slugs of the form `breed-name-<uuid>`.
///
/// Breed and name are lowercased and joined with `-`; internal whitespace
/// runs collapse to a single `-`. The v4 UUID suffix keeps slugs globally
/// unique even when breed and name collide.
///
/// Note the consequence of `recomputes_on_update`: updating any field of a
/// record reissues its slug, so callers must not treat slugs as stable
/// across updates. [`RandomIdGenerator`] is the stable alternative.
///
/// [`RandomIdGenerator`]: crate::generator::RandomIdGenerator
#[derive(Debug, Clone, Copy, Default)]
pub struct SlugGenerator;

impl SlugGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for SlugGenerator {
    fn generate(&self, breed: &str, name: &str) -> PuppyId {
        let base = format!("{} {}", breed.to_lowercase(), name.to_lowercase());
        let slug = base.split_whitespace().collect::<Vec<_>>().join("-");
        PuppyId::new(format!("{}-{}", slug, Uuid::new_v4()))
    }

    fn recomputes_on_update(&self) -> bool {
        true
    }
}
