use crate::generator::IdGenerator;
use kennel_core::PuppyId;
use uuid::Uuid;

/// Issues bare v4 UUIDs, ignoring breed and name entirely.
///
/// Ids never change across updates, which is the recommended policy for
/// callers that hold on to record identities.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self, _breed: &str, _name: &str) -> PuppyId {
        PuppyId::new(Uuid::new_v4().to_string())
    }

    fn recomputes_on_update(&self) -> bool {
        false
    }
}
