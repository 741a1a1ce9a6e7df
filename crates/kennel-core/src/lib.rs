//! Core types and traits for the Kennel record registry.
//!
//! This crate provides the shared record model, payload validation, the
//! record-store contract, and the registry contract consumed by backend
//! and service crates.

pub mod error;
pub mod record;
pub mod registry;
pub mod store;
pub mod validate;

pub use error::{FieldError, RegistryError, StorageError, ValidationErrors};
pub use record::{Puppy, PuppyId, PuppyPayload};
pub use registry::Registry;
pub use store::RecordStore;
pub use validate::Mode;
