//! Record store backends for the Kennel registry.
//!
//! Two interchangeable implementations of the [`RecordStore`] contract:
//! a process-local in-memory store and a MySQL-backed persistent store.

pub mod memory;
pub mod mysql;

pub use kennel_core::{RecordStore, StorageError};
pub use memory::InMemoryStore;
pub use mysql::{MySqlStore, MySqlStoreOptions};
