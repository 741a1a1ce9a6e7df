//! Registry service for Kennel puppy records.
//!
//! This crate provides the orchestration layer over a [`RecordStore`]
//! backend and an [`IdGenerator`] policy: validation, sanitization,
//! identity assignment, and partial-update merging. Core types are
//! re-exported from `kennel_core`.
//!
//! [`RecordStore`]: kennel_core::RecordStore
//! [`IdGenerator`]: generator::IdGenerator

pub mod generator;
pub mod service;

pub use generator::{IdGenerator, RandomIdGenerator, SlugGenerator};
pub use service::RegistryService;
