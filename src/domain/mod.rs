//! Domain layer - Core business objects with no I/O of their own
//! 
//! This layer contains:
//! - Entities: Discord payloads (command descriptors, interaction edits)
//! - Traits: Abstractions for infrastructure (Transport)

pub mod entities;
pub mod traits;
