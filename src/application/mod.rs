//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: one service per operator utility
//! - Errors: Error taxonomy shared by every layer

pub mod errors;
pub mod services;
