//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Discord: REST client and HTTP transport

pub mod config;
pub mod discord;
