//! Discord REST integration

pub mod client;
pub mod http;

#[cfg(test)]
pub mod testing;

pub use client::DiscordClient;
pub use http::ReqwestTransport;
