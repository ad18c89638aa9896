//! Domain entities - Request payloads sent to Discord

pub mod command;
pub mod message;

pub use command::CommandDescriptor;
pub use message::InteractionEdit;
