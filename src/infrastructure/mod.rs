//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the AI gateway and the
//! config file.

pub mod config;
pub mod dictation;
pub mod gateway;

// Re-export adapters
pub use config::XdgConfigStore;
pub use dictation::StdinDictation;
pub use gateway::AiGatewayClient;
