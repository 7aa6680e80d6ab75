//! AI gateway adapter

mod client;

pub use client::AiGatewayClient;
