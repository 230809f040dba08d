//! Control-plane API client.

mod aura_client;
mod config;

pub use aura_client::AuraClient;
pub use config::ClientConfig;
