//! Aura Infrastructure - adapters for the control-plane client
//!
//! This crate contains the concrete implementations behind the application
//! ports: the reqwest-based [`AuraClient`] facade and the file-backed
//! [`FileTokenStore`].

pub mod client;
pub mod persistence;

pub use client::{AuraClient, ClientConfig};
pub use persistence::FileTokenStore;
