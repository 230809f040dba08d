//! Aura Domain - Core types for the control-plane client
//!
//! This crate defines the data model shared by the client facade and the
//! CLI. All types here are pure Rust with no I/O dependencies.

pub mod credentials;
pub mod error;
pub mod instance;

pub use credentials::Credentials;
pub use error::{AuraError, AuraResult, TokenStoreError};
pub use instance::InstanceSpec;
