//! Aura Application - ports between the client core and external systems
//!
//! Each port is a trait implemented by an adapter in the infrastructure
//! layer.

pub mod ports;

pub use ports::TokenStore;
