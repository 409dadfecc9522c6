/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Rockside client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod codec;
pub mod config;
pub mod http;
pub mod types;

pub use auth::Credential;

pub use codec::{buf_to_hex, hex_to_buf, quantity_to_hex};

pub use config::RocksideConfig;

// Re-export commonly used types from http
pub use http::{ClientConfig, Result, RocksideClient, RocksideError};

// Re-export all types
pub use types::*;

pub use alloy_primitives::U256;
