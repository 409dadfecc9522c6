/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod encrypted;
pub mod eoa;
pub mod error;
pub mod identities;
pub mod relay;
pub mod transactions;

pub use error::{Result, RocksideError};

pub use client::{ClientConfig, RocksideClient};
