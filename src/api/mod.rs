//! Bindings to the backend REST API.

pub mod error;
pub mod http_client;
pub mod transactions;

pub use error::*;
pub use http_client::*;
pub use transactions::*;
