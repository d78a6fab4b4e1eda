//! System orchestration, startup, and shutdown logic.

pub mod waiting_system;
pub mod telemetry;
pub mod error;

pub use waiting_system::*;
pub use telemetry::*;
pub use error::*;
