//! # transaction-watch
//!
//! Client side of the "waiting for confirmation" screen of the booking and
//! shop platform. After checkout the customer lands on this screen; it keeps
//! the order's status fresh by polling the backend and moves the customer on
//! once the workshop reacts.
//!
//! ## Pieces
//!
//! - **Domain types** - [`Transaction`], [`TransactionStatus`], the badge
//!   mapping [`status_badge`] and the status table [`action_for`]
//! - **Session** - [`Session`] is the single reader and invalidator of the
//!   bearer token
//! - **API client** - [`ApiClient`] attaches the token and applies the 401
//!   policy; [`TransactionClient`] binds `GET /transactions/{id}`
//! - **Poller** - [`StatusPoller`] runs in its own task, [`PollerHandle`] is
//!   what the screen holds
//! - **System** - [`WaitingSystem`] wires everything from an [`AppConfig`]
//!
//! ## Example Usage
//!
//! ```no_run
//! use transaction_watch::{AppConfig, UiEvent, WaitingSystem};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let (mut system, mut events) = WaitingSystem::mount(&config, "1042", Some("jwt"))?;
//!
//! while let Some(event) = events.recv().await {
//!     if let UiEvent::Navigate(route) = event {
//!         println!("go to {route}");
//!         break;
//!     }
//! }
//!
//! system.finished().await;
//! system.shutdown().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app_system;
pub mod config;
pub mod domain;
pub mod events;
pub mod poller;
pub mod session;
pub mod view;

#[cfg(test)]
mod mock_framework;

pub use api::{ApiClient, ApiError, TransactionClient, TransactionSource};
pub use app_system::{setup_tracing, AppError, WaitingSystem};
pub use config::{AppConfig, ConfigError};
pub use domain::*;
pub use events::{EventSink, EventStream, UiEvent};
pub use poller::{PollerConfig, PollerExit, PollerHandle, StatusPoller};
pub use session::{FileTokenStore, MemoryTokenStore, Session, SessionError, TokenStore};
pub use view::TransactionView;
