//! `sabores-app`
//!
//! **Responsibility:** wire the catalog, cart and checkout into one ordering
//! session, load configuration, publish user notifications, and drive it all
//! from a line-oriented console (`sabores-menu`).

pub mod config;
pub mod console;
pub mod notify;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use notify::Notification;
pub use session::{MenuSession, SessionError};
