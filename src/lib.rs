//! # Bearbot
//!
//! A chat bot that signs recruiters in against the Honeypot recruiting
//! platform and relays talent-search queries from a chat channel to its
//! HTTP API.
//!
//! Two commands do the work:
//! - `login <email> <password>` - authenticate and keep a per-user session
//! - `search <keywords>` - query talents with the stored token
//!
//! The chat SDK's connection and event loop are external collaborators;
//! this crate provides the API client, the session store, and the command
//! dispatcher they drive.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod honeypot;
pub mod session;

pub use config::BotConfig;
pub use dispatcher::{Command, Dispatcher};
pub use error::BotError;
pub use honeypot::{RecruiterClient, Talent, TalentsPage};
pub use session::SessionStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
