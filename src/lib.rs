//! # Quartermaster
//!
//! A blocking REST client for Sonatype Nexus Repository Manager 3, with
//! a small utility that mirrors repository/component metadata into a
//! local SQLite database.
//!
//! ```rust,ignore
//! use quartermaster::{ClientConfig, NexusClient};
//!
//! let client = NexusClient::new(&ClientConfig::from_env()?)?;
//! println!("writable: {}", client.is_writable()?);
//! for repo in client.repositories().list()? {
//!     println!("{} ({})", repo.name, repo.format);
//! }
//! ```
//!
//! Every operation is one HTTP request; failures map to the typed kinds
//! in [`error::Error`]. Paginated listings hand back a continuation
//! token ([`types::Page`]) that the caller resubmits to continue.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod mirror;
pub mod types;

pub use client::NexusClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
