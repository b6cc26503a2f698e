//! Teller - Terminal client for a remote banking ledger
//!
//! This library provides the core functionality for the Teller client. The
//! ledger itself lives behind a JSON endpoint; Teller builds requests from
//! what the user types, renders the answers, and reports failures.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, paths and logging setup
//! - `error`: Custom error types
//! - `models`: Wire data models (accounts, transactions, money)
//! - `protocol`: Request and response payloads
//! - `transport`: The single JSON round trip to the endpoint
//! - `client`: Typed ledger operations on top of the transport
//! - `status`: The shared notification slot
//! - `display`: Formatting of amounts, dates and table rows
//! - `view`: Binds a presentation surface to the client
//! - `tui`: Interactive terminal surface
//! - `cli`: One-shot console surface
//!
//! # Example
//!
//! ```rust,ignore
//! use teller::config::{TellerPaths, Settings};
//!
//! let paths = TellerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod protocol;
pub mod status;
pub mod transport;
pub mod tui;
pub mod view;

pub use error::{TellerError, TellerResult};
