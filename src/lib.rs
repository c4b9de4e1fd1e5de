//! # Taskdesk - a minimal task tracker
//!
//! One binary, two sides:
//!
//! - **Server**: a REST API over an SQLite task store. Every request carries
//!   a bearer token; tasks are scoped to the user the token belongs to.
//! - **Client**: a task list view with an all/completed/incomplete filter,
//!   toggle and delete. The list is re-fetched after every mutation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
pub mod server;
