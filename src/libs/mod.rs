//! Core library modules for taskdesk.
//!
//! ## Features
//!
//! - **Task model**: record shape, validation, status filter
//! - **Client**: session token, request runner, list view
//! - **Infrastructure**: configuration, data directory, console messages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::api::HttpTaskApi;
//! use taskdesk::libs::{config::Config, session::Session, view::TaskListView};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let session = Session::read()?;
//! let api = HttpTaskApi::new(&Config::read()?.api_url(), session.clone());
//! let mut view = TaskListView::new(session, api);
//! view.mount().await;
//! println!("{}", view.render());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod fetch;
pub mod messages;
pub mod session;
pub mod task;
pub mod view;
