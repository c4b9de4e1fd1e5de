//! Database layer for taskdesk.
//!
//! SQLite persistence for the server side: task records scoped by owner and
//! the bearer tokens that identify those owners. The schema is created and
//! evolved by the migration system on every open.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::{db::Db, tasks::Tasks};
//! use taskdesk::libs::task::{NewTask, TaskFilter};
//!
//! let db = Db::new()?;
//! let tasks = Tasks::new(&db.conn);
//! tasks.insert(&NewTask::new("alice", "buy milk"))?;
//! let open = tasks.fetch("alice", TaskFilter::Incomplete)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and migration on open.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Owner-scoped task CRUD.
pub mod tasks;

/// Bearer token issue and lookup.
pub mod tokens;
