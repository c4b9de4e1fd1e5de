//! Client-side session: the bearer token attached to every request.
//!
//! The token itself is issued by the server (`taskdesk token <user>`) and is
//! opaque here. The session is passed explicitly to whoever needs it instead
//! of being read from global state.

use super::data_storage::DataStorage;
use anyhow::Result;
use std::fs;
use std::io::{ErrorKind, Write};

pub const SESSION_FILE: &str = ".session_token";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        let token = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Loads the saved session, anonymous when none was saved.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        match fs::read_to_string(path) {
            Ok(token) => Ok(Self::new(Some(token))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::anonymous()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        file.write_all(self.token.as_deref().unwrap_or_default().as_bytes())?;
        Ok(())
    }

    /// Removes the saved session. Returns `false` if there was none.
    pub fn clear() -> Result<bool> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
