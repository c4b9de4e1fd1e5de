use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Result};
use uuid::Uuid;

const INSERT_TOKEN: &str = "INSERT INTO tokens (token, user_id, created_at) VALUES (?1, ?2, ?3)";
const SELECT_USER: &str = "SELECT user_id FROM tokens WHERE token = ?1";
const DELETE_TOKEN: &str = "DELETE FROM tokens WHERE token = ?1";

/// Bearer tokens and the users they identify.
pub struct Tokens<'c> {
    conn: &'c Connection,
}

impl<'c> Tokens<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Tokens { conn }
    }

    /// Creates a fresh opaque token for `user_id`.
    pub fn issue(&self, user_id: &str) -> Result<String> {
        let token = Uuid::new_v4().simple().to_string();
        self.conn.execute(INSERT_TOKEN, params![token, user_id, Utc::now().to_rfc3339()])?;
        Ok(token)
    }

    pub fn resolve(&self, token: &str) -> Result<Option<String>> {
        self.conn.query_row(SELECT_USER, params![token], |row| row.get(0)).optional()
    }

    pub fn revoke(&self, token: &str) -> Result<usize> {
        self.conn.execute(DELETE_TOKEN, params![token])
    }
}
