use crate::db::db::Db;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Shared by every handler. The SQLite connection is not `Sync`, so it sits
/// behind a mutex; guards must never be held across an `.await`.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Db>>,
}

impl AppState {
    pub fn new(db: Db) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    pub fn db(&self) -> MutexGuard<'_, Db> {
        self.db.lock()
    }
}
