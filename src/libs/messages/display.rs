//! Text of every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::TasksHeader(count) => format!("Your tasks ({})", count),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::AddNewTask => "+ Add new task".to_string(),
            Message::Loading => "Loading...".to_string(),

            // === FETCH MESSAGES ===
            Message::RequestFailed(error) => format!("Request failed: {}", error),
            Message::ServerError(status, msg) => format!("Server responded with {}: {}", status, msg),
            Message::NotLoggedIn => "You are not logged in. Run `taskdesk login <token>` first.".to_string(),

            // === SESSION MESSAGES ===
            Message::LoggedIn => "Logged in, token saved".to_string(),
            Message::LoggedOut => "Logged out".to_string(),
            Message::AlreadyLoggedOut => "No saved session, nothing to do".to_string(),
            Message::TokenIssued(user, token) => format!("Token for '{}': {}", user, token),
            Message::TokenRevoked => "Token revoked".to_string(),
            Message::TokenUnknown => "No such token".to_string(),
            Message::EmptyToken => "Token must not be empty".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleClient => "Client settings".to_string(),
            Message::PromptServerHost => "Address the server binds to".to_string(),
            Message::PromptServerPort => "Port the server listens on".to_string(),
            Message::PromptServerDbPath => "Database file (empty for the data directory)".to_string(),
            Message::PromptApiUrl => "Task server URL".to_string(),
            Message::SelectConfigModules => "Select modules to configure".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Task server listening on http://{}", addr),
            Message::ServerStopped => "Task server stopped".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
        };
        write!(f, "{}", text)
    }
}
