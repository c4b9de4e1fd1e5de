/// Every user-facing text of the application. Rendered by the `Display`
/// implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
    TaskNotFound(String),
    TasksHeader(usize),
    TasksNotFound,
    AddNewTask,
    Loading,

    // === FETCH MESSAGES ===
    RequestFailed(String),
    ServerError(u16, String),
    NotLoggedIn,

    // === SESSION MESSAGES ===
    LoggedIn,
    LoggedOut,
    AlreadyLoggedOut,
    TokenIssued(String, String), // user, token
    TokenRevoked,
    TokenUnknown,
    EmptyToken,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,
    ConfigModuleClient,
    PromptServerHost,
    PromptServerPort,
    PromptServerDbPath,
    PromptApiUrl,
    SelectConfigModules,

    // === SERVER MESSAGES ===
    ServerListening(String),
    ServerStopped,

    // === DATABASE MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
}
