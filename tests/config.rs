#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use taskdesk::libs::config::{ClientConfig, Config, ServerConfig, API_URL_ENV, DEFAULT_API_URL};
    use taskdesk::libs::session::Session;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// HOME is process-wide, so tests touching the data directory take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(API_URL_ENV);
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_config_reads_as_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server().addr(), "127.0.0.1:5000");
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                db_path: Some("/tmp/tasks.db".to_string()),
            }),
            client: Some(ClientConfig {
                api_url: "http://tasks.local:8080".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.server().addr(), "0.0.0.0:8080");
        assert_eq!(loaded.api_url(), "http://tasks.local:8080");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_api_url(_ctx: &mut ConfigTestContext) {
        std::env::set_var(API_URL_ENV, "http://override:9000");
        assert_eq!(Config::default().api_url(), "http://override:9000");

        std::env::set_var(API_URL_ENV, "   ");
        assert_eq!(Config::default().api_url(), DEFAULT_API_URL);
        std::env::remove_var(API_URL_ENV);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_session_save_read_clear(_ctx: &mut ConfigTestContext) {
        assert!(!Session::read().unwrap().is_logged_in());
        assert!(!Session::clear().unwrap());

        Session::new(Some("abc123".to_string())).save().unwrap();
        let session = Session::read().unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some("abc123"));

        assert!(Session::clear().unwrap());
        assert_eq!(Session::read().unwrap(), Session::anonymous());
    }
}
