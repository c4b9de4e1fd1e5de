//! Configuration for both halves of taskdesk.
//!
//! The configuration is a JSON file in the data directory with two optional
//! modules: `server` (bind address and database location) and `client` (the
//! URL of the task server). Missing modules fall back to defaults, so the
//! application runs without any setup.
//!
//! ## Resolution order
//!
//! - **Client URL**: `TASKDESK_API_URL` env var, then `client.api_url`, then
//!   [`DEFAULT_API_URL`]. A `.env` file in the working directory is loaded
//!   at startup.
//! - **Server**: CLI flags of `taskdesk serve`, then the `server` module, then
//!   [`ServerConfig::default`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("talking to {}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const API_URL_ENV: &str = "TASKDESK_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// A module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Settings of `taskdesk serve`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Database file; the data directory is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            db_path: None,
        }
    }
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: Message::ConfigModuleServer.to_string(),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleServer);
        let host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerHost.to_string())
            .default(config.host)
            .interact_text()?;
        let port: u16 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerPort.to_string())
            .default(config.port)
            .interact_text()?;
        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerDbPath.to_string())
            .default(config.db_path.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            host,
            port,
            db_path: Some(db_path).filter(|p| !p.trim().is_empty()),
        })
    }
}

/// Settings of the client commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "client".to_string(),
            name: Message::ConfigModuleClient.to_string(),
        }
    }

    pub fn init(config: &Option<ClientConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleClient);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
}

impl Config {
    /// Loads the configuration file, or defaults if there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive wizard; starts from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [ServerConfig::module(), ClientConfig::module()];
        let defaults = [config.server.is_some(), config.client.is_some()];
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&names)
            .defaults(&defaults)
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "client" => config.client = Some(ClientConfig::init(&config.client)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    /// Base URL of the task server the client talks to.
    pub fn api_url(&self) -> String {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.client.clone().unwrap_or_default().api_url,
        }
    }
}
