// File: console/src/config/manager.rs
use super::Config;
use crate::constants::{cleanup, directory, view};
use crate::errors::ConfigError;
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    async fn load_configuration(config_dir: &str) -> Result<Config> {
        let main_config_path = format!("{}/main.toml", config_dir);
        let main_config_content = fs::read_to_string(&main_config_path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: main_config_path.clone(),
                reason: e.to_string(),
            })?;

        debug!("Loaded main config: {}", main_config_path);

        let mut config = Self::parse(&main_config_content)?;
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        info!(
            "Configuration loaded: directory {}, listening on {}:{}",
            config.directory.base_url, config.host, config.port
        );

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| {
            anyhow!(ConfigError::ParseError {
                reason: e.to_string()
            })
        })
    }

    /// Environment wins over the file for the directory URL and token
    pub fn apply_env_overrides(config: &mut Config) {
        if let Ok(url) = std::env::var(directory::BASE_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("Directory URL overridden by {}", directory::BASE_URL_ENV);
                config.directory.base_url = url.trim().to_string();
            }
        }

        if let Ok(token) = std::env::var(directory::API_TOKEN_ENV) {
            if !token.trim().is_empty() {
                debug!("Directory token overridden by {}", directory::API_TOKEN_ENV);
                config.directory.api_token = token.trim().to_string();
            }
        }
    }

    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }

        let base_url = &config.directory.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "directory.base_url".to_string(),
                reason: format!("'{}' is not an http(s) URL", base_url),
            });
        }

        if !view::PAGE_SIZES.contains(&config.view.default_page_size) {
            return Err(ConfigError::InvalidValue {
                field: "view.default_page_size".to_string(),
                reason: format!(
                    "{} is not one of {:?}",
                    config.view.default_page_size,
                    view::PAGE_SIZES
                ),
            });
        }

        let idle_minutes = config.view.session_idle_minutes;
        if idle_minutes <= 0 || idle_minutes > cleanup::MAX_SESSION_IDLE_MINUTES {
            return Err(ConfigError::InvalidValue {
                field: "view.session_idle_minutes".to_string(),
                reason: format!(
                    "{} is outside 1..={}",
                    idle_minutes,
                    cleanup::MAX_SESSION_IDLE_MINUTES
                ),
            });
        }

        Ok(())
    }
}
