//! Test configuration builder for creating test configs programmatically

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for a `main.toml` inside a temporary config directory
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    host: String,
    port: u16,
    base_url: String,
    api_token: String,
    request_timeout_seconds: Option<u64>,
    default_page_size: Option<usize>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            host: "127.0.0.1".to_string(),
            port: 8096,
            base_url: "http://localhost:9000/app/v1".to_string(),
            api_token: "file-token".to_string(),
            request_timeout_seconds: None,
            default_page_size: None,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_seconds = Some(seconds);
        self
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = Some(size);
        self
    }

    pub fn to_toml(&self) -> String {
        let mut toml = format!(
            "host = \"{}\"\nport = {}\n\n[directory]\nbase_url = \"{}\"\napi_token = \"{}\"\n",
            self.host, self.port, self.base_url, self.api_token
        );
        if let Some(seconds) = self.request_timeout_seconds {
            toml.push_str(&format!("request_timeout_seconds = {}\n", seconds));
        }
        if let Some(size) = self.default_page_size {
            toml.push_str(&format!("\n[view]\ndefault_page_size = {}\n", size));
        }
        toml
    }

    /// Write config files to the temp directory
    pub fn build(self) -> TestConfig {
        let config_dir = self.temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("main.toml"), self.to_toml()).expect("Failed to write main.toml");

        TestConfig {
            _temp_dir: self.temp_dir,
            config_dir,
        }
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the temp directory alive for the test's duration
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestConfig {
    pub fn config_dir_string(&self) -> String {
        self.config_dir.to_string_lossy().to_string()
    }
}
