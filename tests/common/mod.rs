//! Shared test utilities and backend fakes.

#![allow(dead_code, unused_imports)]

pub mod fake_server;
pub mod mock_backend;

use std::path::PathBuf;
use std::sync::Arc;

use adpilot::api::ApiClient;
use adpilot::config::{ApiConfig, Config};
use adpilot::notify::RecordingNotifier;
use adpilot::ui::Console;
use tempfile::TempDir;

/// Config pointing at `base_url` with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    config
}

pub fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&test_config(base_url).api).expect("Failed to build client")
}

/// Console wired to a recording notifier.
pub fn console(config: &Config) -> (Console, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let console = Console::new(config, Arc::new(notifier.clone())).expect("Failed to build console");
    (console, notifier)
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Find an available port with nothing listening on it afterwards.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}
