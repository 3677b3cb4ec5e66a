// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::STRONG_PASSWORD_LENGTH;

// Configuration for the password service and its page controller
#[derive(Debug, Clone)]
pub struct Config {
    // Page controller
    pub api_url: String,
    pub default_password_length: usize,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub static_dir: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Page controller
            api_url: "http://127.0.0.1:8080/api".to_string(),
            default_password_length: STRONG_PASSWORD_LENGTH,

            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 8080,
            static_dir: PathBuf::from("./frontend"),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = lookup("API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => log::warn!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val),
            }
        }

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Ignoring invalid WEB_PORT '{}'", val),
            }
        }

        if let Some(dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}
