// Configuration types module

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default, rename = "static")]
    pub static_files: StaticConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory whose contents are exposed for retrieval.
    pub root: String,
    pub workers: Option<usize>,
}

/// Static file serving options
#[derive(Debug, Deserialize, Clone)]
pub struct StaticConfig {
    /// Files tried, in order, when a directory is requested.
    #[serde(default = "default_index_files")]
    pub index_files: Vec<String>,
    /// Generate an HTML listing when no index file exists.
    #[serde(default = "default_directory_listing")]
    pub directory_listing: bool,
}

fn default_index_files() -> Vec<String> {
    vec!["index.html".to_string(), "index.htm".to_string()]
}

const fn default_directory_listing() -> bool {
    true
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            index_files: default_index_files(),
            directory_listing: default_directory_listing(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_access_log")]
    pub access_log: bool,
    /// Access log format: `common`, `combined`, or `json`.
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (stdout if not set).
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (stderr if not set).
    #[serde(default)]
    pub error_log_file: Option<String>,
}

const fn default_access_log() -> bool {
    true
}

fn default_access_log_format() -> String {
    "common".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            access_log: default_access_log(),
            access_log_format: default_access_log_format(),
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Keep-alive is disabled when set to 0.
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
    #[serde(default = "default_read_timeout")]
    pub read_timeout: u64,
    #[serde(default = "default_write_timeout")]
    pub write_timeout: u64,
    /// Connections beyond this count are rejected at accept time.
    #[serde(default)]
    pub max_connections: Option<u64>,
}

const fn default_keep_alive_timeout() -> u64 {
    75
}

const fn default_read_timeout() -> u64 {
    30
}

const fn default_write_timeout() -> u64 {
    30
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            keep_alive_timeout: default_keep_alive_timeout(),
            read_timeout: default_read_timeout(),
            write_timeout: default_write_timeout(),
            max_connections: None,
        }
    }
}
