use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub backend: BackendSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Hosted backend (REST over the profiles table)
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_profiles_table")]
    pub profiles_table: String,
    #[serde(default = "default_visibility_column")]
    pub visibility_column: String,
    pub timeout_secs: Option<u64>,
}

fn default_profiles_table() -> String { "profiles".to_string() }
fn default_visibility_column() -> String { "is_public".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            max_entries: default_cache_entries(),
        }
    }
}

fn default_cache_ttl() -> u64 { 300 }
fn default_cache_entries() -> u64 { 1000 }

/// Result sizing. Scoring weights are fixed and not configurable.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_pool_size")]
    pub candidate_pool_size: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            candidate_pool_size: default_pool_size(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_pool_size() -> usize { 500 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Output shape of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    Pretty,
    Compact,
}

impl LoggingSettings {
    /// Unrecognised formats fall back to compact text
    pub fn log_format(&self) -> LogFormat {
        match self.format.to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with OCTAVA__)
    /// 5. SUPABASE_URL / SUPABASE_SERVICE_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., OCTAVA__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("OCTAVA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_backend_env(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// SUPABASE_URL / SUPABASE_SERVICE_KEY still override the file, as in `load`.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("OCTAVA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_backend_env(settings)?;

        settings.try_deserialize()
    }
}

/// Apply the backend's conventional environment variables on top of the config
fn apply_backend_env(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("SUPABASE_URL") {
        builder = builder.set_override("backend.url", url)?;
    }
    if let Ok(key) = env::var("SUPABASE_SERVICE_KEY") {
        builder = builder.set_override("backend.api_key", key)?;
    }

    builder.build()
}
