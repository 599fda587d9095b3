use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use common::storage::DEFAULT_MAX_VALUE_BYTES;

use crate::seed::DEFAULT_ADMIN_PASSWORD;

/// Where and how collections are stored.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Root directory of the filesystem store. Default: "./data".
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Largest value accepted for a single key. Default: 5 MiB.
    #[serde(default = "default_max_value_bytes")]
    pub max_value_bytes: u64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_max_value_bytes() -> u64 {
    DEFAULT_MAX_VALUE_BYTES
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            max_value_bytes: default_max_value_bytes(),
        }
    }
}

/// First-run data.
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Password of the synthetic admin account. Default: "ep1so1n1".
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Whether an empty content collection is filled with samples. Default: true.
    #[serde(default = "default_sample_content")]
    pub sample_content: bool,
}

fn default_admin_password() -> String {
    DEFAULT_ADMIN_PASSWORD.into()
}
fn default_sample_content() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_password: default_admin_password(),
            sample_content: default_sample_content(),
        }
    }
}

/// Argon2 cost parameters for new password hashes.
///
/// Existing hashes carry their own parameters, so changing these only affects
/// accounts created afterwards.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Memory cost in KiB. Default: 19456.
    #[serde(default = "default_memory_kib")]
    pub argon2_memory_kib: u32,
    /// Number of passes. Default: 2.
    #[serde(default = "default_iterations")]
    pub argon2_iterations: u32,
    /// Degree of parallelism. Default: 1.
    #[serde(default = "default_parallelism")]
    pub argon2_parallelism: u32,
}

fn default_memory_kib() -> u32 {
    argon2::Params::DEFAULT_M_COST
}
fn default_iterations() -> u32 {
    argon2::Params::DEFAULT_T_COST
}
fn default_parallelism() -> u32 {
    argon2::Params::DEFAULT_P_COST
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            argon2_memory_kib: default_memory_kib(),
            argon2_iterations: default_iterations(),
            argon2_parallelism: default_parallelism(),
        }
    }
}

/// Text-generation service used to draft content descriptions.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DescribeConfig {
    /// HTTP endpoint. Empty disables generation.
    #[serde(default)]
    pub endpoint: String,
    /// Bearer token sent with each request, if non-empty.
    #[serde(default)]
    pub api_key: String,
}

/// Portal configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub describe: DescribeConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CULTUR_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("storage.data_dir", "./data")?
            .set_default("storage.max_value_bytes", DEFAULT_MAX_VALUE_BYTES)?
            .set_default("seed.admin_password", DEFAULT_ADMIN_PASSWORD)?
            .set_default("seed.sample_content", true)?
            // Load from config/config.toml (or the file named by CULTUR_CONFIG)
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., CULTUR__STORAGE__DATA_DIR)
            .add_source(Environment::with_prefix("CULTUR").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
