//! Configuration for the Allergen Guard HTTP service.
//!
//! Environment-driven. In dev, every variable has a sensible default; in
//! staging/prod the model directory is required and startup aborts
//! without it.
//!
//! Variables:
//! - `ALLERGEN_GUARD_PORT`: HTTP port (default 8080)
//! - `PLATFORM_ENV`: dev | staging | prod (default dev)
//! - `MODEL_DIR`: model artifact directory (REQUIRED in staging/prod)
//! - `TELEMETRY_ENDPOINT`: optional HTTP telemetry sink
//! - `TELEMETRY_STDOUT`: emit telemetry JSON to stdout (default true)
//! - `ALLERGEN_GUARD_LOG_LEVEL`: log level (default info)

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Platform environment.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PlatformEnv {
    /// Local development
    #[default]
    Dev,
    /// Pre-production
    Staging,
    /// Production
    Prod,
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,

    /// Platform environment
    pub platform_env: PlatformEnv,

    /// Directory holding model artifacts
    pub model_dir: PathBuf,

    /// Optional HTTP telemetry sink
    pub telemetry_endpoint: Option<String>,

    /// Emit telemetry JSON to stdout
    pub telemetry_stdout: bool,

    /// Log level
    pub log_level: String,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("./artifacts")
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails fast in staging/prod when `MODEL_DIR` is missing; dev falls
    /// back to `./artifacts`.
    pub fn load() -> Result<Self> {
        let platform_env = match env::var("PLATFORM_ENV")
            .unwrap_or_else(|_| "dev".to_string())
            .as_str()
        {
            "prod" => PlatformEnv::Prod,
            "staging" => PlatformEnv::Staging,
            _ => PlatformEnv::Dev,
        };

        let model_dir = match env::var("MODEL_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) if platform_env == PlatformEnv::Dev => default_model_dir(),
            Err(_) => {
                return Err(anyhow!(
                    "MODEL_DIR environment variable is required outside dev. ABORTING STARTUP."
                ))
            }
        };

        Ok(Self {
            port: env::var("ALLERGEN_GUARD_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            platform_env,
            model_dir,
            telemetry_endpoint: env::var("TELEMETRY_ENDPOINT").ok(),
            telemetry_stdout: env::var("TELEMETRY_STDOUT")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            log_level: env::var("ALLERGEN_GUARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    /// Default configuration for development only.
    fn default() -> Self {
        Self {
            port: 8080,
            platform_env: PlatformEnv::Dev,
            model_dir: default_model_dir(),
            telemetry_endpoint: None,
            telemetry_stdout: true,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_dev() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.platform_env, PlatformEnv::Dev);
        assert_eq!(config.model_dir, PathBuf::from("./artifacts"));
        assert!(config.telemetry_endpoint.is_none());
    }
}
