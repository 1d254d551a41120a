use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub form: FormSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Limits applied to incoming form submissions
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormSettings {
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            body_limit_bytes: default_body_limit(),
        }
    }
}

fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT_BYTES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            form: FormSettings::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let mut settings = Self::load(File::from(cli.config.clone()).required(false))?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.validate()?;
        Ok(settings)
    }

    /// Load `formbridge.{toml,yaml,json}` from `root`, if present.
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("formbridge");
        let settings = Self::load(File::from(config_path).required(false))?;
        settings.validate()?;
        Ok(settings)
    }

    fn load<T>(source: T) -> Result<Self, anyhow::Error>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let s = Config::builder()
            .add_source(source)
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("form.body_limit_bytes", DEFAULT_BODY_LIMIT_BYTES as i64)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(limit) = cli.body_limit {
            self.form.body_limit_bytes = limit;
        }
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        validator::ConfigValidator::validate(self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })
    }
}
