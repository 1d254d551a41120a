use clap::Parser;
use std::path::PathBuf;

/// Multipart form to typed record bridge
#[derive(Parser, Debug, Clone)]
#[command(name = "formbridge", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMBRIDGE_CONFIG", default_value = "formbridge.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMBRIDGE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMBRIDGE_PORT")]
    pub port: Option<u16>,

    /// Maximum request body size in bytes
    #[arg(long, env = "FORMBRIDGE_BODY_LIMIT")]
    pub body_limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formbridge"]);
        assert_eq!(cli.config, PathBuf::from("formbridge.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.body_limit.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formbridge",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--body-limit",
            "4096",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.body_limit, Some(4096));
    }
}
