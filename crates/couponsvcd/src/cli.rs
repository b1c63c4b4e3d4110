//! Command-line flags and config resolution.
//!
//! Precedence, highest first: flag, environment variable, config file,
//! built-in default.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use coupon_core::{ConfigError, ServiceConfig};

#[derive(Debug, Parser)]
#[command(name = "couponsvcd", about = "Coupon validation gRPC service", version)]
pub struct Cli {
    /// Optional TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Address to bind.
    #[arg(long, env = "COUPON_HOST")]
    pub host: Option<IpAddr>,

    /// Port to listen on.
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// CSV file with `code,discount` rows.
    #[arg(long, env = "COUPON_SOURCE")]
    pub coupons: Option<PathBuf>,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Build the effective service config.
    ///
    /// Only an explicitly named config file can fail here; without one
    /// the defaults are used.
    pub fn resolve_config(&self) -> Result<ServiceConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };
        Ok(base.with_overrides(self.host, self.port, self.coupons.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("couponsvcd").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--coupons",
            "/data/coupons.csv",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.coupons.path, PathBuf::from("/data/coupons.csv"));
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 7000\n\n[coupons]\npath = \"from-file.csv\"").unwrap();
        let path = file.path().to_str().unwrap();

        let cli = parse(&["--config", path, "--port", "7100"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.server.port, 7100);

        let cli = parse(&["--config", path, "--coupons", "from-flag.csv"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.coupons.path, PathBuf::from("from-flag.csv"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = parse(&["--config", "/nonexistent/couponsvc.toml"]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn log_format_values() {
        assert_eq!(parse(&[]).log_format, LogFormat::Text);
        assert_eq!(parse(&["--log-format", "json"]).log_format, LogFormat::Json);
        assert!(Cli::try_parse_from(["couponsvcd", "--log-format", "xml"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["couponsvcd", "--port", "sixty"]).is_err());
    }
}
