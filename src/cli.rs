use anyhow::Result;
use clap::{Parser, Subcommand};
use common::Period;

pub mod commands;

use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_DIST_DIR, ServerConfig};
use commands::{serve, snapshot, SnapshotFormat};

#[derive(Parser)]
#[command(name = "bizdash")]
#[command(about = "Business dashboard host server and data snapshot tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built dashboard frontend
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = DEFAULT_BIND_ADDRESS)]
        bind_address: String,

        /// Directory containing the Trunk build output (index.html + wasm)
        #[arg(short, long, env = "DIST_DIR", default_value = DEFAULT_DIST_DIR)]
        dist_dir: String,

        /// Per-request timeout in seconds
        #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
        request_timeout_secs: u64,
    },
    /// Print the dashboard datasets for a period
    Snapshot {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SnapshotFormat::Json)]
        format: SnapshotFormat,

        /// Period shown as selected (week, month or year)
        #[arg(short, long, default_value = "month")]
        period: Period,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                dist_dir,
                request_timeout_secs,
            } => {
                let config = ServerConfig {
                    request_timeout_secs,
                    ..ServerConfig::new(bind_address, dist_dir)
                };
                serve(&config).await?;
            }
            Commands::Snapshot { format, period } => {
                let output = snapshot(period, format)?;
                println!("{}", output);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot_command() {
        let cli = Cli::try_parse_from(["bizdash", "snapshot", "--format", "yaml", "--period", "week"])
            .unwrap();
        match cli.command {
            Commands::Snapshot { format, period } => {
                assert_eq!(format, SnapshotFormat::Yaml);
                assert_eq!(period, Period::Week);
            }
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn test_snapshot_defaults() {
        let cli = Cli::try_parse_from(["bizdash", "snapshot"]).unwrap();
        match cli.command {
            Commands::Snapshot { format, period } => {
                assert_eq!(format, SnapshotFormat::Json);
                assert_eq!(period, Period::Month);
            }
            _ => panic!("expected snapshot command"),
        }
    }

    #[test]
    fn test_unknown_period_rejected() {
        let result = Cli::try_parse_from(["bizdash", "snapshot", "--period", "quarter"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_serve_command() {
        let cli = Cli::try_parse_from([
            "bizdash",
            "serve",
            "--bind-address",
            "127.0.0.1:9000",
            "--dist-dir",
            "/tmp/dist",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve {
                bind_address,
                dist_dir,
                ..
            } => {
                assert_eq!(bind_address, "127.0.0.1:9000");
                assert_eq!(dist_dir, "/tmp/dist");
            }
            _ => panic!("expected serve command"),
        }
    }
}
