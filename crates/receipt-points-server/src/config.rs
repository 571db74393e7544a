//! Server configuration, from flags or the environment.

use std::net::SocketAddr;

use clap::Parser;
use receipt_points::ProcessorConfig;

/// Receipt Points HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-points-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "RECEIPT_POINTS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "RECEIPT_POINTS_LOG", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[arg(long, env = "RECEIPT_POINTS_JSON_LOGS")]
    pub json_logs: bool,

    /// Log each rule's contribution at debug level.
    #[arg(long, env = "RECEIPT_POINTS_LOG_BREAKDOWN")]
    pub log_breakdown: bool,
}

impl ServerConfig {
    /// Processor settings derived from the server flags.
    pub fn processor(&self) -> ProcessorConfig {
        ProcessorConfig {
            log_breakdown: self.log_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["receipt-points-server"]).unwrap();

        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "info");
        assert!(!config.json_logs);
        assert!(!config.processor().log_breakdown);
        assert_eq!(
            config.processor().log_breakdown,
            ProcessorConfig::default().log_breakdown
        );
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "receipt-points-server",
            "--bind",
            "127.0.0.1:9000",
            "--log-level",
            "debug",
            "--json-logs",
            "--log-breakdown",
        ])
        .unwrap();

        assert_eq!(config.bind.port(), 9000);
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
        assert!(config.processor().log_breakdown);
    }

    #[test]
    fn test_bad_bind_address() {
        let result = ServerConfig::try_parse_from(["receipt-points-server", "--bind", "nowhere"]);
        assert!(result.is_err());
    }
}
