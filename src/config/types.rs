//! Configuration types for the calculator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

use crate::models::{ErrorImpactInput, ThroughputInput};

/// Metadata about the calculator deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorMetadata {
    /// The human-readable name of the calculator.
    pub name: String,
    /// The version of the calibration in use.
    pub version: String,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Structure of `calculator.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorFile {
    /// Calculator metadata.
    pub metadata: CalculatorMetadata,
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Structure of `defaults.yaml`: the values a new calculation row starts from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Role names offered for throughput rows.
    pub roles: Vec<String>,
    /// Starting values for a throughput row.
    pub throughput: ThroughputInput,
    /// Starting values for an error impact row.
    pub error_impact: ErrorImpactInput,
}

/// The complete calculator configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct CalculatorConfig {
    metadata: CalculatorMetadata,
    server: ServerConfig,
    defaults: FormDefaults,
}

impl CalculatorConfig {
    /// Creates a new CalculatorConfig from its component parts.
    pub fn new(metadata: CalculatorMetadata, server: ServerConfig, defaults: FormDefaults) -> Self {
        Self {
            metadata,
            server,
            defaults,
        }
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.metadata
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Returns the form defaults.
    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 3000);
        assert_eq!(server.log_level, "info");
    }

    #[test]
    fn test_socket_addr_parses_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "debug".to_string(),
        };
        assert_eq!(server.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_calculator_file_without_server_uses_defaults() {
        let yaml = "metadata:\n  name: Test\n  version: \"1\"\n";
        let file: CalculatorFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.metadata.name, "Test");
        assert_eq!(file.server.port, 3000);
    }
}
