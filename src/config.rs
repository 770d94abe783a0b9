//! Configuration for fetchwire
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::protocol::DEFAULT_MAX_PAYLOAD_SIZE;

/// Main configuration for a fetchwire client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Server address (host:port)
    pub server_addr: String,

    /// Socket read timeout (milliseconds, 0 = no deadline)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = no deadline)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Max payload size a response header may advertise (in bytes).
    /// Larger announcements are refused before any payload is buffered.
    pub max_payload_size: u32,

    // -------------------------------------------------------------------------
    // Output Configuration
    // -------------------------------------------------------------------------
    /// Directory where retrieved files are written
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:7070".to_string(),
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the server address
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the maximum payload size a header may advertise (in bytes)
    pub fn max_payload_size(mut self, size: u32) -> Self {
        self.config.max_payload_size = size;
        self
    }

    /// Set the directory where retrieved files are written
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
