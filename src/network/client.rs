//! Client Connection
//!
//! Owns the TCP stream to the server and runs one parse cycle per response.

use std::net::TcpStream;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{Message, ResponseReader};

/// Blocking client for the response protocol
pub struct Client {
    /// TCP stream to the server; lent to a parser one cycle at a time
    stream: TcpStream,

    /// Connection settings and protocol limits
    config: Config,

    /// Peer address for logging
    peer_addr: String,
}

impl Client {
    /// Connect to the configured server
    ///
    /// Applies the configured read/write deadlines to the socket. A deadline
    /// expiring mid-message surfaces as a `ReadTimeout` failure on that
    /// message.
    pub fn connect(config: Config) -> Result<Self> {
        let stream = TcpStream::connect(&config.server_addr)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        tracing::debug!("Connected to {}", peer_addr);

        Ok(Self {
            stream,
            config,
            peer_addr,
        })
    }

    /// Read and reassemble the next response from the stream
    ///
    /// Runs a fresh parse cycle; the stream is borrowed by the parser only
    /// for the duration of the three-stage read. A closed connection or
    /// expired deadline fails the current message and is surfaced to the
    /// caller for a policy decision - there is no automatic retry or
    /// reconnect at this layer.
    pub fn fetch_response(&mut self) -> Result<Message> {
        ResponseReader::new(&mut self.stream)
            .with_max_payload_size(self.config.max_payload_size)
            .into_message()
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
