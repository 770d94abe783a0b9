//! # fetchwire
//!
//! Client-side decoder for a length-prefixed binary response protocol:
//! - Exact-count reads over a fragmenting byte stream
//! - Fixed 8-byte header codec (big-endian wire contract)
//! - Three-stage parse state machine (header -> name -> payload)
//! - Closed status classification with unknown-code passthrough
//! - Collision-free persistence of retrieved files
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       TCP Stream                             │
//! │                 (arbitrary fragmentation)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    read_exactly                              │
//! │             (short-read reassembly loop)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ header        name        payload
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   ResponseReader                             │
//! │   AwaitingHeader -> AwaitingName -> AwaitingPayload          │
//! │              -> Complete | Failed                            │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │                              │
//!            ▼                              ▼
//!     ┌─────────────┐               ┌─────────────┐
//!     │   render    │               │   output    │
//!     │ (to text)   │               │ (to disk)   │
//!     └─────────────┘               └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod network;
pub mod output;
pub mod protocol;
pub mod render;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{FetchError, Result};
pub use protocol::{Message, ResponseHeader, ResponseReader, Status};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of fetchwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
