//! Protocol codec
//!
//! Encoding and decoding of the fixed response header.
//!
//! ## Header Layout
//!
//! ```text
//! ┌──────────┬────────────┬────────────┬─────────────┐
//! │ Ver (1)  │ Status (2) │ NameLen (1)│ DataSize (4)│
//! └──────────┴────────────┴────────────┴─────────────┘
//! ```
//!
//! Field order, widths, and big-endian byte order are the wire contract:
//! changing any of them breaks interoperability with the server silently.

use crate::error::{FetchError, Result};

use super::ResponseHeader;

/// Header size: 1 byte version + 2 bytes status + 1 byte name length
/// + 4 bytes data size
pub const HEADER_SIZE: usize = 8;

/// Default maximum payload size a header may advertise (16 MB)
pub const DEFAULT_MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

/// Encode a header into its fixed 8-byte wire form
pub fn encode_header(header: &ResponseHeader) -> [u8; HEADER_SIZE] {
    let mut buf = [0u8; HEADER_SIZE];
    buf[0] = header.version;
    buf[1..3].copy_from_slice(&header.status_code.to_be_bytes());
    buf[3] = header.name_len;
    buf[4..8].copy_from_slice(&header.data_size.to_be_bytes());
    buf
}

/// Decode a header from exactly [`HEADER_SIZE`] bytes
///
/// Fails with [`FetchError::MalformedHeader`] if the buffer length does not
/// match the fixed layout. An unrecognized status code is NOT a decode
/// failure; classification is deferred to [`Status`](super::Status).
pub fn decode_header(bytes: &[u8]) -> Result<ResponseHeader> {
    if bytes.len() != HEADER_SIZE {
        return Err(FetchError::MalformedHeader(format!(
            "expected {} bytes, got {}",
            HEADER_SIZE,
            bytes.len()
        )));
    }

    Ok(ResponseHeader {
        version: bytes[0],
        status_code: u16::from_be_bytes([bytes[1], bytes[2]]),
        name_len: bytes[3],
        data_size: u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
    })
}
