//! Message definitions
//!
//! A fully reassembled server response.

use bytes::Bytes;

use crate::render;

use super::{encode_header, ResponseHeader, Status};

/// A complete response: header plus the two variable-length fields it
/// described, reassembled from the stream.
///
/// Owns its name and payload buffers outright; the socket it was read from is
/// free for the next request as soon as the message exists. One message per
/// parse cycle - messages are never reused.
#[derive(Debug, Clone)]
pub struct Message {
    /// The decoded fixed header
    pub header: ResponseHeader,

    /// Classification of `header.status_code`
    pub status: Status,

    /// Name field (empty when the header advertised `name_len == 0`)
    pub name: Bytes,

    /// Payload field (empty when the header advertised `data_size == 0`)
    pub payload: Bytes,
}

impl Message {
    /// Name rendered as text: UTF-8, falling back to hex on decode failure
    pub fn name_text(&self) -> String {
        render::display_bytes(&self.name)
    }

    /// Payload rendered as text: UTF-8, falling back to hex on decode failure
    pub fn payload_text(&self) -> String {
        render::display_bytes(&self.payload)
    }

    /// Multi-line console report of this response
    ///
    /// Pure rendering: performs no I/O. Persisting a retrieved payload is a
    /// separate, explicit step ([`output::write_payload`](crate::output::write_payload)).
    pub fn summary(&self) -> String {
        format!(
            "Response Received:\n\
             {}\n\
             Version: {}\n\
             Status: {}\n\
             Name Length: {} Bytes\n\
             File Name: {}\n\
             Data Size: {} Bytes\n\
             Data Received:\n{}",
            render::hex_dump(&encode_header(&self.header)),
            self.header.version,
            self.status,
            self.header.name_len,
            self.name_text(),
            self.header.data_size,
            self.payload_text(),
        )
    }
}
