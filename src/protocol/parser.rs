//! Response parser
//!
//! State machine that reassembles one response from a byte stream.
//!
//! ## States
//!
//! ```text
//! AwaitingHeader ──> AwaitingName ──> AwaitingPayload ──> Complete
//!        │                 │                 │
//!        └─────────────────┴─────────────────┴──────────> Failed
//! ```
//!
//! Each state carries only the fields that are valid in it, so a half-parsed
//! message can never be observed: accessors return `None` ("unset") until the
//! owning stage has succeeded, which is distinct from a legitimately empty
//! name or payload.
//!
//! Read failures are caught at the stage boundary and recorded as the
//! terminal `Failed` state; they do not bubble through the pull API. The
//! caller inspects the outcome via the accessors or takes it out with
//! [`ResponseReader::into_message`].

use std::io::Read;
use std::mem;

use bytes::Bytes;

use crate::error::{FetchError, Result};
use crate::network::read_exactly;

use super::{decode_header, Message, ResponseHeader, Status, DEFAULT_MAX_PAYLOAD_SIZE, HEADER_SIZE};

/// Which stage the parser is in, for external inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    AwaitingHeader,
    AwaitingName,
    AwaitingPayload,
    Complete,
    Failed,
}

/// Internal state, carrying the fields valid for each stage
#[derive(Debug)]
enum State {
    AwaitingHeader,
    AwaitingName {
        header: ResponseHeader,
        status: Status,
    },
    AwaitingPayload {
        header: ResponseHeader,
        status: Status,
        name: Bytes,
    },
    Complete {
        header: ResponseHeader,
        status: Status,
        name: Bytes,
        payload: Bytes,
    },
    Failed(FetchError),
}

/// Incremental decoder for one server response
///
/// Drives the source through three exact-count reads in strict sequence:
/// header, name, payload. The source is typically `&mut TcpStream` - the
/// parser borrows it for one parse cycle and releases it when consumed.
///
/// Stages are idempotent: re-invoking a stage that already ran is a no-op,
/// since the underlying stream is one-shot and must never be re-read.
pub struct ResponseReader<R> {
    source: R,
    max_payload_size: u32,
    state: State,
}

impl<R: Read> ResponseReader<R> {
    /// Create a parser over a byte source, with the default payload cap
    pub fn new(source: R) -> Self {
        Self {
            source,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
            state: State::AwaitingHeader,
        }
    }

    /// Override the maximum payload size a header may advertise
    pub fn with_max_payload_size(mut self, max: u32) -> Self {
        self.max_payload_size = max;
        self
    }

    // =========================================================================
    // Stage Transitions
    // =========================================================================

    /// Stage 1: read and decode the fixed 8-byte header
    ///
    /// On success the status code is classified and the parser advances to
    /// the name stage. On a read or decode failure the parser lands in
    /// `Failed`, which the later stages skip cleanly.
    pub fn read_header(&mut self) {
        if !matches!(self.state, State::AwaitingHeader) {
            return;
        }

        self.state = match self.try_read_header() {
            Ok((header, status)) => State::AwaitingName { header, status },
            Err(e) => State::Failed(e),
        };
    }

    fn try_read_header(&mut self) -> Result<(ResponseHeader, Status)> {
        let bytes = read_exactly(&mut self.source, HEADER_SIZE)?;
        let header = decode_header(&bytes)?;

        if header.data_size > self.max_payload_size {
            return Err(FetchError::PayloadTooLarge {
                size: header.data_size,
                max: self.max_payload_size,
            });
        }

        let status = header.status();
        tracing::debug!(
            "Decoded header: version={} status={} name_len={} data_size={}",
            header.version,
            status,
            header.name_len,
            header.data_size
        );

        Ok((header, status))
    }

    /// Stage 2: read the name field
    ///
    /// Skipped with zero I/O when the header advertised `name_len == 0`; the
    /// name is then empty, not unset. A no-op if the stage already ran or the
    /// parser has failed.
    pub fn read_name(&mut self) {
        let (header, status) = match &self.state {
            State::AwaitingName { header, status } => (*header, *status),
            _ => return,
        };

        let result = if header.name_len == 0 {
            Ok(Bytes::new())
        } else {
            read_exactly(&mut self.source, header.name_len as usize)
        };

        self.state = match result {
            Ok(name) => State::AwaitingPayload {
                header,
                status,
                name,
            },
            Err(e) => State::Failed(e),
        };
    }

    /// Stage 3: read the payload field
    ///
    /// Skipped with zero I/O when the header advertised `data_size == 0`.
    /// A no-op if the stage already ran or the parser has failed.
    pub fn read_payload(&mut self) {
        if !matches!(self.state, State::AwaitingPayload { .. }) {
            return;
        }

        match mem::replace(&mut self.state, State::AwaitingHeader) {
            State::AwaitingPayload {
                header,
                status,
                name,
            } => {
                let result = if header.data_size == 0 {
                    Ok(Bytes::new())
                } else {
                    read_exactly(&mut self.source, header.data_size as usize)
                };

                self.state = match result {
                    Ok(payload) => State::Complete {
                        header,
                        status,
                        name,
                        payload,
                    },
                    Err(e) => State::Failed(e),
                };
            }
            other => self.state = other,
        }
    }

    /// Drive all remaining stages in sequence
    pub fn read_message(&mut self) {
        self.read_header();
        self.read_name();
        self.read_payload();
    }

    /// Drive any remaining stages and consume the parser
    ///
    /// Returns the owned [`Message`] on `Complete`, or the recorded failure.
    pub fn into_message(mut self) -> Result<Message> {
        self.read_message();

        match self.state {
            State::Complete {
                header,
                status,
                name,
                payload,
            } => Ok(Message {
                header,
                status,
                name,
                payload,
            }),
            State::Failed(e) => Err(e),
            // read_message always drains to Complete or Failed
            _ => unreachable!("parser left in a non-terminal state"),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current stage
    pub fn state(&self) -> ParseState {
        match &self.state {
            State::AwaitingHeader => ParseState::AwaitingHeader,
            State::AwaitingName { .. } => ParseState::AwaitingName,
            State::AwaitingPayload { .. } => ParseState::AwaitingPayload,
            State::Complete { .. } => ParseState::Complete,
            State::Failed(_) => ParseState::Failed,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, State::Complete { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// The decoded header, or `None` if the header stage has not succeeded
    pub fn header(&self) -> Option<&ResponseHeader> {
        match &self.state {
            State::AwaitingName { header, .. }
            | State::AwaitingPayload { header, .. }
            | State::Complete { header, .. } => Some(header),
            _ => None,
        }
    }

    /// The classified status, or `None` if the header stage has not succeeded
    pub fn status(&self) -> Option<Status> {
        match &self.state {
            State::AwaitingName { status, .. }
            | State::AwaitingPayload { status, .. }
            | State::Complete { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw status code, preserved even for unknown classifications
    pub fn raw_status(&self) -> Option<u16> {
        self.header().map(|h| h.status_code)
    }

    /// The name bytes: `None` until the name stage succeeds, `Some(&[])` for
    /// a legitimately zero-length name
    pub fn name(&self) -> Option<&[u8]> {
        match &self.state {
            State::AwaitingPayload { name, .. } | State::Complete { name, .. } => Some(name),
            _ => None,
        }
    }

    /// The payload bytes: `None` until the payload stage succeeds,
    /// `Some(&[])` for a legitimately zero-length payload
    pub fn payload(&self) -> Option<&[u8]> {
        match &self.state {
            State::Complete { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// The recorded failure, if the parser is in the `Failed` state
    pub fn failure(&self) -> Option<&FetchError> {
        match &self.state {
            State::Failed(e) => Some(e),
            _ => None,
        }
    }
}
