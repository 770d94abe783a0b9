//! Exact-count stream reads
//!
//! A single `read` on a byte stream may return fewer bytes than requested
//! (a short read). Reassembling a framed message therefore needs a loop that
//! keeps pulling until the requested count is satisfied or the stream is
//! confirmed closed.

use std::io::{ErrorKind, Read};

use bytes::Bytes;

use crate::error::{FetchError, Result};

/// Read exactly `n` bytes from `source`, tolerating arbitrary fragmentation
///
/// Re-issues reads until `n` bytes have accumulated, in delivery order. If the
/// source reports end-of-stream first, fails with
/// [`FetchError::ConnectionClosedEarly`] and the partial data is discarded -
/// a short message is never passed off as complete. A socket deadline expiring
/// mid-read surfaces as [`FetchError::ReadTimeout`], handled by callers in the
/// same way. Neither failure is retried here; retry policy belongs to the
/// caller.
///
/// `n == 0` returns an empty buffer without touching the source.
pub fn read_exactly<R: Read>(source: &mut R, n: usize) -> Result<Bytes> {
    if n == 0 {
        return Ok(Bytes::new());
    }

    let mut buf = vec![0u8; n];
    let mut received = 0;

    while received < n {
        match source.read(&mut buf[received..]) {
            Ok(0) => {
                return Err(FetchError::ConnectionClosedEarly {
                    received,
                    expected: n,
                });
            }
            Ok(count) => {
                received += count;
                tracing::trace!("Received {}/{} bytes", received, n);
            }
            Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(ref e) if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) => {
                return Err(FetchError::ReadTimeout {
                    received,
                    expected: n,
                });
            }
            Err(e) => return Err(FetchError::Io(e)),
        }
    }

    Ok(Bytes::from(buf))
}
