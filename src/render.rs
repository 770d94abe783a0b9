//! Text rendering
//!
//! Converts raw wire bytes into printable text. Pure string conversion -
//! persisting a payload to disk lives in [`output`](crate::output).

/// Render bytes as UTF-8 text, falling back to hex when decoding fails
pub fn display_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => format!("Raw data (hex): {}", compact_hex(bytes)),
    }
}

/// Hex dump of a byte buffer: uppercase pairs separated by spaces
///
/// Used for the raw header bytes in a response summary.
pub fn hex_dump(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn compact_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
