//! Reassembly of broadcast records from a raw byte stream.
//!
//! Records carry no length prefix and no terminator, and a single record may
//! arrive split across several reads. Bytes are buffered until the stream has
//! been quiet for a short while; the buffered bytes are then one record.
//! Broadcast ticks are seconds apart, so a quiet window of a few hundred
//! milliseconds separates records reliably.

use songcast_shared::protocol::SongPayload;

/// Buffers partial reads until a record is complete.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    buffer: Vec<u8>,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes from one read.
    pub fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the buffered bytes as one record.
    ///
    /// Returns `None` when nothing is buffered. Invalid UTF-8 is replaced
    /// rather than rejected.
    pub fn flush(&mut self) -> Option<SongPayload> {
        if self.buffer.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buffer);
        let text = String::from_utf8_lossy(&bytes);
        Some(SongPayload::parse(&text))
    }
}
