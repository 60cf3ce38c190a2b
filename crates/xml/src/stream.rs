//! Probes over a request input stream that never consume it.

use std::io::{self, BufRead, ErrorKind};

/// Returns `true` when the stream is at its end.
///
/// The check peeks through [`BufRead::fill_buf`], whatever it buffers stays in the stream
/// for the next reader.
pub fn is_empty(stream: &mut dyn BufRead) -> io::Result<bool> {
    loop {
        match stream.fill_buf() {
            Ok(buf) => return Ok(buf.is_empty()),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}
