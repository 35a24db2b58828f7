use crate::channel::ChannelError;
use std::io::{self, Read, Write};
use tracing::trace;

/// Result of a successful `recv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecvOutcome {
    /// `n` bytes were read, `n > 0` unless the caller asked for zero.
    Received(usize),

    /// The read returned zero bytes: the peer closed or the handle was shut
    /// down.
    Closed,
}

/// Wraps a blocking byte handle (typically a raw HCI socket) with send and
/// receive primitives that tolerate short writes and transient errors.
///
/// The channel never opens or closes the handle; dropping it drops whatever
/// was passed in, and `into_inner` hands it back.
pub struct ReliableChannel<T> {
    inner: T,
}

impl<T> ReliableChannel<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write> ReliableChannel<T> {
    /// Writes all of `buf`, looping on short writes.
    ///
    /// `Interrupted` and `WouldBlock` are retried. Any other error, or a write
    /// that accepts zero bytes, fails the whole send.
    pub fn send_all(&mut self, buf: &[u8]) -> Result<(), ChannelError> {
        let mut remaining = buf;

        while !remaining.is_empty() {
            match self.inner.write(remaining) {
                Ok(0) => {
                    return Err(ChannelError::Send {
                        len: buf.len(),
                        source: io::Error::from(io::ErrorKind::WriteZero),
                    });
                }
                Ok(n) => {
                    remaining = &remaining[n..];
                    trace!(written = n, remaining = remaining.len(), "wrote command bytes");
                }
                Err(e) if is_transient(&e) => {
                    trace!(error = %e, "write retry");
                }
                Err(source) => {
                    return Err(ChannelError::Send {
                        len: buf.len(),
                        source,
                    });
                }
            }
        }

        Ok(())
    }
}

impl<T: Read> ReliableChannel<T> {
    /// Reads up to `buf.len()` bytes.
    ///
    /// Blocks until at least one byte arrives, the peer closes, or a
    /// non-transient error occurs. A zero-length read is reported as
    /// `RecvOutcome::Closed`, never as an error.
    pub fn recv(&mut self, buf: &mut [u8]) -> Result<RecvOutcome, ChannelError> {
        if buf.is_empty() {
            return Ok(RecvOutcome::Received(0));
        }

        loop {
            match self.inner.read(buf) {
                Ok(0) => return Ok(RecvOutcome::Closed),
                Ok(n) => return Ok(RecvOutcome::Received(n)),
                Err(e) if is_transient(&e) => {
                    trace!(error = %e, "read retry");
                }
                Err(source) => return Err(ChannelError::Receive { source }),
            }
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
    )
}
