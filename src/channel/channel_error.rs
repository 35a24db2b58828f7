use std::io;

/// Non-recoverable transport failures.
///
/// Transient conditions (`Interrupted`, `WouldBlock`) are retried inside the
/// channel and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Writing the command failed part-way.
    ///
    /// How many of the `len` bytes reached the peer is unknown; it may be
    /// none, some, or all of them.
    #[error("write of {len} byte(s) failed; bytes delivered to the peer are unknown")]
    Send {
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("read failed")]
    Receive {
        #[source]
        source: io::Error,
    },
}
