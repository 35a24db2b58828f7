use crate::channel::{ChannelError, RecvOutcome, ReliableChannel};
use crate::frame::{CommandFrame, FrameDecodeError, HciFrame, HciFrameCodec, HciStreamDecoder};
use std::io::{Read, Write};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// The peer closed (or the handle was shut down) before the pending frame
    /// was complete. `buffered` bytes of it had arrived.
    #[error("channel closed with {buffered} byte(s) of an incomplete frame buffered")]
    ChannelClosed {
        buffered: usize,
        expected_total: Option<usize>,
    },

    #[error(transparent)]
    Decode(#[from] FrameDecodeError),
}

/// One request-then-response cycle over a byte handle.
///
/// `HciExchange` owns the handle for the duration of the exchange, writes a
/// single command, and then hands out the frames that follow one at a time.
/// It is strictly sequential: each call blocks until a frame is complete,
/// the peer closes, or the transport fails.
pub struct HciExchange<T> {
    channel: ReliableChannel<T>,
    decoder: HciStreamDecoder,
}

impl<T: Read + Write> HciExchange<T> {
    pub fn new(io: T) -> Self {
        Self::with_decoder(io, HciStreamDecoder::new())
    }

    /// Creates an exchange whose reassembly buffer is limited to `capacity`
    /// bytes.
    pub fn with_capacity(io: T, capacity: usize) -> Self {
        Self::with_decoder(io, HciStreamDecoder::with_capacity(capacity))
    }

    fn with_decoder(io: T, decoder: HciStreamDecoder) -> Self {
        Self {
            channel: ReliableChannel::new(io),
            decoder,
        }
    }

    /// Encodes and writes `command`, returning the number of bytes sent.
    pub fn send_command(&mut self, command: &CommandFrame) -> Result<usize, ExchangeError> {
        let bytes = HciFrameCodec::encode(command);

        info!(
            opcode = %command.opcode(),
            parameter_length = command.parameters().len(),
            "sending HCI command"
        );

        self.channel.send_all(&bytes)?;

        Ok(bytes.len())
    }

    /// Blocks until the next complete frame is available.
    ///
    /// Frames already sitting in the buffer (sent back-to-back with the
    /// previous one) are returned without touching the transport.
    pub fn recv_frame(&mut self) -> Result<HciFrame, ExchangeError> {
        loop {
            if let Some(frame) = self.decoder.next_frame()? {
                return Ok(frame);
            }

            // `next_frame` returning `None` means the buffer still has room.
            let channel = &mut self.channel;
            let read = self.decoder.fill_with(|spare| {
                match channel.recv(spare)? {
                    RecvOutcome::Received(n) => Ok::<_, ExchangeError>(n),
                    RecvOutcome::Closed => Ok(0),
                }
            })?;

            if read == 0 {
                let buffered = self.decoder.bytes_held();
                let expected_total = self.decoder.expected_total();

                debug!(buffered, ?expected_total, "channel closed");

                return Err(ExchangeError::ChannelClosed {
                    buffered,
                    expected_total,
                });
            }

            debug!(
                read,
                bytes_held = self.decoder.bytes_held(),
                "bytes read"
            );
        }
    }

    pub fn decoder(&self) -> &HciStreamDecoder {
        &self.decoder
    }

    pub fn get_ref(&self) -> &T {
        self.channel.get_ref()
    }

    /// Gives the handle back. Any buffered, incomplete frame is discarded.
    pub fn into_inner(self) -> T {
        self.channel.into_inner()
    }
}
