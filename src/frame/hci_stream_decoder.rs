use crate::constants::{DEFAULT_REASSEMBLY_CAPACITY, HCI_MAX_HEADER_SIZE};
use crate::frame::{DecodeStatus, FrameDecodeError, HciFrame, HciFrameCodec};
use crate::utils::now;
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Where the reassembler is in assembling the frame at the front of its
/// buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReassemblyState {
    /// Nothing buffered.
    Idle,

    /// Some bytes buffered, but not yet a full header.
    Accumulating,

    /// Header parsed; waiting until `expected_total` bytes are buffered.
    HeaderKnown { expected_total: usize },

    /// A complete frame of `frame_len` bytes sits at the front of the buffer.
    FrameReady { frame_len: usize },

    /// A header declared a frame that can never fit. Terminal.
    Aborted { declared_total: usize },
}

/// Turns an arbitrarily fragmented byte stream into whole HCI frames.
///
/// `HciStreamDecoder` owns the reassembly buffer. Bytes are appended at the
/// end; after a frame is emitted, whatever followed it is shifted to the
/// front and becomes the start of the next frame. The buffer never grows
/// past its capacity.
///
/// ### Behavior Summary:
/// - Fragmented frames are held until the declared length has arrived.
/// - Frames sent back-to-back in one chunk are all emitted, in order.
/// - A header that declares a frame larger than the capacity aborts the
///   decoder with `FrameTooLarge`. Nothing of that frame is emitted, and
///   every later call fails the same way.
pub struct HciStreamDecoder {
    buffer: Vec<u8>,
    capacity: usize,
    state: ReassemblyState,
}

pub struct HciFrameIterator {
    queue: VecDeque<Result<HciFrame, FrameDecodeError>>,
}

impl Iterator for HciFrameIterator {
    type Item = Result<HciFrame, FrameDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }
}

impl Default for HciStreamDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HciStreamDecoder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_REASSEMBLY_CAPACITY)
    }

    /// Creates a decoder whose buffer holds at most `capacity` bytes.
    ///
    /// The capacity is raised to the largest header size if smaller, so that
    /// any header can at least be inspected.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(HCI_MAX_HEADER_SIZE);

        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            state: ReassemblyState::Idle,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn bytes_held(&self) -> usize {
        self.buffer.len()
    }

    pub fn space_left(&self) -> usize {
        self.capacity - self.buffer.len()
    }

    pub fn state(&self) -> ReassemblyState {
        self.state
    }

    /// Total size of the frame being assembled, once its header is known.
    pub fn expected_total(&self) -> Option<usize> {
        match self.state {
            ReassemblyState::HeaderKnown { expected_total } => Some(expected_total),
            ReassemblyState::FrameReady { frame_len } => Some(frame_len),
            ReassemblyState::Aborted { declared_total } => Some(declared_total),
            ReassemblyState::Idle | ReassemblyState::Accumulating => None,
        }
    }

    /// Appends bytes to the end of the buffer.
    ///
    /// Fails with `BufferOverflow` if `data` is larger than `space_left()`;
    /// nothing is appended in that case. Fails with `FrameTooLarge`, and
    /// aborts, as soon as the buffered header declares a frame larger than
    /// the capacity. Frames are not extracted here, call `next_frame`
    /// afterwards.
    pub fn push_bytes(&mut self, data: &[u8]) -> Result<(), FrameDecodeError> {
        self.check_aborted()?;

        if data.len() > self.space_left() {
            return Err(FrameDecodeError::BufferOverflow {
                attempted: data.len(),
                space_left: self.space_left(),
            });
        }

        self.buffer.extend_from_slice(data);
        self.settle();

        self.check_aborted()
    }

    /// Lets `read` write directly into the free space at the end of the
    /// buffer, then keeps however many bytes it reports.
    ///
    /// `read` receives a slice exactly `space_left()` bytes long. A count
    /// larger than that slice is clamped. Oversized frames are detected the
    /// same way as in `push_bytes`.
    pub fn fill_with<F, E>(&mut self, read: F) -> Result<usize, E>
    where
        F: FnOnce(&mut [u8]) -> Result<usize, E>,
        E: From<FrameDecodeError>,
    {
        self.check_aborted()?;

        let held = self.buffer.len();
        self.buffer.resize(self.capacity, 0);

        let result = read(&mut self.buffer[held..]);
        let n = match &result {
            Ok(n) => (*n).min(self.capacity - held),
            Err(_) => 0,
        };

        self.buffer.truncate(held + n);
        self.settle();
        self.check_aborted()?;

        result.map(|_| n)
    }

    /// Removes and returns the frame at the front of the buffer, if complete.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(frame))` when a whole frame was buffered. Leftover bytes are
    ///   moved to the front; call again to drain frames sent back-to-back.
    /// - `Ok(None)` when more bytes are needed.
    /// - `Err(FrameTooLarge)` when the pending frame can never fit.
    pub fn next_frame(&mut self) -> Result<Option<HciFrame>, FrameDecodeError> {
        self.check_aborted()?;

        match HciFrameCodec::decode(&self.buffer) {
            DecodeStatus::NeedMoreBytes {
                missing,
                expected_total: Some(expected_total),
            } => {
                debug!(
                    bytes_held = self.buffer.len(),
                    expected_total, missing, "waiting for frame parameters"
                );

                Ok(None)
            }
            DecodeStatus::NeedMoreBytes {
                expected_total: None,
                ..
            } => {
                if !self.buffer.is_empty() {
                    debug!(bytes_held = self.buffer.len(), "waiting for frame header");
                }

                Ok(None)
            }
            DecodeStatus::Complete {
                mut frame,
                consumed,
            } => {
                self.buffer.drain(..consumed);
                frame.stamp(now());

                debug!(
                    packet_type = frame.packet_type().name(),
                    frame_len = consumed,
                    leftover = self.buffer.len(),
                    "frame reassembled"
                );

                // An oversized header among the leftovers aborts here; the
                // error surfaces on the next call.
                self.settle();

                Ok(Some(frame))
            }
        }
    }

    /// Feeds a chunk of received bytes and collects every frame it completes.
    ///
    /// Chunks larger than the free space are split: frames are drained
    /// between pieces to make room. Iteration stops at the first error.
    pub fn read_bytes(&mut self, mut data: &[u8]) -> HciFrameIterator {
        let mut queue = VecDeque::new();

        loop {
            let n = data.len().min(self.space_left());

            if let Err(e) = self.push_bytes(&data[..n]) {
                queue.push_back(Err(e));
                break;
            }

            data = &data[n..];

            let drained = loop {
                match self.next_frame() {
                    Ok(Some(frame)) => queue.push_back(Ok(frame)),
                    Ok(None) => break Ok(()),
                    Err(e) => break Err(e),
                }
            };

            if let Err(e) = drained {
                queue.push_back(Err(e));
                break;
            }

            // A full buffer always holds a whole frame (oversized ones abort
            // in `push_bytes`), so draining above freed room for the rest.
            if data.is_empty() {
                break;
            }
        }

        HciFrameIterator { queue }
    }

    fn check_aborted(&self) -> Result<(), FrameDecodeError> {
        match self.state {
            ReassemblyState::Aborted { declared_total } => Err(FrameDecodeError::FrameTooLarge {
                declared_total,
                capacity: self.capacity,
            }),
            _ => Ok(()),
        }
    }

    fn abort(&mut self, declared_total: usize) {
        warn!(
            declared_total,
            capacity = self.capacity,
            "not enough space to hold incoming HCI frame"
        );

        self.state = ReassemblyState::Aborted { declared_total };
        self.buffer.clear();
    }

    // Recomputes the state from the buffered bytes without emitting anything.
    // A header declaring more than the capacity aborts the decoder.
    fn settle(&mut self) {
        let Some(header) = HciFrameCodec::decode_header(&self.buffer) else {
            self.state = if self.buffer.is_empty() {
                ReassemblyState::Idle
            } else {
                ReassemblyState::Accumulating
            };

            return;
        };

        let frame_len = header.frame_len();

        if frame_len > self.capacity {
            self.abort(frame_len);
            return;
        }

        self.state = if self.buffer.len() >= frame_len {
            ReassemblyState::FrameReady { frame_len }
        } else {
            ReassemblyState::HeaderKnown {
                expected_total: frame_len,
            }
        };
    }
}
