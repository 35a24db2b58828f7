use crate::{
    constants::{
        HCI_ACL_DLEN_OFFSET, HCI_ACL_HANDLE_OFFSET, HCI_COMMAND_HEADER_SIZE,
        HCI_COMMAND_OPCODE_OFFSET, HCI_COMMAND_PKT, HCI_COMMAND_PLEN_OFFSET,
        HCI_EVENT_CODE_OFFSET, HCI_EVENT_PLEN_OFFSET, HCI_MIN_HEADER_SIZE,
        HCI_PACKET_TYPE_OFFSET, HCI_SCO_DLEN_OFFSET, HCI_SCO_HANDLE_OFFSET,
    },
    frame::{CommandFrame, FrameHeader, HciFrame, Opcode, PacketType},
};

/// Outcome of attempting to decode one frame from the bytes gathered so far.
#[derive(Debug)]
pub enum DecodeStatus {
    /// The frame is not complete yet.
    ///
    /// `missing` is how many more bytes are needed before anything new can
    /// be learned: the rest of the header while it is still partial, the
    /// rest of the parameters once it is known. `expected_total` is set only
    /// after the full header has arrived. Both are hints and must be
    /// recomputed whenever more bytes arrive.
    NeedMoreBytes {
        missing: usize,
        expected_total: Option<usize>,
    },

    /// A whole frame was decoded from the start of the buffer.
    ///
    /// `consumed` is the exact number of bytes it occupied; anything after
    /// that belongs to the next frame.
    Complete { frame: HciFrame, consumed: usize },
}

/// Provides encoding and decoding functionality for HCI frames.
///
/// The codec holds no state. Encoding turns a validated `CommandFrame` into
/// its wire bytes; decoding inspects a borrowed slice and reports either a
/// complete frame or how far it still is from one.
pub struct HciFrameCodec;

impl HciFrameCodec {
    /// Encodes a `CommandFrame` into its wire representation.
    ///
    /// Layout: packet indicator (`0x01`), opcode as little-endian `u16`,
    /// one-byte parameter length, then the parameters.
    pub fn encode(frame: &CommandFrame) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HCI_COMMAND_HEADER_SIZE + frame.parameters().len());

        buf.push(HCI_COMMAND_PKT);
        buf.extend(&frame.opcode().raw().to_le_bytes());
        buf.push(frame.parameter_length());
        buf.extend(frame.parameters());

        buf
    }

    /// Re-encodes a decoded frame into the exact bytes it occupied on the
    /// wire, packet indicator included.
    pub fn encode_frame(frame: &HciFrame) -> Vec<u8> {
        let mut buf = Vec::with_capacity(frame.frame_len());

        buf.push(frame.packet_type().into());

        match frame.header() {
            FrameHeader::Command {
                opcode,
                parameter_length,
            } => {
                buf.extend(&opcode.raw().to_le_bytes());
                buf.push(parameter_length);
            }
            FrameHeader::AclData {
                handle,
                data_length,
            } => {
                buf.extend(&handle.to_le_bytes());
                buf.extend(&data_length.to_le_bytes());
            }
            FrameHeader::ScoData {
                handle,
                data_length,
            } => {
                buf.extend(&handle.to_le_bytes());
                buf.push(data_length);
            }
            FrameHeader::Event {
                event_code: code,
                parameter_length,
            }
            | FrameHeader::Unknown {
                code,
                parameter_length,
                ..
            } => {
                buf.push(code);
                buf.push(parameter_length);
            }
        }

        buf.extend(frame.parameters());

        buf
    }

    /// Parses the header at the start of `buf`, if all of it is present.
    ///
    /// Returns `None` while fewer than `header_len()` bytes of the detected
    /// packet type are available.
    pub fn decode_header(buf: &[u8]) -> Option<FrameHeader> {
        if buf.len() < HCI_MIN_HEADER_SIZE {
            return None;
        }

        let packet_type = PacketType::from(buf[HCI_PACKET_TYPE_OFFSET]);

        if buf.len() < packet_type.header_len() {
            return None;
        }

        let header = match packet_type {
            PacketType::Command => FrameHeader::Command {
                opcode: Opcode::from_raw(read_u16_le(buf, HCI_COMMAND_OPCODE_OFFSET)),
                parameter_length: buf[HCI_COMMAND_PLEN_OFFSET],
            },
            PacketType::AclData => FrameHeader::AclData {
                handle: read_u16_le(buf, HCI_ACL_HANDLE_OFFSET),
                data_length: read_u16_le(buf, HCI_ACL_DLEN_OFFSET),
            },
            PacketType::ScoData => FrameHeader::ScoData {
                handle: read_u16_le(buf, HCI_SCO_HANDLE_OFFSET),
                data_length: buf[HCI_SCO_DLEN_OFFSET],
            },
            PacketType::Event => FrameHeader::Event {
                event_code: buf[HCI_EVENT_CODE_OFFSET],
                parameter_length: buf[HCI_EVENT_PLEN_OFFSET],
            },
            PacketType::Unknown(indicator) => FrameHeader::Unknown {
                indicator,
                code: buf[HCI_EVENT_CODE_OFFSET],
                parameter_length: buf[HCI_EVENT_PLEN_OFFSET],
            },
        };

        Some(header)
    }

    /// Attempts to decode one frame from the start of `buf`.
    ///
    /// # Arguments
    ///
    /// * `buf` - Every byte received so far for the current frame, possibly
    ///   followed by bytes of later frames.
    ///
    /// # Returns
    ///
    /// - `DecodeStatus::NeedMoreBytes` while the header or parameters are
    ///   incomplete.
    /// - `DecodeStatus::Complete` once `header_len + declared length` bytes
    ///   are present. Trailing bytes are left untouched.
    pub fn decode(buf: &[u8]) -> DecodeStatus {
        let Some(header) = Self::decode_header(buf) else {
            let wanted = match buf.first() {
                Some(&indicator) => PacketType::from(indicator)
                    .header_len()
                    .max(HCI_MIN_HEADER_SIZE),
                None => HCI_MIN_HEADER_SIZE,
            };

            return DecodeStatus::NeedMoreBytes {
                missing: wanted - buf.len(),
                expected_total: None,
            };
        };

        let total = header.frame_len();

        if buf.len() < total {
            return DecodeStatus::NeedMoreBytes {
                missing: total - buf.len(),
                expected_total: Some(total),
            };
        }

        let frame = HciFrame::from_validated(header, buf[header.header_len()..total].to_vec());

        DecodeStatus::Complete {
            frame,
            consumed: total,
        }
    }
}

fn read_u16_le(buf: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([buf[offset], buf[offset + 1]])
}
