use crate::constants::HCI_MAX_PARAMETER_LENGTH;
use crate::frame::{FrameEncodeError, Opcode, PacketType};

/// An outbound HCI command.
///
/// The parameter length always fits the one-byte length field; construction
/// goes through `CommandFrame::new` or `CommandFrameBuilder`, both of which
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    opcode: Opcode,
    parameters: Vec<u8>,
}

impl CommandFrame {
    pub fn new(opcode: Opcode, parameters: Vec<u8>) -> Result<Self, FrameEncodeError> {
        if parameters.len() > HCI_MAX_PARAMETER_LENGTH {
            return Err(FrameEncodeError::ParameterTooLarge {
                attempted: parameters.len(),
                limit: HCI_MAX_PARAMETER_LENGTH,
            });
        }

        Ok(Self { opcode, parameters })
    }

    pub(crate) fn from_validated(opcode: Opcode, parameters: Vec<u8>) -> Self {
        debug_assert!(parameters.len() <= HCI_MAX_PARAMETER_LENGTH);
        Self { opcode, parameters }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn parameters(&self) -> &[u8] {
        &self.parameters
    }

    pub fn parameter_length(&self) -> u8 {
        self.parameters.len() as u8
    }
}

/// The decoded header of one inbound frame.
///
/// Each variant carries the fields of its wire header. `Unknown` holds the
/// raw indicator and reads the two following bytes as an Event header would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameHeader {
    Command {
        opcode: Opcode,
        parameter_length: u8,
    },
    AclData {
        handle: u16,
        data_length: u16,
    },
    ScoData {
        handle: u16,
        data_length: u8,
    },
    Event {
        event_code: u8,
        parameter_length: u8,
    },
    Unknown {
        indicator: u8,
        code: u8,
        parameter_length: u8,
    },
}

impl FrameHeader {
    pub fn packet_type(&self) -> PacketType {
        match self {
            FrameHeader::Command { .. } => PacketType::Command,
            FrameHeader::AclData { .. } => PacketType::AclData,
            FrameHeader::ScoData { .. } => PacketType::ScoData,
            FrameHeader::Event { .. } => PacketType::Event,
            FrameHeader::Unknown { indicator, .. } => PacketType::Unknown(*indicator),
        }
    }

    pub fn header_len(&self) -> usize {
        self.packet_type().header_len()
    }

    /// Number of parameter (or payload) bytes the header says will follow.
    pub fn declared_length(&self) -> usize {
        match *self {
            FrameHeader::Command {
                parameter_length, ..
            } => parameter_length as usize,
            FrameHeader::AclData { data_length, .. } => data_length as usize,
            FrameHeader::ScoData { data_length, .. } => data_length as usize,
            FrameHeader::Event {
                parameter_length, ..
            } => parameter_length as usize,
            FrameHeader::Unknown {
                parameter_length, ..
            } => parameter_length as usize,
        }
    }

    /// Total wire size of the frame this header starts.
    pub fn frame_len(&self) -> usize {
        self.header_len() + self.declared_length()
    }

    pub fn event_code(&self) -> Option<u8> {
        match *self {
            FrameHeader::Event { event_code, .. } => Some(event_code),
            _ => None,
        }
    }
}

/// A complete inbound frame, handed out by the reassembler as one unit.
///
/// Only the codec builds these, so the parameters are always exactly
/// `header.declared_length()` long.
#[derive(Debug, Clone)]
pub struct HciFrame {
    header: FrameHeader,
    parameters: Vec<u8>,
    received_at_micros: u64,
}

impl HciFrame {
    /// `parameters.len()` must equal `header.declared_length()`.
    pub(crate) fn from_validated(header: FrameHeader, parameters: Vec<u8>) -> Self {
        debug_assert_eq!(parameters.len(), header.declared_length());

        Self {
            header,
            parameters,
            received_at_micros: 0,
        }
    }

    pub(crate) fn stamp(&mut self, micros: u64) {
        self.received_at_micros = micros;
    }

    pub fn header(&self) -> FrameHeader {
        self.header
    }

    pub fn parameters(&self) -> &[u8] {
        &self.parameters
    }

    /// When the reassembler emitted the frame, in microseconds since the
    /// UNIX epoch. Zero for frames decoded directly through the codec.
    pub fn received_at_micros(&self) -> u64 {
        self.received_at_micros
    }

    pub fn packet_type(&self) -> PacketType {
        self.header.packet_type()
    }

    pub fn event_code(&self) -> Option<u8> {
        self.header.event_code()
    }

    /// Number of bytes this frame occupied on the wire.
    pub fn frame_len(&self) -> usize {
        self.header.frame_len()
    }
}
