use crate::constants::{HCI_OCF_BITS, HCI_OCF_MAX, HCI_OGF_MAX};
use crate::frame::FrameEncodeError;
use std::fmt;

/// A 16-bit HCI command opcode.
///
/// The upper 6 bits hold the Opcode Group Field (OGF) and the lower 10 bits
/// the Opcode Command Field (OCF).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode(u16);

impl Opcode {
    /// Packs a group and command field, rejecting values that do not fit
    /// their bit widths.
    pub fn new(ogf: u8, ocf: u16) -> Result<Self, FrameEncodeError> {
        if ogf > HCI_OGF_MAX {
            return Err(FrameEncodeError::OpcodeGroupOutOfRange(ogf));
        }

        if ocf > HCI_OCF_MAX {
            return Err(FrameEncodeError::OpcodeCommandOutOfRange(ocf));
        }

        Ok(Self(((ogf as u16) << HCI_OCF_BITS) | ocf))
    }

    /// Wraps an opcode exactly as it appears on the wire.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn ogf(self) -> u8 {
        (self.0 >> HCI_OCF_BITS) as u8
    }

    pub const fn ocf(self) -> u16 {
        self.0 & HCI_OCF_MAX
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OGF 0x{:02x}, OCF 0x{:04x}", self.ogf(), self.ocf())
    }
}
