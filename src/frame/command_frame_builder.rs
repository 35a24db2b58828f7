use crate::constants::{HCI_COMMAND_HEADER_SIZE, HCI_MAX_COMMAND_SIZE, HCI_MAX_PARAMETER_LENGTH};
use crate::frame::{CommandFrame, FrameEncodeError, Opcode};

/// Accumulates command parameters while enforcing the size limit on every
/// append.
///
/// `capacity` is the size of the whole wire frame, header included. The
/// parameter limit is whichever is smaller: what remains of `capacity` after
/// the header, or the 255 bytes the length field can express.
#[derive(Debug)]
pub struct CommandFrameBuilder {
    opcode: Opcode,
    parameters: Vec<u8>,
    limit: usize,
}

impl CommandFrameBuilder {
    pub fn new(opcode: Opcode) -> Self {
        Self::with_capacity(opcode, HCI_MAX_COMMAND_SIZE)
    }

    pub fn with_capacity(opcode: Opcode, capacity: usize) -> Self {
        let limit = capacity
            .saturating_sub(HCI_COMMAND_HEADER_SIZE)
            .min(HCI_MAX_PARAMETER_LENGTH);

        Self {
            opcode,
            parameters: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn parameter_len(&self) -> usize {
        self.parameters.len()
    }

    /// Parameter bytes that can still be appended.
    pub fn remaining_capacity(&self) -> usize {
        self.limit - self.parameters.len()
    }

    /// Appends one parameter's bytes, returning the new parameter length.
    ///
    /// The check happens before anything is copied, so a rejected append
    /// leaves the builder unchanged.
    pub fn push_parameter(&mut self, bytes: &[u8]) -> Result<usize, FrameEncodeError> {
        let attempted = self.parameters.len() + bytes.len();

        if attempted > self.limit {
            return Err(FrameEncodeError::ParameterTooLarge {
                attempted,
                limit: self.limit,
            });
        }

        self.parameters.extend_from_slice(bytes);

        Ok(self.parameters.len())
    }

    pub fn build(self) -> CommandFrame {
        CommandFrame::from_validated(self.opcode, self.parameters)
    }
}
