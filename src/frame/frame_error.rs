#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameEncodeError {
    /// Appending parameters would exceed the one-byte length field or the
    /// builder's buffer capacity. Nothing from the rejected append is kept.
    #[error("parameters would be {attempted} bytes, limit is {limit}")]
    ParameterTooLarge { attempted: usize, limit: usize },

    #[error("opcode group field 0x{0:02x} is out of range (00-3F)")]
    OpcodeGroupOutOfRange(u8),

    #[error("opcode command field 0x{0:04x} is out of range (0000-03FF)")]
    OpcodeCommandOutOfRange(u16),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameDecodeError {
    /// A frame header declared more bytes than the reassembly buffer can
    /// ever hold. There is no way to resynchronize the stream after this.
    #[error("frame of {declared_total} bytes does not fit the {capacity} byte reassembly buffer")]
    FrameTooLarge {
        declared_total: usize,
        capacity: usize,
    },

    /// More bytes were pushed than the buffer has free space for.
    #[error("cannot append {attempted} bytes, only {space_left} free")]
    BufferOverflow { attempted: usize, space_left: usize },
}
