#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexDecodeError {
    /// A character outside `[0-9A-Fa-f]` was found after the optional prefix.
    ///
    /// `position` is the byte offset into the original input, prefix included.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidHexDigit { digit: char, position: usize },

    /// The decoded bytes would not fit in the space the caller allowed.
    #[error("{required} byte(s) needed but only {capacity} available")]
    BufferTooSmall { required: usize, capacity: usize },
}
