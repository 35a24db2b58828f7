use crate::constants::HCI_MAX_COMMAND_SIZE;
use crate::frame::{CommandFrame, CommandFrameBuilder, FrameEncodeError, Opcode};
use crate::hex::{HexDecodeError, decode_hex};
use std::fmt;

/// Which user-supplied argument a `CommandArgError` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandArg {
    Ogf,
    Ocf,
    /// Zero-based position among the parameter arguments.
    Parameter(usize),
}

impl fmt::Display for CommandArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandArg::Ogf => write!(f, "OGF"),
            CommandArg::Ocf => write!(f, "OCF"),
            CommandArg::Parameter(index) => write!(f, "parameter #{}", index + 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandArgError {
    #[error("{arg} {value:?}: {source}")]
    Hex {
        arg: CommandArg,
        value: String,
        source: HexDecodeError,
    },

    #[error("{arg} {value:?} must be {expected}")]
    Width {
        arg: CommandArg,
        value: String,
        expected: &'static str,
    },

    #[error("{arg} {value:?}: {source}")]
    Encode {
        arg: CommandArg,
        value: String,
        source: FrameEncodeError,
    },
}

impl CommandArgError {
    pub fn arg(&self) -> CommandArg {
        match self {
            CommandArgError::Hex { arg, .. }
            | CommandArgError::Width { arg, .. }
            | CommandArgError::Encode { arg, .. } => *arg,
        }
    }
}

/// Builds a `CommandFrame` from the textual OGF, OCF and parameters given on
/// the command line.
///
/// - `ogf` is one byte of hex (`00`-`3F`).
/// - `ocf` is two bytes of hex, most significant first (`0000`-`03FF`).
/// - Each parameter is an independent hex byte sequence; they are
///   concatenated in order.
///
/// Every check runs before anything touches the transport, and the error
/// names the argument that failed.
pub fn parse_command<S: AsRef<str>>(
    ogf: &str,
    ocf: &str,
    params: &[S],
) -> Result<CommandFrame, CommandArgError> {
    parse_command_with_capacity(ogf, ocf, params, HCI_MAX_COMMAND_SIZE)
}

/// Like `parse_command`, with an explicit limit on the encoded frame size.
pub fn parse_command_with_capacity<S: AsRef<str>>(
    ogf: &str,
    ocf: &str,
    params: &[S],
    capacity: usize,
) -> Result<CommandFrame, CommandArgError> {
    let opcode = Opcode::new(parse_ogf(ogf)?, parse_ocf(ocf)?).map_err(|source| {
        let (arg, value) = match source {
            FrameEncodeError::OpcodeGroupOutOfRange(_) => (CommandArg::Ogf, ogf),
            _ => (CommandArg::Ocf, ocf),
        };

        CommandArgError::Encode {
            arg,
            value: value.to_owned(),
            source,
        }
    })?;
    let mut builder = CommandFrameBuilder::with_capacity(opcode, capacity);

    for (index, param) in params.iter().enumerate() {
        let param = param.as_ref();
        let arg = CommandArg::Parameter(index);

        let bytes = decode_hex(param, builder.remaining_capacity()).map_err(|source| {
            CommandArgError::Hex {
                arg,
                value: param.to_owned(),
                source,
            }
        })?;

        builder
            .push_parameter(&bytes)
            .map_err(|source| CommandArgError::Encode {
                arg,
                value: param.to_owned(),
                source,
            })?;
    }

    Ok(builder.build())
}

fn parse_ogf(value: &str) -> Result<u8, CommandArgError> {
    let arg = CommandArg::Ogf;
    let bytes = decode_hex(value, 1).map_err(|source| CommandArgError::Hex {
        arg,
        value: value.to_owned(),
        source,
    })?;

    let [ogf] = bytes[..] else {
        return Err(CommandArgError::Width {
            arg,
            value: value.to_owned(),
            expected: "one byte of hex (00-3F)",
        });
    };

    Ok(ogf)
}

fn parse_ocf(value: &str) -> Result<u16, CommandArgError> {
    let arg = CommandArg::Ocf;
    let bytes = decode_hex(value, 2).map_err(|source| CommandArgError::Hex {
        arg,
        value: value.to_owned(),
        source,
    })?;

    let [hi, lo] = bytes[..] else {
        return Err(CommandArgError::Width {
            arg,
            value: value.to_owned(),
            expected: "two bytes of hex (0000-03FF)",
        });
    };

    Ok(u16::from_be_bytes([hi, lo]))
}
