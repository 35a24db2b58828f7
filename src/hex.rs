mod hex_codec;
mod hex_error;

pub use hex_codec::{decode_hex, encode_upper};
pub use hex_error::HexDecodeError;
