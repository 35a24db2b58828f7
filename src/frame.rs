mod command_frame_builder;
mod frame_codec;
mod frame_error;
mod frame_struct;
mod hci_stream_decoder;
mod opcode;
mod packet_type;

pub use command_frame_builder::CommandFrameBuilder;
pub use frame_codec::{DecodeStatus, HciFrameCodec};
pub use frame_error::{FrameDecodeError, FrameEncodeError};
pub use frame_struct::{CommandFrame, FrameHeader, HciFrame};
pub use hci_stream_decoder::{HciFrameIterator, HciStreamDecoder, ReassemblyState};
pub use opcode::Opcode;
pub use packet_type::PacketType;
