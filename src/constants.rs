// Packet indicators (first byte of every frame on the raw HCI socket)
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_ACLDATA_PKT: u8 = 0x02;
pub const HCI_SCODATA_PKT: u8 = 0x03;
pub const HCI_EVENT_PKT: u8 = 0x04;

/// Byte offset of the packet indicator.
pub const HCI_PACKET_TYPE_OFFSET: usize = 0;

/// Smallest number of bytes needed before any header shape can be inspected.
/// Equal to the Event header, which is also the fallback for unknown types.
pub const HCI_MIN_HEADER_SIZE: usize = 3;

/// Largest header of any packet type (ACL: indicator + handle + u16 length).
pub const HCI_MAX_HEADER_SIZE: usize = HCI_ACL_HEADER_SIZE;

// Command frame layout: indicator, opcode (u16 LE), parameter length (u8)
pub const HCI_COMMAND_OPCODE_OFFSET: usize = 1;
pub const HCI_COMMAND_PLEN_OFFSET: usize = 3;
pub const HCI_COMMAND_HEADER_SIZE: usize = 4;

// ACL frame layout: indicator, handle + flags (u16 LE), data length (u16 LE)
pub const HCI_ACL_HANDLE_OFFSET: usize = 1;
pub const HCI_ACL_DLEN_OFFSET: usize = 3;
pub const HCI_ACL_HEADER_SIZE: usize = 5;

// SCO frame layout: indicator, handle + flags (u16 LE), data length (u8)
pub const HCI_SCO_HANDLE_OFFSET: usize = 1;
pub const HCI_SCO_DLEN_OFFSET: usize = 3;
pub const HCI_SCO_HEADER_SIZE: usize = 4;

// Event frame layout: indicator, event code (u8), parameter length (u8)
pub const HCI_EVENT_CODE_OFFSET: usize = 1;
pub const HCI_EVENT_PLEN_OFFSET: usize = 2;
pub const HCI_EVENT_HEADER_SIZE: usize = 3;

/// Command parameter length is carried in a single byte.
pub const HCI_MAX_PARAMETER_LENGTH: usize = 255;

/// Largest command frame that can be put on the wire.
pub const HCI_MAX_COMMAND_SIZE: usize = HCI_COMMAND_HEADER_SIZE + HCI_MAX_PARAMETER_LENGTH;

// Opcode packing: 6-bit group field above a 10-bit command field
pub const HCI_OGF_MAX: u8 = 0x3F;
pub const HCI_OCF_MAX: u16 = 0x03FF;
pub const HCI_OCF_BITS: u32 = 10;

/// Default ceiling of the reassembly buffer.
///
/// Large enough for any Event frame (3 + 255 bytes) with room to spare for
/// the start of a frame sent back-to-back.
pub const DEFAULT_REASSEMBLY_CAPACITY: usize = 270;
