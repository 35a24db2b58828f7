use crate::constants::{
    HCI_ACL_HEADER_SIZE, HCI_ACLDATA_PKT, HCI_COMMAND_HEADER_SIZE, HCI_COMMAND_PKT,
    HCI_EVENT_HEADER_SIZE, HCI_EVENT_PKT, HCI_SCO_HEADER_SIZE, HCI_SCODATA_PKT,
};

/// The packet indicator that prefixes every frame on a raw HCI socket.
///
/// Unrecognized indicators are kept as `Unknown` instead of being rejected;
/// they are framed with the Event header shape so the stream can still make
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketType {
    Command,
    AclData,
    ScoData,
    Event,
    Unknown(u8),
}

impl PacketType {
    /// Number of bytes, indicator included, before the parameters begin.
    pub const fn header_len(self) -> usize {
        match self {
            PacketType::Command => HCI_COMMAND_HEADER_SIZE,
            PacketType::AclData => HCI_ACL_HEADER_SIZE,
            PacketType::ScoData => HCI_SCO_HEADER_SIZE,
            PacketType::Event | PacketType::Unknown(_) => HCI_EVENT_HEADER_SIZE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PacketType::Command => "Command",
            PacketType::AclData => "ACL Data",
            PacketType::ScoData => "SCO Data",
            PacketType::Event => "Event",
            PacketType::Unknown(_) => "Unknown",
        }
    }
}

impl From<u8> for PacketType {
    fn from(value: u8) -> Self {
        match value {
            HCI_COMMAND_PKT => PacketType::Command,
            HCI_ACLDATA_PKT => PacketType::AclData,
            HCI_SCODATA_PKT => PacketType::ScoData,
            HCI_EVENT_PKT => PacketType::Event,
            other => PacketType::Unknown(other),
        }
    }
}

impl From<PacketType> for u8 {
    fn from(value: PacketType) -> Self {
        match value {
            PacketType::Command => HCI_COMMAND_PKT,
            PacketType::AclData => HCI_ACLDATA_PKT,
            PacketType::ScoData => HCI_SCODATA_PKT,
            PacketType::Event => HCI_EVENT_PKT,
            PacketType::Unknown(other) => other,
        }
    }
}
