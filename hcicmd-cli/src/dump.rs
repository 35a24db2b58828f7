use hcicmd::frame::{CommandFrame, HciFrame, HciFrameCodec, PacketType};
use hcicmd::hex::encode_upper;

const BYTES_PER_LINE: usize = 8;
const HEX_COLUMN_WIDTH: usize = BYTES_PER_LINE * 3;

/// Formats bytes as hex-dump lines: up to eight bytes per line as hex,
/// followed by the same bytes as printable ASCII (`.` otherwise).
pub fn dump_lines(bytes: &[u8]) -> Vec<String> {
    bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let mut hex = String::with_capacity(HEX_COLUMN_WIDTH);
            for b in chunk {
                hex.push_str(&encode_upper(std::slice::from_ref(b)));
                hex.push(' ');
            }

            let text: String = chunk
                .iter()
                .map(|&b| if (0x20..=0x7e).contains(&b) { b as char } else { '.' })
                .collect();

            format!("  {hex:<width$}{text}", width = HEX_COLUMN_WIDTH)
        })
        .collect()
}

pub fn describe_command(command: &CommandFrame) -> String {
    format!(
        "< {}(0x{:02x}), {}, parameter length {}",
        PacketType::Command.name(),
        u8::from(PacketType::Command),
        command.opcode(),
        command.parameters().len()
    )
}

pub fn describe_frame(frame: &HciFrame) -> String {
    let packet_type = frame.packet_type();

    format!(
        "> {}(0x{:02x}), parameter length {}",
        packet_type.name(),
        u8::from(packet_type),
        frame.header().declared_length()
    )
}

/// Dump of a command as sent, without the packet indicator.
pub fn command_dump(command: &CommandFrame) -> Vec<String> {
    dump_lines(&HciFrameCodec::encode(command)[1..])
}

/// Dump of a received frame, without the packet indicator.
pub fn frame_dump(frame: &HciFrame) -> Vec<String> {
    dump_lines(&HciFrameCodec::encode_frame(frame)[1..])
}
