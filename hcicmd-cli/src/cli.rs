use clap::Parser;
use hcicmd::constants::DEFAULT_REASSEMBLY_CAPACITY;

/// Send one raw HCI command and dump the frames the controller sends back.
///
/// Bytes are entered in hexadecimal form without spaces, most significant
/// byte first. The size of each parameter is determined by the number of
/// digits entered.
#[derive(Debug, Parser)]
#[command(name = "hcicmd", version)]
pub struct Cli {
    /// HCI device to bind, e.g. `hci0` or `0`
    #[arg(short = 'i', long = "device", default_value = "hci0", value_parser = parse_device)]
    pub device: u16,

    /// Number of frames to wait for before exiting
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Keep printing frames until the socket is closed (ignores --count)
    #[arg(short, long)]
    pub follow: bool,

    /// Size of the reassembly buffer in bytes
    #[arg(long, default_value_t = DEFAULT_REASSEMBLY_CAPACITY)]
    pub buffer_size: usize,

    /// OpCode Group Field (00-3F)
    pub ogf: String,

    /// OpCode Command Field (0000-03FF)
    pub ocf: String,

    /// Command parameters, each a sequence of hex bytes
    pub params: Vec<String>,
}

/// Accepts `hciN` or a bare device index.
pub fn parse_device(value: &str) -> Result<u16, String> {
    let index = value.strip_prefix("hci").unwrap_or(value);

    index
        .parse::<u16>()
        .map_err(|_| format!("{value:?} is not an HCI device (expected hciN or N)"))
}
