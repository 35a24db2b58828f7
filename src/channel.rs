mod channel_error;
mod reliable_channel;

pub use channel_error::ChannelError;
pub use reliable_channel::{RecvOutcome, ReliableChannel};
