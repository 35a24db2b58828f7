pub mod channel;
pub mod command;
pub mod constants;
pub mod exchange;
pub mod frame;
pub mod hex;
pub mod utils;
