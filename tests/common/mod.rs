#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// One scripted response to a `read` call.
pub enum ReadStep {
    Data(Vec<u8>),
    Error(io::ErrorKind),
}

/// One scripted response to a `write` call.
pub enum WriteStep {
    /// Accept at most this many bytes.
    Accept(usize),
    Error(io::ErrorKind),
}

/// An in-memory stand-in for an HCI socket.
///
/// Reads replay `reads` in order and return `Ok(0)` once the script runs
/// out. Writes follow `writes`, accepting everything once it is exhausted.
#[derive(Default)]
pub struct ScriptedIo {
    pub reads: VecDeque<ReadStep>,
    pub writes: VecDeque<WriteStep>,
    pub written: Vec<u8>,
    pub read_calls: usize,
    pub write_calls: usize,
}

impl ScriptedIo {
    pub fn with_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self {
            reads: chunks.into_iter().map(ReadStep::Data).collect(),
            ..Self::default()
        }
    }
}

impl Read for ScriptedIo {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;

        match self.reads.pop_front() {
            None => Ok(0),
            Some(ReadStep::Error(kind)) => Err(io::Error::from(kind)),
            Some(ReadStep::Data(mut data)) => {
                let n = data.len().min(buf.len());
                buf[..n].copy_from_slice(&data[..n]);

                if n < data.len() {
                    // Put back what didn't fit, like a stream socket would.
                    self.reads.push_front(ReadStep::Data(data.split_off(n)));
                }

                Ok(n)
            }
        }
    }
}

impl Write for ScriptedIo {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_calls += 1;

        let n = match self.writes.pop_front() {
            None => buf.len(),
            Some(WriteStep::Accept(max)) => max.min(buf.len()),
            Some(WriteStep::Error(kind)) => return Err(io::Error::from(kind)),
        };

        self.written.extend_from_slice(&buf[..n]);

        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Wire bytes of an Event frame.
pub fn event_bytes(event_code: u8, parameters: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0x04, event_code, parameters.len() as u8];
    bytes.extend_from_slice(parameters);
    bytes
}

/// A Command Complete event for `opcode` with the given return parameters.
pub fn command_complete(opcode: u16, return_params: &[u8]) -> Vec<u8> {
    let mut parameters = vec![0x01];
    parameters.extend_from_slice(&opcode.to_le_bytes());
    parameters.extend_from_slice(return_params);
    event_bytes(0x0E, &parameters)
}
