mod common;

use common::{ReadStep, ScriptedIo, WriteStep};
use hcicmd::channel::{ChannelError, RecvOutcome, ReliableChannel};
use std::error::Error;
use std::io::ErrorKind;

#[test]
fn send_loops_over_short_writes() {
    let mut io = ScriptedIo::default();
    io.writes.extend([WriteStep::Accept(1), WriteStep::Accept(2), WriteStep::Accept(1)]);

    let mut channel = ReliableChannel::new(io);
    channel.send_all(&[0x01, 0x03, 0x0C, 0x00, 0xFF]).expect("send");

    let io = channel.into_inner();
    assert_eq!(io.written, vec![0x01, 0x03, 0x0C, 0x00, 0xFF]);
    assert_eq!(io.write_calls, 4);
}

#[test]
fn send_retries_transient_errors() {
    let mut io = ScriptedIo::default();
    io.writes.extend([
        WriteStep::Error(ErrorKind::Interrupted),
        WriteStep::Accept(2),
        WriteStep::Error(ErrorKind::WouldBlock),
    ]);

    let mut channel = ReliableChannel::new(io);
    channel.send_all(&[1, 2, 3, 4]).expect("send");

    assert_eq!(channel.get_ref().written, vec![1, 2, 3, 4]);
}

#[test]
fn send_fails_on_other_errors() {
    let mut io = ScriptedIo::default();
    io.writes.extend([WriteStep::Accept(2), WriteStep::Error(ErrorKind::BrokenPipe)]);

    let mut channel = ReliableChannel::new(io);
    let err = channel.send_all(&[1, 2, 3, 4]).expect_err("must fail");

    let ChannelError::Send { len, ref source } = err else {
        panic!("expected a send error, got {err:?}");
    };
    assert_eq!(len, 4);
    assert_eq!(source.kind(), ErrorKind::BrokenPipe);
    assert!(err.to_string().contains("unknown"));
    assert!(err.source().is_some());
}

#[test]
fn send_treats_zero_length_write_as_fatal() {
    let mut io = ScriptedIo::default();
    io.writes.push_back(WriteStep::Accept(0));

    let mut channel = ReliableChannel::new(io);

    assert!(matches!(
        channel.send_all(&[1, 2]),
        Err(ChannelError::Send { ref source, .. }) if source.kind() == ErrorKind::WriteZero
    ));
}

#[test]
fn recv_returns_partial_reads() {
    let io = ScriptedIo::with_chunks([vec![0x04, 0x0E]]);
    let mut channel = ReliableChannel::new(io);
    let mut buf = [0u8; 16];

    assert_eq!(channel.recv(&mut buf).ok(), Some(RecvOutcome::Received(2)));
    assert_eq!(&buf[..2], &[0x04, 0x0E]);
}

#[test]
fn recv_retries_transient_errors() {
    let mut io = ScriptedIo::default();
    io.reads.extend([
        ReadStep::Error(ErrorKind::Interrupted),
        ReadStep::Error(ErrorKind::WouldBlock),
        ReadStep::Data(vec![0xAB]),
    ]);

    let mut channel = ReliableChannel::new(io);
    let mut buf = [0u8; 4];

    assert_eq!(channel.recv(&mut buf).ok(), Some(RecvOutcome::Received(1)));
    assert_eq!(channel.get_ref().read_calls, 3);
}

#[test]
fn recv_distinguishes_close_from_error() {
    let mut channel = ReliableChannel::new(ScriptedIo::default());
    let mut buf = [0u8; 4];
    assert_eq!(channel.recv(&mut buf).ok(), Some(RecvOutcome::Closed));

    let mut io = ScriptedIo::default();
    io.reads.push_back(ReadStep::Error(ErrorKind::ConnectionReset));
    let mut channel = ReliableChannel::new(io);

    assert!(matches!(
        channel.recv(&mut buf),
        Err(ChannelError::Receive { ref source }) if source.kind() == ErrorKind::ConnectionReset
    ));
}

#[test]
fn recv_respects_requested_count() {
    let io = ScriptedIo::with_chunks([vec![1, 2, 3, 4, 5, 6]]);
    let mut channel = ReliableChannel::new(io);
    let mut buf = [0u8; 4];

    assert_eq!(channel.recv(&mut buf).ok(), Some(RecvOutcome::Received(4)));
    assert_eq!(channel.recv(&mut buf).ok(), Some(RecvOutcome::Received(2)));
    assert_eq!(&buf[..2], &[5, 6]);
}
