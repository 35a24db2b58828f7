mod cli;
mod dump;
mod hci_socket;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use hcicmd::command::parse_command;
use hcicmd::exchange::{ExchangeError, HciExchange};
use hci_socket::HciSocket;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the frame dumps
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let command = parse_command(&cli.ogf, &cli.ocf, cli.params.as_slice())
        .context("invalid command arguments")?;

    let socket = HciSocket::open(cli.device)
        .with_context(|| format!("can't attach to device hci{}", cli.device))?;

    debug!(device = cli.device, buffer_size = cli.buffer_size, "attached to HCI device");

    let mut exchange = HciExchange::with_capacity(socket, cli.buffer_size);
    let mut out = io::stdout().lock();

    writeln!(out, "{}", dump::describe_command(&command))?;
    for line in dump::command_dump(&command) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    exchange
        .send_command(&command)
        .context("failed to send HCI command")?;

    let mut received = 0u32;

    loop {
        let frame = match exchange.recv_frame() {
            Ok(frame) => frame,
            Err(ExchangeError::ChannelClosed { buffered: 0, .. }) if cli.follow => break,
            Err(e) => return Err(e).context("HCI exchange aborted"),
        };

        writeln!(out, "{}", dump::describe_frame(&frame))?;
        for line in dump::frame_dump(&frame) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        received += 1;

        if !cli.follow && received >= cli.count {
            break;
        }
    }

    Ok(())
}
