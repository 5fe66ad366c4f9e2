//! Line server.
//!
//! Accepts TCP connections and gives each one its own isolated simulator.
//! Input is newline-framed. After every submitted line the server writes the
//! output lines followed by the prompt, or one JSON object per command when
//! JSON framing is selected.
//!
//! Reading never fails a session: bytes that are not UTF-8 are decoded
//! lossily and an over-long line is answered as an unrecognized command.

use crate::commands::Response;
use crate::config::{Config, WireFormat};
use crate::error::{Result, SimError};
use crate::simulator::Simulator;
use futures::{SinkExt, StreamExt};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder, Framed};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Longest accepted input line, in bytes.
const MAX_LINE_LENGTH: usize = 4096;

/// One frame read from a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Line(String),
    /// A line longer than the limit. Its bytes were discarded.
    Overlong,
}

/// Newline framing that never errors on content.
///
/// A trailing `\r` is dropped and invalid UTF-8 is replaced. A line longer
/// than `max_length` is discarded up to its newline and yields
/// [`Input::Overlong`].
#[derive(Debug)]
struct ConsoleCodec {
    max_length: usize,
    discarding: bool,
}

impl ConsoleCodec {
    fn new(max_length: usize) -> Self {
        Self {
            max_length,
            discarding: false,
        }
    }
}

impl Decoder for ConsoleCodec {
    type Item = Input;
    type Error = io::Error;

    fn decode(&mut self, src: &mut BytesMut) -> io::Result<Option<Input>> {
        let newline = src.iter().position(|b| *b == b'\n');

        match newline {
            Some(end) if self.discarding || end > self.max_length => {
                let _ = src.split_to(end + 1);
                self.discarding = false;
                Ok(Some(Input::Overlong))
            }
            Some(end) => {
                let frame = src.split_to(end + 1);
                let line = &frame[..end];
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                Ok(Some(Input::Line(String::from_utf8_lossy(line).into_owned())))
            }
            None if self.discarding || src.len() > self.max_length => {
                src.clear();
                self.discarding = true;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> io::Result<Option<Input>> {
        if let Some(input) = self.decode(src)? {
            return Ok(Some(input));
        }
        if self.discarding {
            self.discarding = false;
            return Ok(Some(Input::Overlong));
        }
        if src.is_empty() {
            return Ok(None);
        }
        // Unterminated last line.
        let frame = src.split();
        let line = frame.strip_suffix(b"\r").unwrap_or(&frame[..]);
        Ok(Some(Input::Line(String::from_utf8_lossy(line).into_owned())))
    }
}

impl Encoder<String> for ConsoleCodec {
    type Error = io::Error;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> io::Result<()> {
        dst.reserve(line.len() + 1);
        dst.extend_from_slice(line.as_bytes());
        dst.extend_from_slice(b"\n");
        Ok(())
    }
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn run(config: &Config) -> Result<()> {
    let listener = TcpListener::bind(&config.server.bind).await.map_err(|e| {
        SimError::server(format!("Failed to bind {}: {e}", config.server.bind))
    })?;

    let token = CancellationToken::new();
    let shutdown = token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
            return;
        }
        info!("Shutdown requested");
        shutdown.cancel();
    });

    serve(listener, Arc::new(config.clone()), token).await
}

/// Accepts connections on `listener` until `token` is cancelled.
pub async fn serve(
    listener: TcpListener,
    config: Arc<Config>,
    token: CancellationToken,
) -> Result<()> {
    let local = listener
        .local_addr()
        .map_err(|e| SimError::server(format!("Failed to read local address: {e}")))?;
    info!(addr = %local, format = ?config.server.format, "Line server listening");

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                info!("Line server stopped");
                return Ok(());
            }
            accepted = listener.accept() => {
                match accepted {
                    Ok((stream, peer)) => {
                        let config = Arc::clone(&config);
                        let token = token.child_token();
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(stream, peer, &config, token).await {
                                warn!(%peer, "Connection ended with error: {e}");
                            }
                        });
                    }
                    Err(e) => error!("Failed to accept connection: {e}"),
                }
            }
        }
    }
}

async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
    config: &Config,
    token: CancellationToken,
) -> Result<()> {
    info!(%peer, "Session opened");

    let format = config.server.format;
    let mut simulator = Simulator::from_config(config);
    let mut lines = Framed::new(stream, ConsoleCodec::new(MAX_LINE_LENGTH));

    send(&mut lines, format, &Response::silent(simulator.prompt())).await?;

    loop {
        let input = tokio::select! {
            _ = token.cancelled() => break,
            next = lines.next() => match next {
                Some(Ok(input)) => input,
                Some(Err(e)) => {
                    return Err(SimError::server(format!("Failed to read from {peer}: {e}")));
                }
                None => break,
            },
        };

        let response = match input {
            Input::Line(line) => {
                debug!(%peer, input = %line.trim(), "Line served");
                simulator.execute(&line)
            }
            Input::Overlong => {
                warn!(%peer, limit = MAX_LINE_LENGTH, "Discarded over-long line");
                simulator.reject()
            }
        };
        send(&mut lines, format, &response).await?;
    }

    info!(%peer, "Session closed");
    Ok(())
}

async fn send(
    lines: &mut Framed<TcpStream, ConsoleCodec>,
    format: WireFormat,
    response: &Response,
) -> Result<()> {
    let frames = match format {
        WireFormat::Text => {
            let mut frames = response.output.clone();
            frames.push(response.prompt.clone());
            frames
        }
        WireFormat::Json => vec![response
            .to_json_line()
            .map_err(|e| SimError::internal(format!("Failed to encode response: {e}")))?],
    };

    for frame in frames {
        lines
            .send(frame)
            .await
            .map_err(|e| SimError::server(format!("Failed to write response: {e}")))?;
    }
    Ok(())
}
