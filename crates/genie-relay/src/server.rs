//! TCP transport: one JSON frame per line.

use std::future::Future;
use std::net::SocketAddr;

use genie_config::RelayConfig;
use genie_core::ids::{PREFIX_SESSION, generate_id};
use genie_core::protocol::{ClientFrame, ErrorFrame, ServerFrame};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::RelayError;
use crate::hub::RelayHub;

pub struct RelayServer {
    listener: TcpListener,
    hub: RelayHub,
    max_frame_bytes: usize,
}

impl RelayServer {
    /// Bind the listener and spawn the hub.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Io`] if the address cannot be bound.
    pub async fn bind(config: &RelayConfig) -> Result<Self, RelayError> {
        let listener = TcpListener::bind(config.bind_addr()).await?;
        Ok(Self {
            listener,
            hub: RelayHub::spawn(),
            max_frame_bytes: config.max_frame_bytes,
        })
    }

    /// # Errors
    ///
    /// Returns [`RelayError::Io`] if the socket has no local address.
    pub fn local_addr(&self) -> Result<SocketAddr, RelayError> {
        Ok(self.listener.local_addr()?)
    }

    #[must_use]
    pub fn hub(&self) -> RelayHub {
        self.hub.clone()
    }

    /// Accept connections until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Io`] if accepting fails.
    pub async fn run(self, shutdown: impl Future<Output = ()>) -> Result<(), RelayError> {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "relay listening");
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    tracing::info!("relay shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => {
                    let (stream, peer) = accepted?;
                    let hub = self.hub.clone();
                    let limit = self.max_frame_bytes;
                    tokio::spawn(async move {
                        if let Err(error) = serve_connection(stream, hub, limit).await {
                            tracing::debug!(%peer, %error, "connection ended with error");
                        }
                    });
                }
            }
        }
    }
}

async fn serve_connection(
    stream: TcpStream,
    hub: RelayHub,
    max_frame_bytes: usize,
) -> Result<(), RelayError> {
    let session_id = generate_id(PREFIX_SESSION);
    let (read_half, write_half) = stream.into_split();
    let (outbound, outbound_rx) = mpsc::unbounded_channel();
    let writer = tokio::spawn(write_frames(write_half, outbound_rx));

    hub.connect_with(&session_id, outbound.clone())?;
    let result = read_frames(read_half, &session_id, &hub, &outbound, max_frame_bytes).await;
    // The hub may already be gone during shutdown.
    let _ = hub.disconnect(&session_id);

    drop(outbound);
    let _ = writer.await;
    result
}

async fn read_frames(
    read_half: impl AsyncRead + Unpin,
    session_id: &str,
    hub: &RelayHub,
    outbound: &UnboundedSender<ServerFrame>,
    max_frame_bytes: usize,
) -> Result<(), RelayError> {
    let mut reader = BufReader::new(read_half);
    let mut line = Vec::new();
    loop {
        let Some(bytes) = read_line(&mut reader, &mut line, max_frame_bytes).await? else {
            return Ok(());
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<ClientFrame>(bytes) {
            Ok(frame) => hub.submit(session_id, frame)?,
            Err(error) => {
                tracing::debug!(session = %session_id, %error, "malformed frame");
                let _ = outbound.send(ServerFrame::Error(ErrorFrame {
                    message: format!("malformed frame: {error}"),
                }));
            }
        }
    }
}

/// Read one newline-terminated line into `buf`. Returns `None` at EOF.
async fn read_line<'a, R: AsyncRead + Unpin>(
    reader: &mut BufReader<R>,
    buf: &'a mut Vec<u8>,
    limit: usize,
) -> Result<Option<&'a [u8]>, RelayError> {
    buf.clear();
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let read = (&mut *reader).take(cap).read_until(b'\n', buf).await?;
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    } else if buf.len() > limit {
        return Err(RelayError::FrameTooLarge { limit });
    }
    Ok(Some(buf.as_slice()))
}

async fn write_frames(mut writer: OwnedWriteHalf, mut frames: UnboundedReceiver<ServerFrame>) {
    while let Some(frame) = frames.recv().await {
        let mut line = match serde_json::to_vec(&frame) {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(%error, "failed to encode frame");
                continue;
            }
        };
        line.push(b'\n');
        if writer.write_all(&line).await.is_err() {
            break;
        }
    }
    let _ = writer.shutdown().await;
}
