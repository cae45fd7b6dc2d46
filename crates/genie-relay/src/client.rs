//! Client side of the relay connection.

use genie_core::protocol::{ChannelRef, ClientFrame, ServerFrame};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpStream, ToSocketAddrs};

use crate::error::RelayError;

/// A connected relay session.
pub struct RelayClient {
    session_id: String,
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl RelayClient {
    /// Connect and wait for the `connected` greeting.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] if the connection fails or the first frame is
    /// not a greeting.
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self, RelayError> {
        let stream = TcpStream::connect(addr).await?;
        let (read_half, writer) = stream.into_split();
        let mut client = Self {
            session_id: String::new(),
            lines: BufReader::new(read_half).lines(),
            writer,
        };
        match client.recv().await? {
            Some(ServerFrame::Connected(info)) => {
                tracing::debug!(session = %info.session_id, "connected to relay");
                client.session_id = info.session_id;
                Ok(client)
            }
            Some(other) => Err(RelayError::Closed(format!(
                "expected connected frame, got {other:?}"
            ))),
            None => Err(RelayError::Closed("no greeting from relay".into())),
        }
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// # Errors
    ///
    /// Returns [`RelayError`] if encoding or writing fails.
    pub async fn send(&mut self, frame: &ClientFrame) -> Result<(), RelayError> {
        let mut line = serde_json::to_vec(frame)?;
        line.push(b'\n');
        self.writer.write_all(&line).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`RelayError`] if writing fails.
    pub async fn join(&mut self, checklist_id: &str) -> Result<(), RelayError> {
        self.send(&ClientFrame::JoinChecklist(ChannelRef {
            checklist_id: checklist_id.to_string(),
        }))
        .await
    }

    /// # Errors
    ///
    /// Returns [`RelayError`] if writing fails.
    pub async fn leave(&mut self, checklist_id: &str) -> Result<(), RelayError> {
        self.send(&ClientFrame::LeaveChecklist(ChannelRef {
            checklist_id: checklist_id.to_string(),
        }))
        .await
    }

    /// Next frame from the relay, or `None` once the relay closes the
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError`] if reading fails or a line does not decode.
    pub async fn recv(&mut self) -> Result<Option<ServerFrame>, RelayError> {
        while let Some(line) = self.lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            return Ok(Some(serde_json::from_str(&line)?));
        }
        Ok(None)
    }

    /// Send a raw line, bypassing frame encoding.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Io`] if writing fails.
    pub async fn send_raw(&mut self, line: &str) -> Result<(), RelayError> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        Ok(())
    }

    /// Close the write half; the relay then drops the session.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Io`] if the shutdown fails.
    pub async fn close(mut self) -> Result<(), RelayError> {
        self.writer.shutdown().await?;
        Ok(())
    }
}
