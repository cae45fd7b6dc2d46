//! Short-lived relay connections for one-shot commands.

use anyhow::Context;
use genie_config::RelayConfig;
use genie_core::protocol::ClientFrame;
use genie_relay::RelayClient;

use crate::progress::Progress;

pub async fn connect(config: &RelayConfig) -> anyhow::Result<RelayClient> {
    let addr = config.connect_addr();
    let spinner = Progress::spinner(&format!("connecting to relay at {addr}"));
    match RelayClient::connect(addr.as_str()).await {
        Ok(client) => {
            spinner.finish_clear();
            Ok(client)
        }
        Err(error) => {
            spinner.finish_err("relay unreachable");
            Err(error).with_context(|| format!("failed to connect to relay at {addr}"))
        }
    }
}

/// Connect, send one frame and close.
pub async fn send_once(config: &RelayConfig, frame: &ClientFrame) -> anyhow::Result<String> {
    let mut client = connect(config).await?;
    let session_id = client.session_id().to_string();
    client
        .send(frame)
        .await
        .with_context(|| format!("failed to send {} to relay", frame.event_name()))?;
    client.close().await.context("failed to close relay connection")?;
    tracing::debug!(session = %session_id, event = frame.event_name(), "frame sent");
    Ok(session_id)
}
