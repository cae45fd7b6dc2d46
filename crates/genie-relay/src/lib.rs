//! # genie-relay
//!
//! Realtime relay for group checklists, live location and emergency alerts.
//!
//! A single hub task owns every session and channel. Each TCP connection gets
//! a reader that forwards decoded frames to the hub and a writer that drains
//! the session's outbound queue. Frames are JSON objects, one per line; see
//! [`genie_core::protocol`] for the event table.
//!
//! ```no_run
//! # async fn demo() -> Result<(), genie_relay::RelayError> {
//! use genie_config::RelayConfig;
//! use genie_relay::RelayServer;
//!
//! let server = RelayServer::bind(&RelayConfig::default()).await?;
//! server.run(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod hub;
pub mod server;

mod error;

pub use client::RelayClient;
pub use error::RelayError;
pub use hub::{HubStats, RelayHub};
pub use server::RelayServer;
