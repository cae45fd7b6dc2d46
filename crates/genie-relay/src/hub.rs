//! The hub actor: sole owner of sessions and channel membership.
//!
//! Connection tasks never touch shared state. They send [`HubCommand`]s over
//! an unbounded channel and receive [`ServerFrame`]s on their own outbound
//! channel. Fan-out is fire-and-forget: a session whose outbound channel is
//! closed simply misses the frame.

use std::collections::{BTreeSet, HashMap};

use genie_core::protocol::{
    ChecklistUpdate, ClientFrame, EmergencyAlert, LocationShare, ServerFrame, SessionInfo,
    channel_name,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;

use crate::error::RelayError;

#[derive(Debug)]
pub enum HubCommand {
    /// Register a session. The hub greets it with a `connected` frame.
    Connect {
        session_id: String,
        outbound: UnboundedSender<ServerFrame>,
    },
    /// Remove a session from the hub and from every channel.
    Disconnect { session_id: String },
    /// A decoded frame from a session.
    Frame {
        session_id: String,
        frame: ClientFrame,
    },
    /// Current members of a channel, sorted.
    Members {
        channel: String,
        reply: oneshot::Sender<Vec<String>>,
    },
    Stats { reply: oneshot::Sender<HubStats> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HubStats {
    pub sessions: usize,
    pub channels: usize,
}

/// Routing state. Driven by [`Hub::handle`], one command at a time.
#[derive(Debug, Default)]
pub(crate) struct Hub {
    sessions: HashMap<String, UnboundedSender<ServerFrame>>,
    channels: HashMap<String, BTreeSet<String>>,
}

impl Hub {
    pub(crate) fn handle(&mut self, command: HubCommand) {
        match command {
            HubCommand::Connect {
                session_id,
                outbound,
            } => self.connect(session_id, outbound),
            HubCommand::Disconnect { session_id } => self.disconnect(&session_id),
            HubCommand::Frame { session_id, frame } => self.route(&session_id, frame),
            HubCommand::Members { channel, reply } => {
                let members = self
                    .channels
                    .get(&channel)
                    .map(|m| m.iter().cloned().collect())
                    .unwrap_or_default();
                let _ = reply.send(members);
            }
            HubCommand::Stats { reply } => {
                let _ = reply.send(self.stats());
            }
        }
    }

    fn stats(&self) -> HubStats {
        HubStats {
            sessions: self.sessions.len(),
            channels: self.channels.len(),
        }
    }

    fn connect(&mut self, session_id: String, outbound: UnboundedSender<ServerFrame>) {
        let _ = outbound.send(ServerFrame::Connected(SessionInfo {
            session_id: session_id.clone(),
        }));
        tracing::info!(session = %session_id, "session connected");
        self.sessions.insert(session_id, outbound);
    }

    fn disconnect(&mut self, session_id: &str) {
        self.sessions.remove(session_id);
        self.channels.retain(|channel, members| {
            if members.remove(session_id) {
                tracing::debug!(session = %session_id, %channel, "left channel on disconnect");
            }
            !members.is_empty()
        });
        tracing::info!(session = %session_id, "session disconnected");
    }

    fn route(&mut self, from: &str, frame: ClientFrame) {
        tracing::debug!(session = %from, event = frame.event_name(), "frame received");
        match frame {
            ClientFrame::JoinChecklist(target) => {
                let channel = channel_name(&target.checklist_id);
                let inserted = self
                    .channels
                    .entry(channel.clone())
                    .or_default()
                    .insert(from.to_string());
                if inserted {
                    tracing::info!(session = %from, %channel, "joined channel");
                }
            }
            ClientFrame::LeaveChecklist(target) => {
                let channel = channel_name(&target.checklist_id);
                if let Some(members) = self.channels.get_mut(&channel) {
                    members.remove(from);
                    if members.is_empty() {
                        self.channels.remove(&channel);
                    }
                }
            }
            ClientFrame::ChecklistUpdate(update) => self.fan_out_update(from, update),
            ClientFrame::ShareLocation(share) => self.fan_out_location(from, share),
            ClientFrame::EmergencyAlert(alert) => self.fan_out_alert(from, alert),
        }
    }

    /// Deliver to the checklist's channel, skipping the sender whether or
    /// not it has joined.
    fn fan_out_update(&self, from: &str, update: ChecklistUpdate) {
        let channel = channel_name(&update.checklist_id);
        let Some(members) = self.channels.get(&channel) else {
            tracing::debug!(%channel, "update for empty channel dropped");
            return;
        };
        let frame = ServerFrame::ChecklistUpdated(update);
        let delivered = self.deliver(members.iter().filter(|m| *m != from), &frame);
        tracing::debug!(%channel, delivered, "checklist update relayed");
    }

    fn fan_out_location(&self, from: &str, share: LocationShare) {
        let frame = ServerFrame::LocationShared(share);
        self.deliver(self.sessions.keys().filter(|s| *s != from), &frame);
    }

    fn fan_out_alert(&self, from: &str, alert: EmergencyAlert) {
        tracing::warn!(session = %from, user = %alert.user, "emergency alert broadcast");
        let frame = ServerFrame::EmergencyAlert(alert);
        self.deliver(self.sessions.keys(), &frame);
    }

    fn deliver<'a>(&self, targets: impl Iterator<Item = &'a String>, frame: &ServerFrame) -> usize {
        targets
            .filter_map(|id| self.sessions.get(id))
            .filter(|tx| tx.send(frame.clone()).is_ok())
            .count()
    }
}

/// Cloneable handle to a running hub task.
#[derive(Debug, Clone)]
pub struct RelayHub {
    commands: UnboundedSender<HubCommand>,
}

impl RelayHub {
    /// Spawn the hub task on the current Tokio runtime. It runs until every
    /// handle is dropped.
    #[must_use]
    pub fn spawn() -> Self {
        let (commands, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(rx));
        Self { commands }
    }

    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub fn send(&self, command: HubCommand) -> Result<(), RelayError> {
        self.commands.send(command).map_err(|_| RelayError::HubClosed)
    }

    /// Register a session and return the receiver for frames addressed to it.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub fn connect(&self, session_id: &str) -> Result<UnboundedReceiver<ServerFrame>, RelayError> {
        let (outbound, rx) = mpsc::unbounded_channel();
        self.connect_with(session_id, outbound)?;
        Ok(rx)
    }

    /// Register a session that writes to an existing outbound sender.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub fn connect_with(
        &self,
        session_id: &str,
        outbound: UnboundedSender<ServerFrame>,
    ) -> Result<(), RelayError> {
        self.send(HubCommand::Connect {
            session_id: session_id.to_string(),
            outbound,
        })
    }

    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub fn disconnect(&self, session_id: &str) -> Result<(), RelayError> {
        self.send(HubCommand::Disconnect {
            session_id: session_id.to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub fn submit(&self, session_id: &str, frame: ClientFrame) -> Result<(), RelayError> {
        self.send(HubCommand::Frame {
            session_id: session_id.to_string(),
            frame,
        })
    }

    /// Sessions currently in the channel of `checklist_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub async fn members(&self, checklist_id: &str) -> Result<Vec<String>, RelayError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::Members {
            channel: channel_name(checklist_id),
            reply,
        })?;
        rx.await.map_err(|_| RelayError::HubClosed)
    }

    /// # Errors
    ///
    /// Returns [`RelayError::HubClosed`] if the hub task has stopped.
    pub async fn stats(&self) -> Result<HubStats, RelayError> {
        let (reply, rx) = oneshot::channel();
        self.send(HubCommand::Stats { reply })?;
        rx.await.map_err(|_| RelayError::HubClosed)
    }
}

async fn run(mut commands: UnboundedReceiver<HubCommand>) {
    let mut hub = Hub::default();
    while let Some(command) = commands.recv().await {
        hub.handle(command);
    }
    tracing::debug!("hub command channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::entities::ChecklistItem;
    use genie_core::enums::ItemAction;
    use genie_core::protocol::ChannelRef;
    use pretty_assertions::assert_eq;

    fn session(hub: &mut Hub, id: &str) -> UnboundedReceiver<ServerFrame> {
        let (outbound, mut rx) = mpsc::unbounded_channel();
        hub.handle(HubCommand::Connect {
            session_id: id.into(),
            outbound,
        });
        assert!(matches!(rx.try_recv(), Ok(ServerFrame::Connected(_))));
        rx
    }

    fn send(hub: &mut Hub, from: &str, frame: ClientFrame) {
        hub.handle(HubCommand::Frame {
            session_id: from.into(),
            frame,
        });
    }

    fn join(hub: &mut Hub, from: &str, checklist_id: &str) {
        send(
            hub,
            from,
            ClientFrame::JoinChecklist(ChannelRef {
                checklist_id: checklist_id.into(),
            }),
        );
    }

    fn update(checklist_id: &str) -> ClientFrame {
        ClientFrame::ChecklistUpdate(ChecklistUpdate {
            checklist_id: checklist_id.into(),
            action: ItemAction::Toggled,
            item: ChecklistItem::new("Passport", "sarah_travels").unwrap(),
        })
    }

    fn drain(rx: &mut UnboundedReceiver<ServerFrame>) -> Vec<ServerFrame> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn connect_greets_with_session_id() {
        let mut hub = Hub::default();
        let (outbound, mut rx) = mpsc::unbounded_channel();
        hub.handle(HubCommand::Connect {
            session_id: "ses-a".into(),
            outbound,
        });
        assert_eq!(
            rx.try_recv().unwrap(),
            ServerFrame::Connected(SessionInfo {
                session_id: "ses-a".into()
            })
        );
    }

    #[test]
    fn update_reaches_other_members_only() {
        let mut hub = Hub::default();
        let mut a = session(&mut hub, "a");
        let mut b = session(&mut hub, "b");
        let mut c = session(&mut hub, "c");
        join(&mut hub, "a", "chk-1");
        join(&mut hub, "b", "chk-1");
        join(&mut hub, "c", "chk-2");

        send(&mut hub, "a", update("chk-1"));

        assert!(drain(&mut a).is_empty());
        let got = drain(&mut b);
        assert_eq!(got.len(), 1);
        assert!(matches!(&got[0], ServerFrame::ChecklistUpdated(u) if u.checklist_id == "chk-1"));
        assert!(drain(&mut c).is_empty());
    }

    #[test]
    fn sender_outside_channel_still_fans_out() {
        let mut hub = Hub::default();
        let mut member = session(&mut hub, "member");
        let mut outsider = session(&mut hub, "outsider");
        join(&mut hub, "member", "chk-1");

        send(&mut hub, "outsider", update("chk-1"));

        assert_eq!(drain(&mut member).len(), 1);
        assert!(drain(&mut outsider).is_empty());
    }

    #[test]
    fn join_is_idempotent_and_leave_drops_empty_channel() {
        let mut hub = Hub::default();
        let _a = session(&mut hub, "a");
        join(&mut hub, "a", "chk-1");
        join(&mut hub, "a", "chk-1");
        assert_eq!(hub.channels["checklist-chk-1"].len(), 1);

        send(
            &mut hub,
            "a",
            ClientFrame::LeaveChecklist(ChannelRef {
                checklist_id: "chk-1".into(),
            }),
        );
        assert!(hub.channels.is_empty());
    }

    #[test]
    fn location_share_skips_sender() {
        let mut hub = Hub::default();
        let mut a = session(&mut hub, "a");
        let mut b = session(&mut hub, "b");
        let mut c = session(&mut hub, "c");

        send(
            &mut hub,
            "a",
            ClientFrame::ShareLocation(LocationShare {
                user: "sarah_travels".into(),
                lat: 15.49,
                lng: 73.82,
                accuracy: Some(12.0),
                shared_at: None,
            }),
        );

        assert!(drain(&mut a).is_empty());
        assert!(matches!(drain(&mut b)[..], [ServerFrame::LocationShared(_)]));
        assert!(matches!(drain(&mut c)[..], [ServerFrame::LocationShared(_)]));
    }

    #[test]
    fn emergency_alert_reaches_everyone() {
        let mut hub = Hub::default();
        let mut a = session(&mut hub, "a");
        let mut b = session(&mut hub, "b");

        send(
            &mut hub,
            "a",
            ClientFrame::EmergencyAlert(EmergencyAlert {
                user: "sarah_travels".into(),
                message: "Need help near Baga beach".into(),
                lat: None,
                lng: None,
            }),
        );

        assert!(matches!(drain(&mut a)[..], [ServerFrame::EmergencyAlert(_)]));
        assert!(matches!(drain(&mut b)[..], [ServerFrame::EmergencyAlert(_)]));
    }

    #[test]
    fn disconnect_cleans_up_channels() {
        let mut hub = Hub::default();
        let _a = session(&mut hub, "a");
        let mut b = session(&mut hub, "b");
        join(&mut hub, "a", "chk-1");
        join(&mut hub, "a", "chk-2");
        join(&mut hub, "b", "chk-2");

        hub.handle(HubCommand::Disconnect {
            session_id: "a".into(),
        });

        assert_eq!(hub.stats(), HubStats { sessions: 1, channels: 1 });
        assert!(!hub.channels.contains_key("checklist-chk-1"));

        // A later update from the departed session still reaches b.
        send(&mut hub, "a", update("chk-2"));
        assert_eq!(drain(&mut b).len(), 1);
    }

    #[test]
    fn closed_outbound_is_skipped() {
        let mut hub = Hub::default();
        let a = session(&mut hub, "a");
        let mut b = session(&mut hub, "b");
        join(&mut hub, "a", "chk-1");
        join(&mut hub, "b", "chk-1");
        drop(a);

        send(&mut hub, "b", update("chk-1"));
        assert!(drain(&mut b).is_empty());
    }

    #[tokio::test]
    async fn handle_queries_running_hub() {
        let hub = RelayHub::spawn();
        let mut rx = hub.connect("ses-x").unwrap();
        hub.submit(
            "ses-x",
            ClientFrame::JoinChecklist(ChannelRef {
                checklist_id: "chk-9".into(),
            }),
        )
        .unwrap();

        assert_eq!(hub.members("chk-9").await.unwrap(), vec!["ses-x".to_string()]);
        assert!(matches!(rx.recv().await, Some(ServerFrame::Connected(_))));

        hub.disconnect("ses-x").unwrap();
        assert_eq!(hub.stats().await.unwrap(), HubStats::default());
    }
}
