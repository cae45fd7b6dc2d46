//! End-to-end relay behaviour over real TCP connections.

use std::time::Duration;

use genie_config::RelayConfig;
use genie_core::entities::ChecklistItem;
use genie_core::enums::ItemAction;
use genie_core::protocol::{
    ChecklistUpdate, ClientFrame, EmergencyAlert, LocationShare, ServerFrame,
};
use genie_relay::{RelayClient, RelayHub, RelayServer};
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(5);

struct Harness {
    addr: std::net::SocketAddr,
    hub: RelayHub,
    stop: Option<oneshot::Sender<()>>,
}

impl Harness {
    async fn start() -> Self {
        Self::start_with_frame_limit(RelayConfig::default().max_frame_bytes).await
    }

    async fn start_with_frame_limit(max_frame_bytes: usize) -> Self {
        let config = RelayConfig {
            host: "127.0.0.1".into(),
            port: 0,
            max_frame_bytes,
        };
        let server = RelayServer::bind(&config).await.unwrap();
        let addr = server.local_addr().unwrap();
        let hub = server.hub();
        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(server.run(async move {
            let _ = stopped.await;
        }));
        Self {
            addr,
            hub,
            stop: Some(stop),
        }
    }

    async fn client(&self) -> RelayClient {
        timeout(WAIT, RelayClient::connect(self.addr))
            .await
            .expect("connect timed out")
            .unwrap()
    }

    /// Joins are not acknowledged on the wire; poll the hub until they land.
    async fn wait_for_members(&self, checklist_id: &str, count: usize) {
        timeout(WAIT, async {
            while self.hub.members(checklist_id).await.unwrap().len() != count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("members never joined");
    }

    async fn wait_for_sessions(&self, count: usize) {
        timeout(WAIT, async {
            while self.hub.stats().await.unwrap().sessions != count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("session count never settled");
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn next(client: &mut RelayClient) -> ServerFrame {
    timeout(WAIT, client.recv())
        .await
        .expect("no frame within timeout")
        .unwrap()
        .expect("relay closed the connection")
}

fn toggle(checklist_id: &str, text: &str) -> ClientFrame {
    let mut item = ChecklistItem::new(text, "sarah_travels").unwrap();
    item.toggle("sarah_travels", chrono::Utc::now());
    ClientFrame::ChecklistUpdate(ChecklistUpdate {
        checklist_id: checklist_id.into(),
        action: ItemAction::Toggled,
        item,
    })
}

fn alert(user: &str) -> ClientFrame {
    ClientFrame::EmergencyAlert(EmergencyAlert {
        user: user.into(),
        message: "Lost near Anjuna market".into(),
        lat: Some(15.5736),
        lng: Some(73.7407),
    })
}

#[tokio::test]
async fn checklist_update_reaches_other_members_only() {
    let relay = Harness::start().await;
    let mut alice = relay.client().await;
    let mut bob = relay.client().await;
    let mut carol = relay.client().await;
    assert_ne!(alice.session_id(), bob.session_id());

    alice.join("chk-beach").await.unwrap();
    bob.join("chk-beach").await.unwrap();
    carol.join("chk-trek").await.unwrap();
    relay.wait_for_members("chk-beach", 2).await;
    relay.wait_for_members("chk-trek", 1).await;

    alice.send(&toggle("chk-beach", "Sunscreen SPF 50+")).await.unwrap();
    // Everyone gets the alert; it marks the end of what alice sent.
    alice.send(&alert("sarah_travels")).await.unwrap();

    match next(&mut bob).await {
        ServerFrame::ChecklistUpdated(update) => {
            assert_eq!(update.checklist_id, "chk-beach");
            assert_eq!(update.item.text, "Sunscreen SPF 50+");
            assert!(update.item.completed);
            assert_eq!(update.item.completed_by.as_deref(), Some("sarah_travels"));
        }
        other => panic!("bob expected checklist-updated, got {other:?}"),
    }
    assert!(matches!(next(&mut bob).await, ServerFrame::EmergencyAlert(_)));
    assert!(matches!(next(&mut alice).await, ServerFrame::EmergencyAlert(_)));
    assert!(matches!(next(&mut carol).await, ServerFrame::EmergencyAlert(_)));
}

#[tokio::test]
async fn location_share_skips_sender() {
    let relay = Harness::start().await;
    let mut alice = relay.client().await;
    let mut bob = relay.client().await;
    relay.wait_for_sessions(2).await;

    alice
        .send(&ClientFrame::ShareLocation(LocationShare {
            user: "sarah_travels".into(),
            lat: 28.6129,
            lng: 77.2295,
            accuracy: Some(8.0),
            shared_at: Some(chrono::Utc::now()),
        }))
        .await
        .unwrap();
    alice.send(&alert("sarah_travels")).await.unwrap();

    match next(&mut bob).await {
        ServerFrame::LocationShared(share) => assert_eq!(share.user, "sarah_travels"),
        other => panic!("bob expected location-shared, got {other:?}"),
    }
    assert!(matches!(next(&mut alice).await, ServerFrame::EmergencyAlert(_)));
}

#[tokio::test]
async fn malformed_frame_gets_error_and_connection_survives() {
    let relay = Harness::start().await;
    let mut alice = relay.client().await;

    alice.send_raw("{\"event\":\"teleport\",\"data\":{}}").await.unwrap();
    assert!(matches!(next(&mut alice).await, ServerFrame::Error(_)));

    alice.join("chk-beach").await.unwrap();
    relay.wait_for_members("chk-beach", 1).await;
}

#[tokio::test]
async fn disconnect_removes_session_from_channels() {
    let relay = Harness::start().await;
    let mut alice = relay.client().await;
    let mut bob = relay.client().await;
    alice.join("chk-beach").await.unwrap();
    bob.join("chk-beach").await.unwrap();
    relay.wait_for_members("chk-beach", 2).await;

    alice.close().await.unwrap();
    relay.wait_for_members("chk-beach", 1).await;
    relay.wait_for_sessions(1).await;

    bob.leave("chk-beach").await.unwrap();
    relay.wait_for_members("chk-beach", 0).await;
    assert_eq!(relay.hub.stats().await.unwrap().channels, 0);
}

#[tokio::test]
async fn emergency_alert_echoes_back_to_sender() {
    let relay = Harness::start().await;
    let mut alice = relay.client().await;
    relay.wait_for_sessions(1).await;

    alice.send(&alert("sarah_travels")).await.unwrap();
    match next(&mut alice).await {
        ServerFrame::EmergencyAlert(received) => {
            assert_eq!(received.user, "sarah_travels");
            assert_eq!(received.message, "Lost near Anjuna market");
            assert_eq!(received.lat, Some(15.5736));
        }
        other => panic!("alice expected her own emergency-alert, got {other:?}"),
    }
}

#[tokio::test]
async fn oversized_line_closes_the_connection() {
    let relay = Harness::start_with_frame_limit(256).await;
    let mut alice = relay.client().await;
    let mut bob = relay.client().await;
    relay.wait_for_sessions(2).await;

    let padding = "x".repeat(1024);
    alice
        .send_raw(&format!("{{\"event\":\"emergency-alert\",\"data\":{{\"user\":\"{padding}\",\"message\":\"\"}}}}"))
        .await
        .unwrap();

    // The relay hangs up: either a clean EOF or a reset, never a frame.
    let outcome = timeout(WAIT, alice.recv()).await.expect("connection stayed open");
    assert!(!matches!(outcome, Ok(Some(_))), "unexpected frame: {outcome:?}");
    relay.wait_for_sessions(1).await;

    // The other session is untouched and the oversized frame was never relayed.
    alice = relay.client().await;
    alice.send(&alert("sarah_travels")).await.unwrap();
    match next(&mut bob).await {
        ServerFrame::EmergencyAlert(received) => assert_eq!(received.user, "sarah_travels"),
        other => panic!("bob expected the follow-up alert, got {other:?}"),
    }
}
