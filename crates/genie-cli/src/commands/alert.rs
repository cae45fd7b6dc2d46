use genie_core::protocol::{ClientFrame, EmergencyAlert, LocationShare};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AlertArgs, PanicArgs, ShareLocationArgs};
use crate::commands::relay;
use crate::context::AppContext;
use crate::output::output;

/// Handle `genie alert`. Every relay session receives it, this one included.
pub async fn handle_alert(
    args: &AlertArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let alert = EmergencyAlert {
        user: ctx.store.actor(),
        message: args.message.clone(),
        lat: args.at.map(|p| p.lat),
        lng: args.at.map(|p| p.lng),
    };
    relay::send_once(&ctx.config.relay, &ClientFrame::EmergencyAlert(alert.clone())).await?;
    output(&alert, flags.format)
}

/// Handle `genie panic`: switch panic mode on and broadcast the composed
/// alert with the best known position.
pub async fn handle_panic(
    args: &PanicArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let alert = ctx.store.activate_panic(args.at);
    relay::send_once(&ctx.config.relay, &ClientFrame::EmergencyAlert(alert.clone())).await?;
    output(&alert, flags.format)
}

/// Handle `genie share-location`. The position is also recorded locally.
pub async fn handle_share_location(
    args: &ShareLocationArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let recorded_at = ctx.store.add_location_history(args.position).recorded_at;
    ctx.store.set_user_location(Some(args.position));
    ctx.save()?;

    let share = LocationShare {
        user: ctx.store.actor(),
        lat: args.position.lat,
        lng: args.position.lng,
        accuracy: args.accuracy,
        shared_at: Some(recorded_at),
    };
    relay::send_once(&ctx.config.relay, &ClientFrame::ShareLocation(share.clone())).await?;
    output(&share, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use genie_config::RelayConfig;
    use genie_core::entities::LatLng;
    use genie_core::protocol::ServerFrame;
    use genie_relay::{RelayClient, RelayServer};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            state: None,
        }
    }

    #[tokio::test]
    async fn panic_broadcasts_located_alert() {
        let config = RelayConfig {
            host: "127.0.0.1".into(),
            port: 0,
            ..RelayConfig::default()
        };
        let server = RelayServer::bind(&config).await.unwrap();
        let port = server.local_addr().unwrap().port();
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(server.run(async move {
            let _ = stopped.await;
        }));

        let dir = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::in_dir(dir.path());
        ctx.config.relay = RelayConfig { port, ..config };
        ctx.store.add_location_history(LatLng { lat: 15.5736, lng: 73.7407 });

        let mut listener = RelayClient::connect(ctx.config.relay.connect_addr().as_str())
            .await
            .unwrap();
        handle_panic(&PanicArgs { at: None }, &mut ctx, &flags()).await.unwrap();
        assert!(ctx.store.state().panic_mode);

        let frame = tokio::time::timeout(Duration::from_secs(5), listener.recv())
            .await
            .expect("no alert within timeout")
            .unwrap();
        match frame {
            Some(ServerFrame::EmergencyAlert(alert)) => {
                assert_eq!(alert.lat, Some(15.5736));
                assert!(alert.message.contains("Map Link: https://maps.google.com?q=15.5736,73.7407"));
            }
            other => panic!("expected emergency-alert, got {other:?}"),
        }
        let _ = stop.send(());
    }
}
