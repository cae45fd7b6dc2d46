use anyhow::Context;
use genie_core::entities::Notification;
use genie_core::protocol::{ChecklistUpdate, ServerFrame};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::WatchArgs;
use crate::commands::relay;
use crate::context::AppContext;
use crate::output::output;

/// Handle `genie watch`: join the checklist's channel and print every frame
/// until Ctrl-C, applying checklist updates to the local copy.
pub async fn handle(args: &WatchArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if ctx.store.checklist(&args.checklist_id).is_none() {
        tracing::warn!(
            checklist = %args.checklist_id,
            "checklist is not in the local store; updates will be printed but not applied"
        );
    }

    let mut client = relay::connect(&ctx.config.relay).await?;
    client
        .join(&args.checklist_id)
        .await
        .context("failed to join checklist channel")?;
    tracing::info!(checklist = %args.checklist_id, session = %client.session_id(), "watching");

    loop {
        let frame = tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            frame = client.recv() => frame.context("relay connection failed")?,
        };
        let Some(frame) = frame else {
            tracing::warn!("relay closed the connection");
            break;
        };

        match &frame {
            ServerFrame::ChecklistUpdated(update) => {
                apply_and_save(ctx, update)?;
            }
            ServerFrame::EmergencyAlert(alert) => {
                let note = ctx.store.add_notification(Notification::new(
                    &format!("Emergency from {}", alert.user),
                    &alert.message,
                ));
                tracing::warn!(title = %note.title, "emergency alert received");
            }
            ServerFrame::LocationShared(share) => {
                let note = ctx.store.add_notification(Notification::new(
                    &format!("{} shared a location", share.user),
                    &format!("{}, {}", share.lat, share.lng),
                ));
                tracing::info!(title = %note.title, "location shared");
            }
            ServerFrame::Connected(_) | ServerFrame::Error(_) => {}
        }
        output(&frame, flags.format)?;
    }

    let _ = client.leave(&args.checklist_id).await;
    Ok(())
}

/// Apply a relay update on top of the latest state file and write it back,
/// keeping whatever other `genie` commands saved since `watch` started.
fn apply_and_save(ctx: &mut AppContext, update: &ChecklistUpdate) -> anyhow::Result<bool> {
    ctx.store.reload().context("failed to reload client state")?;
    let applied = ctx.store.apply_remote_update(update);
    if applied {
        ctx.save()?;
    }
    Ok(applied)
}
