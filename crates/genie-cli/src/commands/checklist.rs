use anyhow::Context;
use genie_core::entities::Checklist;
use genie_core::protocol::{ChecklistUpdate, ClientFrame};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChecklistCommands;
use crate::commands::relay;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChecklistSummary<'a> {
    id: &'a str,
    name: &'a str,
    share_id: &'a str,
    members: usize,
    items: usize,
    completion: u8,
}

impl<'a> From<&'a Checklist> for ChecklistSummary<'a> {
    fn from(checklist: &'a Checklist) -> Self {
        Self {
            id: &checklist.id,
            name: &checklist.name,
            share_id: &checklist.share_id,
            members: checklist.members.len(),
            items: checklist.items.len(),
            completion: checklist.completion_percentage(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateResponse {
    update: ChecklistUpdate,
    completion: u8,
    /// Relay session that carried the update, when broadcast.
    #[serde(skip_serializing_if = "Option::is_none")]
    broadcast_session: Option<String>,
}

/// Handle `genie checklist`.
pub async fn handle(
    action: &ChecklistCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ChecklistCommands::Create { name } => {
            let checklist = ctx.store.create_checklist(name)?.clone();
            ctx.save()?;
            output(&checklist, flags.format)
        }
        ChecklistCommands::List => {
            let summaries: Vec<ChecklistSummary<'_>> = ctx
                .store
                .state()
                .checklists
                .iter()
                .map(ChecklistSummary::from)
                .collect();
            output(&summaries, flags.format)
        }
        ChecklistCommands::Show { id } => {
            let checklist = ctx
                .store
                .checklist(id)
                .with_context(|| format!("no checklist with id '{id}'"))?;
            output(checklist, flags.format)
        }
        ChecklistCommands::Add {
            id,
            text,
            broadcast,
        } => {
            let update = ctx.store.add_checklist_item(id, text)?;
            finish_update(ctx, update, *broadcast, flags).await
        }
        ChecklistCommands::Toggle {
            id,
            item,
            broadcast,
        } => {
            let update = ctx.store.toggle_checklist_item(id, item)?;
            finish_update(ctx, update, *broadcast, flags).await
        }
        ChecklistCommands::Remove {
            id,
            item,
            broadcast,
        } => {
            let update = ctx.store.remove_checklist_item(id, item)?;
            finish_update(ctx, update, *broadcast, flags).await
        }
        ChecklistCommands::Delete { id } => {
            let removed = ctx.store.delete_checklist(id)?;
            ctx.save()?;
            output(&ChecklistSummary::from(&removed), flags.format)
        }
        ChecklistCommands::Share { id } => {
            let url = ctx.store.share_url(id, &ctx.config.server.frontend_url)?;
            output(&serde_json::json!({ "id": id, "shareUrl": url }), flags.format)
        }
        ChecklistCommands::Join { share_id } => {
            let checklist = ctx.store.join_checklist(share_id)?.clone();
            ctx.save()?;
            output(&checklist, flags.format)
        }
    }
}

/// Persist a local mutation, then optionally relay it to live members.
async fn finish_update(
    ctx: &AppContext,
    update: ChecklistUpdate,
    broadcast: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.save()?;
    let completion = ctx.store.completion_percentage(&update.checklist_id)?;

    let broadcast_session = if broadcast {
        let frame = ClientFrame::ChecklistUpdate(update.clone());
        Some(relay::send_once(&ctx.config.relay, &frame).await?)
    } else {
        None
    };

    output(
        &UpdateResponse {
            update,
            completion,
            broadcast_session,
        },
        flags.format,
    )
}
