use anyhow::bail;
use genie_core::entities::SavedPlace;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlaceCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `genie place`.
pub fn handle(
    action: &PlaceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PlaceCommands::List => output(&ctx.store.state().saved_places, flags.format),
        PlaceCommands::Save {
            position,
            title,
            address,
        } => {
            let place = ctx
                .store
                .add_saved_place(SavedPlace::new(*position, title, address))
                .clone();
            ctx.save()?;
            output(&place, flags.format)
        }
        PlaceCommands::Remove { id } => {
            if !ctx.store.remove_saved_place(id) {
                bail!("no saved place with id '{id}'");
            }
            ctx.save()?;
            output(&serde_json::json!({ "removed": id }), flags.format)
        }
    }
}
