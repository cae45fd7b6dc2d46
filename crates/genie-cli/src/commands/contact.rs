use anyhow::bail;
use genie_core::entities::EmergencyContact;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContactCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `genie contact`.
pub fn handle(
    action: &ContactCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContactCommands::List => output(&ctx.store.state().emergency_contacts, flags.format),
        ContactCommands::Add { name, number, kind } => {
            let contact = ctx
                .store
                .add_emergency_contact(EmergencyContact::new(name, number, *kind))
                .clone();
            ctx.save()?;
            output(&contact, flags.format)
        }
        ContactCommands::Remove { id } => {
            if !ctx.store.remove_emergency_contact(id) {
                bail!("no emergency contact with id '{id}'");
            }
            ctx.save()?;
            output(&serde_json::json!({ "removed": id }), flags.format)
        }
    }
}
