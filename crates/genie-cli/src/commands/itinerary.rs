use anyhow::{Context, bail};
use genie_core::entities::Itinerary;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ItineraryCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `genie itinerary`.
pub fn handle(
    action: &ItineraryCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ItineraryCommands::List => output(&ctx.store.state().itineraries, flags.format),
        ItineraryCommands::Create {
            title,
            destination,
            stops,
            start,
            current,
        } => {
            let itinerary = Itinerary::new(title, destination, stops, *start)?;
            let itinerary = ctx.store.add_itinerary(itinerary).clone();
            if *current {
                ctx.store.set_current_itinerary(Some(&itinerary.id))?;
            }
            ctx.save()?;
            output(&itinerary, flags.format)
        }
        ItineraryCommands::Show { id: Some(id) } => {
            let itinerary = ctx
                .store
                .state()
                .itineraries
                .iter()
                .find(|i| &i.id == id)
                .with_context(|| format!("no itinerary with id '{id}'"))?;
            output(itinerary, flags.format)
        }
        ItineraryCommands::Show { id: None } => {
            let itinerary = ctx
                .store
                .current_itinerary()
                .context("no current itinerary; pick one with `genie itinerary use <id>`")?;
            output(itinerary, flags.format)
        }
        ItineraryCommands::Use { id } => {
            ctx.store.set_current_itinerary(Some(id))?;
            ctx.save()?;
            output(&serde_json::json!({ "current": id }), flags.format)
        }
        ItineraryCommands::Clear => {
            ctx.store.set_current_itinerary(None)?;
            ctx.save()?;
            output(&serde_json::json!({ "current": null }), flags.format)
        }
        ItineraryCommands::Remove { id } => {
            if !ctx.store.remove_itinerary(id) {
                bail!("no itinerary with id '{id}'");
            }
            ctx.save()?;
            output(&serde_json::json!({ "removed": id }), flags.format)
        }
    }
}
