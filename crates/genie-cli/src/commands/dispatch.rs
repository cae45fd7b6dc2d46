use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Search(args) => commands::search::handle(&args, ctx, flags).await,
        Commands::Route(args) => commands::route::handle(&args, ctx, flags),
        Commands::Map { action } => commands::map::handle(&action, ctx, flags),
        Commands::Checklist { action } => commands::checklist::handle(&action, ctx, flags).await,
        Commands::Place { action } => commands::place::handle(&action, ctx, flags),
        Commands::Contact { action } => commands::contact::handle(&action, ctx, flags),
        Commands::Document { action } => commands::document::handle(&action, ctx, flags),
        Commands::Itinerary { action } => commands::itinerary::handle(&action, ctx, flags),
        Commands::Prefs { action } => commands::prefs::handle(&action, ctx, flags),
        Commands::Watch(args) => commands::watch::handle(&args, ctx, flags).await,
        Commands::Alert(args) => commands::alert::handle_alert(&args, ctx, flags).await,
        Commands::Panic(args) => commands::alert::handle_panic(&args, ctx, flags).await,
        Commands::ShareLocation(args) => {
            commands::alert::handle_share_location(&args, ctx, flags).await
        }
        Commands::Serve(_) | Commands::Schema(_) => {
            unreachable!("serve/schema are pre-dispatched in main")
        }
    }
}
