use clap::Subcommand;
use genie_core::entities::LatLng;

/// Saved place commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PlaceCommands {
    /// List saved places.
    List,
    /// Save a place.
    Save {
        #[arg(allow_hyphen_values = true)]
        position: LatLng,
        title: String,
        #[arg(long, default_value = "")]
        address: String,
    },
    /// Remove a saved place.
    Remove { id: String },
}
