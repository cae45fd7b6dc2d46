use clap::Subcommand;
use genie_core::entities::LatLng;
use genie_core::enums::MapStyle;

/// Map commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MapCommands {
    /// Current map view.
    Show,
    /// Record the device position and center the map on it.
    Locate {
        #[arg(allow_hyphen_values = true)]
        position: LatLng,
    },
    /// Recorded positions, newest first.
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Tile URL template for a layer, honouring dark mode.
    Tiles {
        /// streets, satellite or terrain.
        #[arg(long, default_value = "streets")]
        style: MapStyle,
    },
}
