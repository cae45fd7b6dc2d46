use clap::{Args, Subcommand, ValueEnum};
use genie_core::entities::LatLng;
use genie_core::enums::VehicleMode;

use crate::cli::subcommands::{
    ChecklistCommands, ContactCommands, DocumentCommands, ItineraryCommands, MapCommands,
    PlaceCommands, PrefsCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the REST API and the realtime relay until Ctrl-C.
    Serve(ServeArgs),
    /// Search places by name.
    Search(SearchArgs),
    /// Straight-line distance and travel time to a point.
    Route(RouteArgs),
    /// Map view, location history and tile layers.
    Map {
        #[command(subcommand)]
        action: MapCommands,
    },
    /// Group checklists.
    Checklist {
        #[command(subcommand)]
        action: ChecklistCommands,
    },
    /// Saved places.
    Place {
        #[command(subcommand)]
        action: PlaceCommands,
    },
    /// Emergency contacts.
    Contact {
        #[command(subcommand)]
        action: ContactCommands,
    },
    /// Travel documents.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Trip itineraries.
    Itinerary {
        #[command(subcommand)]
        action: ItineraryCommands,
    },
    /// Theme, compass and signed-in user.
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
    /// Follow a checklist's live updates from the relay.
    Watch(WatchArgs),
    /// Broadcast an emergency alert to every relay session.
    Alert(AlertArgs),
    /// Activate panic mode and broadcast a located emergency alert.
    Panic(PanicArgs),
    /// Share a position with every other relay session.
    #[command(name = "share-location")]
    ShareLocation(ShareLocationArgs),
    /// Dump the JSON schema of a wire or stored type.
    Schema(SchemaArgs),
}

/// Arguments for `genie serve`.
#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Override server.port.
    #[arg(long)]
    pub port: Option<u16>,
    /// Override relay.port.
    #[arg(long)]
    pub relay_port: Option<u16>,
}

/// Arguments for `genie search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub query: String,
    /// Max results (defaults to geocoding.result_limit).
    #[arg(short, long)]
    pub limit: Option<usize>,
    /// Save the first result as a place.
    #[arg(long)]
    pub save: bool,
}

/// Arguments for `genie route`.
#[derive(Clone, Debug, Args)]
pub struct RouteArgs {
    /// Destination as `lat,lng`.
    #[arg(allow_hyphen_values = true)]
    pub to: LatLng,
    /// Start as `lat,lng` (defaults to the last recorded location).
    #[arg(long, allow_hyphen_values = true)]
    pub from: Option<LatLng>,
    /// car, bike or walk.
    #[arg(long, default_value = "car")]
    pub mode: VehicleMode,
}

/// Arguments for `genie watch`.
#[derive(Clone, Debug, Args)]
pub struct WatchArgs {
    pub checklist_id: String,
}

/// Arguments for `genie alert`.
#[derive(Clone, Debug, Args)]
pub struct AlertArgs {
    pub message: String,
    /// Position to attach as `lat,lng`.
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<LatLng>,
}

/// Arguments for `genie panic`.
#[derive(Clone, Debug, Args)]
pub struct PanicArgs {
    /// Position as `lat,lng` (defaults to the last recorded location).
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<LatLng>,
}

/// Arguments for `genie share-location`.
#[derive(Clone, Debug, Args)]
pub struct ShareLocationArgs {
    /// Position as `lat,lng`.
    #[arg(allow_hyphen_values = true)]
    pub position: LatLng,
    /// Accuracy radius in metres.
    #[arg(long)]
    pub accuracy: Option<f64>,
}

/// Types `genie schema` can describe.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    ClientFrame,
    ServerFrame,
    Checklist,
    SavedPlace,
    EmergencyContact,
    TravelDocument,
    Itinerary,
}

/// Arguments for `genie schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
