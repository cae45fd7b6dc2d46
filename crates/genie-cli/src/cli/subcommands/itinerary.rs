use chrono::NaiveDate;
use clap::Subcommand;

/// Itinerary commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItineraryCommands {
    /// List itineraries.
    List,
    /// Plan a new itinerary.
    Create {
        title: String,
        #[arg(long)]
        destination: String,
        /// A stop, in visiting order. Repeatable.
        #[arg(long = "stop")]
        stops: Vec<String>,
        /// First day of the trip (YYYY-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Make it the current itinerary.
        #[arg(long)]
        current: bool,
    },
    /// Show one itinerary, or the current one.
    Show { id: Option<String> },
    /// Select the current itinerary.
    Use { id: String },
    /// Clear the current itinerary.
    Clear,
    /// Remove an itinerary.
    Remove { id: String },
}
