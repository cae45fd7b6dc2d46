use chrono::NaiveDate;
use clap::Subcommand;
use genie_core::enums::DocumentKind;

/// Travel document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// List documents, flagging expired ones.
    List,
    /// Add a document.
    Add {
        title: String,
        /// passport, visa, ticket, booking, insurance or other.
        #[arg(long, default_value = "other")]
        kind: DocumentKind,
        /// Booking reference or document number.
        #[arg(long)]
        reference: Option<String>,
        /// Expiry date (YYYY-MM-DD).
        #[arg(long)]
        expires: Option<NaiveDate>,
    },
    /// Remove a document.
    Remove { id: String },
}
