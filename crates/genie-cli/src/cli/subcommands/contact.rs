use clap::Subcommand;
use genie_core::enums::ContactKind;

/// Emergency contact commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContactCommands {
    /// List contacts.
    List,
    /// Add a contact.
    Add {
        name: String,
        number: String,
        /// police, medical, fire or personal.
        #[arg(long, default_value = "personal")]
        kind: ContactKind,
    },
    /// Remove a contact.
    Remove { id: String },
}
