use clap::Subcommand;

/// Group checklist commands. `--broadcast` also sends the change to the
/// relay so live members see it.
#[derive(Clone, Debug, Subcommand)]
pub enum ChecklistCommands {
    /// Create a checklist.
    Create { name: String },
    /// List checklists with completion.
    List,
    /// Show a checklist with its items.
    Show { id: String },
    /// Add an item.
    Add {
        id: String,
        text: String,
        #[arg(long)]
        broadcast: bool,
    },
    /// Toggle an item's completion.
    Toggle {
        id: String,
        item: String,
        #[arg(long)]
        broadcast: bool,
    },
    /// Remove an item.
    Remove {
        id: String,
        item: String,
        #[arg(long)]
        broadcast: bool,
    },
    /// Delete a checklist.
    Delete { id: String },
    /// Print the share link.
    Share { id: String },
    /// Join a checklist by its share id.
    Join { share_id: String },
}
