use clap::Subcommand;

/// Preference and session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PrefsCommands {
    /// Show preferences and the signed-in user.
    Show,
    /// Toggle dark mode.
    #[command(name = "dark-mode")]
    DarkMode,
    /// Toggle the compass.
    Compass,
    /// Act as a named user; edits are stamped with this name.
    Login {
        username: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// Return to guest mode.
    Logout,
}
