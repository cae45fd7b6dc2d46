use genie_core::entities::UserProfile;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrefsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Prefs<'a> {
    dark_mode: bool,
    compass_enabled: bool,
    user: Option<&'a UserProfile>,
    is_authenticated: bool,
    is_guest: bool,
}

/// Handle `genie prefs`.
pub fn handle(
    action: &PrefsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PrefsCommands::Show => {}
        PrefsCommands::DarkMode => {
            ctx.store.toggle_dark_mode();
        }
        PrefsCommands::Compass => {
            ctx.store.toggle_compass();
        }
        PrefsCommands::Login { username, email } => {
            let mut user = UserProfile::new(username);
            user.email.clone_from(email);
            ctx.store.set_user(Some(user));
        }
        PrefsCommands::Logout => ctx.store.logout(),
    }
    if !matches!(action, PrefsCommands::Show) {
        ctx.save()?;
    }

    let state = ctx.store.state();
    output(
        &Prefs {
            dark_mode: state.dark_mode,
            compass_enabled: state.compass_enabled,
            user: state.user.as_ref(),
            is_authenticated: state.is_authenticated,
            is_guest: state.is_guest,
        },
        flags.format,
    )
}
