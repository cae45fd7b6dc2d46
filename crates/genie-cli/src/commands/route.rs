use anyhow::bail;
use genie_core::entities::LatLng;
use genie_geo::estimate_route;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RouteArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `genie route`.
pub fn handle(args: &RouteArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let from = match args.from {
        Some(from) => from,
        None => match ctx.store.state().location_history.first() {
            Some(last) => LatLng {
                lat: last.lat,
                lng: last.lng,
            },
            None => bail!("no starting point: pass --from or record one with `genie map locate`"),
        },
    };
    output(&estimate_route(from, args.to, args.mode), flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use genie_core::enums::VehicleMode;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            state: None,
        }
    }

    fn args(from: Option<LatLng>) -> RouteArgs {
        RouteArgs {
            to: LatLng { lat: 28.6129, lng: 77.2295 },
            from,
            mode: VehicleMode::Bike,
        }
    }

    #[test]
    fn needs_a_starting_point() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::in_dir(dir.path());
        assert!(handle(&args(None), &ctx, &flags()).is_err());
    }

    #[test]
    fn falls_back_to_last_recorded_location() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = AppContext::in_dir(dir.path());
        ctx.store.add_location_history(LatLng::DEFAULT_CENTER);
        assert!(handle(&args(None), &ctx, &flags()).is_ok());
        assert!(handle(&args(Some(LatLng::DEFAULT_CENTER)), &ctx, &flags()).is_ok());
    }
}
