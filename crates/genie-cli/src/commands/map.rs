use genie_core::entities::{LatLng, LocationRecord};
use genie_core::enums::MapStyle;
use genie_geo::tile_url;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MapCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapView {
    center: LatLng,
    zoom: u8,
    user_location: Option<LatLng>,
    dark_mode: bool,
    tile_url: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayer {
    style: MapStyle,
    dark_mode: bool,
    url: &'static str,
}

/// Handle `genie map`.
pub fn handle(action: &MapCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MapCommands::Show => output(&view(ctx), flags.format),
        MapCommands::Locate { position } => {
            ctx.store.set_user_location(Some(*position));
            ctx.store.add_location_history(*position);
            ctx.store.center_on_user(ctx.config.map.default_center());
            ctx.save()?;
            output(&view(ctx), flags.format)
        }
        MapCommands::History { limit } => {
            let history = &ctx.store.state().location_history;
            let take = limit.unwrap_or(history.len());
            let records: Vec<&LocationRecord> = history.iter().take(take).collect();
            output(&records, flags.format)
        }
        MapCommands::Tiles { style } => {
            let dark_mode = ctx.store.state().dark_mode;
            output(
                &TileLayer {
                    style: *style,
                    dark_mode,
                    url: tile_url(*style, dark_mode),
                },
                flags.format,
            )
        }
    }
}

fn view(ctx: &AppContext) -> MapView {
    let state = ctx.store.state();
    MapView {
        center: state.map_center,
        zoom: state.map_zoom,
        user_location: state.user_location,
        dark_mode: state.dark_mode,
        tile_url: tile_url(MapStyle::Streets, state.dark_mode),
    }
}
