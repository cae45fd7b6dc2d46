use anyhow::Context;
use genie_core::entities::{GeocodedPlace, Marker, SavedPlace};
use genie_geo::GeoClient;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    query: String,
    results: Vec<GeocodedPlace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<SavedPlace>,
}

/// Handle `genie search`.
pub async fn handle(
    args: &SearchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = GeoClient::new(&ctx.config.geocoding)?;
    let limit = args.limit.unwrap_or_else(|| client.default_limit());

    let spinner = Progress::spinner(&format!("searching for '{}'", args.query));
    let results = match client.search(&args.query, limit).await {
        Ok(results) => {
            spinner.finish_clear();
            results
        }
        Err(error) => {
            spinner.finish_err("search failed");
            return Err(error).context("geocoding search failed");
        }
    };

    ctx.store.set_search_query(&args.query);
    ctx.store.set_search_results(results.clone());

    let saved = match results.first() {
        Some(first) if args.save => Some(save_result(ctx, first)?),
        _ => None,
    };
    if args.save && saved.is_none() {
        tracing::warn!(query = %args.query, "no results to save");
    }
    ctx.save()?;

    output(
        &SearchResponse {
            query: args.query.clone(),
            results,
            saved,
        },
        flags.format,
    )
}

/// Pin the hit on the map, mark the pin saved and keep it as a saved place.
fn save_result(ctx: &mut AppContext, hit: &GeocodedPlace) -> anyhow::Result<SavedPlace> {
    let title = short_title(&hit.display_name);
    ctx.store.select_search_result(hit);
    let marker_id = ctx.store.add_marker(Marker::new(hit.position(), title)).id.clone();
    ctx.store.toggle_marker_saved(&marker_id)?;
    Ok(ctx
        .store
        .add_saved_place(SavedPlace::new(hit.position(), title, &hit.display_name))
        .clone())
}

/// First component of a Nominatim display name.
fn short_title(display_name: &str) -> &str {
    display_name.split(',').next().unwrap_or(display_name).trim()
}

#[cfg(test)]
mod tests {
    use super::short_title;

    #[test]
    fn short_title_takes_first_component() {
        assert_eq!(short_title("India Gate, Kartavya Path, New Delhi, India"), "India Gate");
        assert_eq!(short_title("Goa"), "Goa");
    }
}
