//! Tile layer URLs.

use genie_core::enums::MapStyle;

const OSM_STREETS: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const CARTO_DARK: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
const ARCGIS_IMAGERY: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
const OPEN_TOPO: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";

/// Tile URL template for `style`. Only the street layer has a dark variant.
#[must_use]
pub const fn tile_url(style: MapStyle, dark_mode: bool) -> &'static str {
    match (style, dark_mode) {
        (MapStyle::Streets, false) => OSM_STREETS,
        (MapStyle::Streets, true) => CARTO_DARK,
        (MapStyle::Satellite, _) => ARCGIS_IMAGERY,
        (MapStyle::Terrain, _) => OPEN_TOPO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_mode_only_changes_streets() {
        assert_ne!(
            tile_url(MapStyle::Streets, false),
            tile_url(MapStyle::Streets, true)
        );
        assert_eq!(
            tile_url(MapStyle::Satellite, false),
            tile_url(MapStyle::Satellite, true)
        );
        assert!(tile_url(MapStyle::Terrain, true).contains("opentopomap"));
    }
}
