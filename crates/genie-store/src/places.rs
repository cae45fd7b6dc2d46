//! Map view state: center, markers, saved places and search.

use genie_core::entities::{GeocodedPlace, LatLng, Marker, SavedPlace};
use genie_core::errors::CoreError;

use crate::error::StoreError;
use crate::store::AppStore;

/// Zoom levels the tile providers serve.
const MAX_ZOOM: u8 = 19;

impl AppStore {
    pub const fn set_map_center(&mut self, center: LatLng) {
        self.state.map_center = center;
    }

    /// Set the zoom level, clamped to the providers' maximum.
    pub fn set_map_zoom(&mut self, zoom: u8) {
        self.state.map_zoom = zoom.min(MAX_ZOOM);
    }

    pub const fn set_user_location(&mut self, location: Option<LatLng>) {
        self.state.user_location = location;
    }

    /// Center on the user's location, or on the fallback center when the
    /// location is unknown. Returns the new center.
    pub fn center_on_user(&mut self, fallback: LatLng) -> LatLng {
        let center = self.state.user_location.unwrap_or(fallback);
        self.state.map_center = center;
        center
    }

    pub fn add_marker(&mut self, marker: Marker) -> &Marker {
        self.state.markers.push(marker);
        &self.state.markers[self.state.markers.len() - 1]
    }

    /// Remove the marker with `id`, leaving every other marker in place.
    pub fn remove_marker(&mut self, id: &str) -> bool {
        let before = self.state.markers.len();
        self.state.markers.retain(|m| m.id != id);
        self.state.markers.len() != before
    }

    /// Flip a marker's `saved` flag and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if no marker has `id`.
    pub fn toggle_marker_saved(&mut self, id: &str) -> Result<bool, StoreError> {
        let marker = self
            .state
            .markers
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| CoreError::not_found("marker", id))?;
        marker.saved = !marker.saved;
        Ok(marker.saved)
    }

    pub fn add_saved_place(&mut self, place: SavedPlace) -> &SavedPlace {
        self.state.saved_places.push(place);
        &self.state.saved_places[self.state.saved_places.len() - 1]
    }

    pub fn remove_saved_place(&mut self, id: &str) -> bool {
        let before = self.state.saved_places.len();
        self.state.saved_places.retain(|p| p.id != id);
        self.state.saved_places.len() != before
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.state.search_query = query.to_string();
    }

    pub fn set_search_results(&mut self, results: Vec<GeocodedPlace>) {
        self.state.search_results = results;
    }

    /// Move the map to a search hit and clear the search box and results.
    pub fn select_search_result(&mut self, result: &GeocodedPlace) {
        self.state.map_center = result.position();
        self.state.search_results.clear();
        self.state.search_query.clear();
    }
}
