//! Nominatim search.

use genie_core::entities::GeocodedPlace;

use crate::{GeoClient, error::GeoError, http::check_response};

/// Largest `limit` Nominatim honours.
const MAX_LIMIT: usize = 40;

#[derive(serde::Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    importance: Option<f64>,
}

impl TryFrom<NominatimPlace> for GeocodedPlace {
    type Error = GeoError;

    fn try_from(place: NominatimPlace) -> Result<Self, Self::Error> {
        let coord = |value: &str, axis: &str| {
            value
                .parse::<f64>()
                .map_err(|e| GeoError::Parse(format!("{axis} '{value}': {e}")))
        };
        Ok(Self {
            lat: coord(&place.lat, "lat")?,
            lng: coord(&place.lon, "lon")?,
            display_name: place.display_name,
            kind: place.kind,
            importance: place.importance,
        })
    }
}

impl GeoClient {
    /// Search for places matching `query`, taking at most `limit` results.
    ///
    /// A blank query returns no results without contacting the service.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the request fails, the service returns a
    /// non-success status, or a result has unparseable coordinates.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<GeocodedPlace>, GeoError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.search_url(query, limit);
        tracing::debug!(%url, "geocoding search");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let places: Vec<NominatimPlace> = resp.json().await?;
        let results = parse_places(places)?;
        tracing::debug!(query, count = results.len(), "geocoding results");
        Ok(results)
    }

    fn search_url(&self, query: &str, limit: usize) -> String {
        let limit = limit.clamp(1, MAX_LIMIT);
        format!(
            "{}/search?format=json&q={}&limit={limit}&addressdetails=1",
            self.endpoint,
            urlencoding::encode(query)
        )
    }
}

fn parse_places(places: Vec<NominatimPlace>) -> Result<Vec<GeocodedPlace>, GeoError> {
    places.into_iter().map(GeocodedPlace::try_from).collect()
}
