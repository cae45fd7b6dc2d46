use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::ids::{self, PREFIX_ITINERARY};

/// A planned trip: where to, when, and the stops in visiting order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    pub destination: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub stops: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Itinerary {
    /// Build an itinerary. Blank stops are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `title` or `destination` is blank.
    pub fn new(
        title: &str,
        destination: &str,
        stops: &[String],
        start_date: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        let title = title.trim();
        let destination = destination.trim();
        if title.is_empty() {
            return Err(CoreError::Validation(
                "itinerary title must not be blank".into(),
            ));
        }
        if destination.is_empty() {
            return Err(CoreError::Validation(
                "itinerary destination must not be blank".into(),
            ));
        }
        Ok(Self {
            id: ids::generate_id(PREFIX_ITINERARY),
            title: title.to_string(),
            destination: destination.to_string(),
            start_date,
            stops: stops
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stops_keep_order_and_skip_blanks() {
        let stops = vec!["Calangute".to_string(), " ".to_string(), "Fort Aguada".to_string()];
        let trip = Itinerary::new("Goa long weekend", "Goa", &stops, None).unwrap();
        assert_eq!(trip.stops, vec!["Calangute".to_string(), "Fort Aguada".to_string()]);
        assert!(trip.id.starts_with("itn-"));
    }

    #[test]
    fn blank_destination_is_rejected() {
        assert!(Itinerary::new("Trip", "", &[], None).is_err());
        assert!(Itinerary::new("", "Goa", &[], None).is_err());
    }
}
