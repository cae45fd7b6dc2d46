use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DocumentKind;
use crate::errors::CoreError;
use crate::ids::{self, PREFIX_DOCUMENT};

/// A travel document kept on the device: passport details, tickets, bookings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: DocumentKind,
    /// Booking reference, passport number and the like.
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
    pub added_at: DateTime<Utc>,
}

impl TravelDocument {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `title` is blank.
    pub fn new(title: &str, kind: DocumentKind) -> Result<Self, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation(
                "document title must not be blank".into(),
            ));
        }
        Ok(Self {
            id: ids::generate_id(PREFIX_DOCUMENT),
            title: title.to_string(),
            kind,
            reference: None,
            expires_on: None,
            added_at: Utc::now(),
        })
    }

    #[must_use]
    pub fn with_reference(mut self, reference: Option<&str>) -> Self {
        self.reference = reference
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(ToOwned::to_owned);
        self
    }

    #[must_use]
    pub const fn with_expiry(mut self, expires_on: Option<NaiveDate>) -> Self {
        self.expires_on = expires_on;
        self
    }

    /// Whether the document is no longer valid on `today`. Documents without
    /// an expiry date never expire.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expires_on.is_some_and(|date| date < today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = TravelDocument::new("   ", DocumentKind::Passport).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn blank_reference_is_dropped() {
        let doc = TravelDocument::new("Flight DEL-GOI", DocumentKind::Ticket)
            .unwrap()
            .with_reference(Some("  "));
        assert_eq!(doc.reference, None);
        assert!(doc.id.starts_with("doc-"));
    }

    #[test]
    fn expiry_is_checked_against_today() {
        let passport = TravelDocument::new("Passport", DocumentKind::Passport)
            .unwrap()
            .with_reference(Some("Z1234567"))
            .with_expiry(Some(date(2030, 6, 30)));
        assert!(!passport.is_expired(date(2030, 6, 30)));
        assert!(passport.is_expired(date(2030, 7, 1)));

        let booking = TravelDocument::new("Hotel", DocumentKind::Booking).unwrap();
        assert!(!booking.is_expired(date(2099, 1, 1)));
    }
}
