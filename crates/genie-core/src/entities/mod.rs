//! Entity structs for the Travel Genie client state.
//!
//! Field names serialize in camelCase so the same JSON travels between the
//! web client, the relay and the store file.

mod chat;
mod checklist;
mod contact;
mod document;
mod itinerary;
mod location;
mod notification;
mod place;
mod user;

pub use chat::ChatMessage;
pub use checklist::{Checklist, ChecklistItem};
pub use contact::EmergencyContact;
pub use document::TravelDocument;
pub use itinerary::Itinerary;
pub use location::{LOCATION_HISTORY_LIMIT, LocationRecord};
pub use notification::Notification;
pub use place::{GeocodedPlace, LatLng, Marker, SavedPlace};
pub use user::{ANONYMOUS, UserProfile};
