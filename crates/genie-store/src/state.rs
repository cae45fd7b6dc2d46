//! The flat client state and the subset that survives a restart.

use genie_core::entities::{
    ChatMessage, Checklist, EmergencyContact, GeocodedPlace, Itinerary, LatLng, LocationRecord,
    Marker, Notification, SavedPlace, TravelDocument, UserProfile,
};
use serde::{Deserialize, Serialize};

/// Zoom level of a fresh map.
pub const DEFAULT_ZOOM: u8 = 10;

/// Everything the client keeps in memory.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub dark_mode: bool,

    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_guest: bool,

    pub map_center: LatLng,
    pub map_zoom: u8,
    pub user_location: Option<LatLng>,
    pub markers: Vec<Marker>,
    pub saved_places: Vec<SavedPlace>,

    pub search_query: String,
    pub search_results: Vec<GeocodedPlace>,

    pub emergency_contacts: Vec<EmergencyContact>,
    pub panic_mode: bool,

    pub documents: Vec<TravelDocument>,

    /// Newest first.
    pub checklists: Vec<Checklist>,

    /// Newest first, capped at [`genie_core::entities::LOCATION_HISTORY_LIMIT`].
    pub location_history: Vec<LocationRecord>,

    pub compass_enabled: bool,
    pub device_orientation: f64,

    pub chat_messages: Vec<ChatMessage>,

    pub itineraries: Vec<Itinerary>,
    pub current_itinerary_id: Option<String>,

    pub notifications: Vec<Notification>,

    pub online: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            user: None,
            is_authenticated: false,
            is_guest: true,
            map_center: LatLng::DEFAULT_CENTER,
            map_zoom: DEFAULT_ZOOM,
            user_location: None,
            markers: Vec::new(),
            saved_places: Vec::new(),
            search_query: String::new(),
            search_results: Vec::new(),
            emergency_contacts: EmergencyContact::defaults(),
            panic_mode: false,
            documents: Vec::new(),
            checklists: Vec::new(),
            location_history: Vec::new(),
            compass_enabled: false,
            device_orientation: 0.0,
            chat_messages: Vec::new(),
            itineraries: Vec::new(),
            current_itinerary_id: None,
            notifications: Vec::new(),
            online: true,
        }
    }
}

/// What is written to the state file. Markers, search, chat, notifications,
/// panic mode and connectivity are session-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default = "default_guest")]
    pub is_guest: bool,
    #[serde(default)]
    pub saved_places: Vec<SavedPlace>,
    #[serde(default = "EmergencyContact::defaults")]
    pub emergency_contacts: Vec<EmergencyContact>,
    #[serde(default)]
    pub documents: Vec<TravelDocument>,
    #[serde(default)]
    pub checklists: Vec<Checklist>,
    #[serde(default)]
    pub location_history: Vec<LocationRecord>,
    #[serde(default)]
    pub compass_enabled: bool,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    /// Kept across runs so CLI commands can refer to "the current trip".
    #[serde(default)]
    pub current_itinerary_id: Option<String>,
}

const fn default_guest() -> bool {
    true
}

impl From<&AppState> for PersistedState {
    fn from(state: &AppState) -> Self {
        Self {
            dark_mode: state.dark_mode,
            user: state.user.clone(),
            is_authenticated: state.is_authenticated,
            is_guest: state.is_guest,
            saved_places: state.saved_places.clone(),
            emergency_contacts: state.emergency_contacts.clone(),
            documents: state.documents.clone(),
            checklists: state.checklists.clone(),
            location_history: state.location_history.clone(),
            compass_enabled: state.compass_enabled,
            itineraries: state.itineraries.clone(),
            current_itinerary_id: state.current_itinerary_id.clone(),
        }
    }
}

impl From<PersistedState> for AppState {
    fn from(persisted: PersistedState) -> Self {
        let mut state = Self::default();
        state.restore(persisted);
        state
    }
}

impl AppState {
    /// Overwrite the persisted fields, leaving session-only ones alone.
    pub(crate) fn restore(&mut self, persisted: PersistedState) {
        self.dark_mode = persisted.dark_mode;
        self.user = persisted.user;
        self.is_authenticated = persisted.is_authenticated;
        self.is_guest = persisted.is_guest;
        self.saved_places = persisted.saved_places;
        self.emergency_contacts = persisted.emergency_contacts;
        self.documents = persisted.documents;
        self.checklists = persisted.checklists;
        self.location_history = persisted.location_history;
        self.compass_enabled = persisted.compass_enabled;
        self.itineraries = persisted.itineraries;
        self.current_itinerary_id = persisted.current_itinerary_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_state_is_guest_with_default_contacts() {
        let state = AppState::default();
        assert!(state.is_guest);
        assert!(!state.is_authenticated);
        assert_eq!(state.map_center, LatLng::DEFAULT_CENTER);
        let names: Vec<&str> = state
            .emergency_contacts
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Police", "Hospital", "Fire"]);
    }

    #[test]
    fn session_only_fields_are_not_persisted() {
        let mut state = AppState::default();
        state.dark_mode = true;
        state.panic_mode = true;
        state.markers.push(Marker::new(LatLng::DEFAULT_CENTER, "pin"));
        state.search_query = "goa".into();
        state.notifications.push(Notification::new("Alert", "session only"));
        state
            .documents
            .push(TravelDocument::new("Passport", genie_core::enums::DocumentKind::Passport).unwrap());

        let restored = AppState::from(PersistedState::from(&state));
        assert!(restored.dark_mode);
        assert_eq!(restored.documents.len(), 1);
        assert!(restored.notifications.is_empty());
        assert!(!restored.panic_mode);
        assert!(restored.markers.is_empty());
        assert!(restored.search_query.is_empty());
    }

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let persisted: PersistedState = serde_json::from_str("{}").unwrap();
        assert!(persisted.is_guest);
        assert_eq!(persisted.emergency_contacts.len(), 3);
    }
}
