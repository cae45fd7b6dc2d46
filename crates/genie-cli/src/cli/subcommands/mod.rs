mod checklist;
mod contact;
mod document;
mod itinerary;
mod map;
mod place;
mod prefs;

pub use checklist::ChecklistCommands;
pub use contact::ContactCommands;
pub use document::DocumentCommands;
pub use itinerary::ItineraryCommands;
pub use map::MapCommands;
pub use place::PlaceCommands;
pub use prefs::PrefsCommands;
