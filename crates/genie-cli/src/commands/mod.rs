pub mod alert;
pub mod checklist;
pub mod contact;
pub mod dispatch;
pub mod document;
pub mod itinerary;
pub mod map;
pub mod place;
pub mod prefs;
pub mod relay;
pub mod route;
pub mod schema;
pub mod search;
pub mod serve;
pub mod watch;
