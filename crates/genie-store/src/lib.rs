//! # genie-store
//!
//! The Travel Genie client state store.
//!
//! A flat state with simple setters, grouped by concern:
//! - theme, session, emergency, location history, compass, chat ([`AppStore`])
//! - map view: center, markers, saved places, search (`places`)
//! - group checklists, including applying updates received from the relay (`checklists`)
//! - travel documents and itineraries (`trips`)
//!
//! A subset of the state ([`PersistedState`]) survives restarts in a JSON
//! file; everything else lives for one session.

mod checklists;
mod error;
mod places;
mod state;
mod store;
mod trips;

pub use error::StoreError;
pub use state::{AppState, DEFAULT_ZOOM, PersistedState};
pub use store::AppStore;
