//! Travel documents and itineraries.

use genie_core::entities::{Itinerary, TravelDocument};
use genie_core::errors::CoreError;

use crate::error::StoreError;
use crate::store::AppStore;

impl AppStore {
    pub fn add_document(&mut self, document: TravelDocument) -> &TravelDocument {
        self.state.documents.push(document);
        &self.state.documents[self.state.documents.len() - 1]
    }

    pub fn remove_document(&mut self, id: &str) -> bool {
        let before = self.state.documents.len();
        self.state.documents.retain(|d| d.id != id);
        self.state.documents.len() != before
    }

    pub fn add_itinerary(&mut self, itinerary: Itinerary) -> &Itinerary {
        tracing::debug!(id = %itinerary.id, destination = %itinerary.destination, "added itinerary");
        self.state.itineraries.push(itinerary);
        &self.state.itineraries[self.state.itineraries.len() - 1]
    }

    /// Remove an itinerary, clearing the current selection if it pointed there.
    pub fn remove_itinerary(&mut self, id: &str) -> bool {
        let before = self.state.itineraries.len();
        self.state.itineraries.retain(|i| i.id != id);
        if self.state.current_itinerary_id.as_deref() == Some(id) {
            self.state.current_itinerary_id = None;
        }
        self.state.itineraries.len() != before
    }

    /// Select the itinerary the trip views follow, or clear the selection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if no itinerary has `id`.
    pub fn set_current_itinerary(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        if let Some(id) = id
            && !self.state.itineraries.iter().any(|i| i.id == id)
        {
            return Err(CoreError::not_found("itinerary", id).into());
        }
        self.state.current_itinerary_id = id.map(ToOwned::to_owned);
        Ok(())
    }

    #[must_use]
    pub fn current_itinerary(&self) -> Option<&Itinerary> {
        let id = self.state.current_itinerary_id.as_deref()?;
        self.state.itineraries.iter().find(|i| i.id == id)
    }
}
