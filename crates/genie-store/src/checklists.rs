//! Group checklist operations.
//!
//! Every mutation returns the [`ChecklistUpdate`] a caller would emit on the
//! relay so other members see the change.

use genie_core::entities::Checklist;
use genie_core::enums::ItemAction;
use genie_core::errors::CoreError;
use genie_core::protocol::ChecklistUpdate;

use crate::error::StoreError;
use crate::store::AppStore;

impl AppStore {
    #[must_use]
    pub fn checklist(&self, id: &str) -> Option<&Checklist> {
        self.state.checklists.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn find_checklist_by_share_id(&self, share_id: &str) -> Option<&Checklist> {
        self.state.checklists.iter().find(|c| c.share_id == share_id)
    }

    /// Create a checklist owned by the current actor. New lists go first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if `name` is blank.
    pub fn create_checklist(&mut self, name: &str) -> Result<&Checklist, StoreError> {
        let checklist = Checklist::new(name, &self.actor())?;
        tracing::debug!(id = %checklist.id, share_id = %checklist.share_id, "created checklist");
        self.state.checklists.insert(0, checklist);
        Ok(&self.state.checklists[0])
    }

    /// Delete a checklist and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if no checklist has `id`.
    pub fn delete_checklist(&mut self, id: &str) -> Result<Checklist, StoreError> {
        let index = self
            .state
            .checklists
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| checklist_not_found(id))?;
        Ok(self.state.checklists.remove(index))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if the checklist is unknown or `text` is blank.
    pub fn add_checklist_item(
        &mut self,
        checklist_id: &str,
        text: &str,
    ) -> Result<ChecklistUpdate, StoreError> {
        let actor = self.actor();
        let checklist = self.checklist_mut(checklist_id)?;
        let item = checklist.add_item(text, &actor)?.clone();
        Ok(ChecklistUpdate {
            checklist_id: checklist_id.to_string(),
            action: ItemAction::Added,
            item,
        })
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if the checklist or item is unknown.
    pub fn toggle_checklist_item(
        &mut self,
        checklist_id: &str,
        item_id: &str,
    ) -> Result<ChecklistUpdate, StoreError> {
        let actor = self.actor();
        let checklist = self.checklist_mut(checklist_id)?;
        let item = checklist.toggle_item(item_id, &actor)?.clone();
        Ok(ChecklistUpdate {
            checklist_id: checklist_id.to_string(),
            action: ItemAction::Toggled,
            item,
        })
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if the checklist or item is unknown.
    pub fn remove_checklist_item(
        &mut self,
        checklist_id: &str,
        item_id: &str,
    ) -> Result<ChecklistUpdate, StoreError> {
        let checklist = self.checklist_mut(checklist_id)?;
        let item = checklist.remove_item(item_id)?;
        Ok(ChecklistUpdate {
            checklist_id: checklist_id.to_string(),
            action: ItemAction::Removed,
            item,
        })
    }

    /// Add the current actor to the checklist behind `share_id`.
    ///
    /// Only checklists already in this store can be joined: a share link
    /// carries no data of its own.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if no local checklist has `share_id`.
    pub fn join_checklist(&mut self, share_id: &str) -> Result<&Checklist, StoreError> {
        let actor = self.actor();
        let checklist = self
            .state
            .checklists
            .iter_mut()
            .find(|c| c.share_id == share_id)
            .ok_or_else(|| CoreError::not_found("shared checklist", share_id))?;
        checklist.add_member(&actor);
        Ok(checklist)
    }

    /// Apply an update received from the relay. Returns `false` when the
    /// checklist is not known locally.
    pub fn apply_remote_update(&mut self, update: &ChecklistUpdate) -> bool {
        self.state
            .checklists
            .iter_mut()
            .find(|c| c.id == update.checklist_id)
            .is_some_and(|c| c.apply_update(update))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if no checklist has `id`.
    pub fn completion_percentage(&self, id: &str) -> Result<u8, StoreError> {
        self.checklist(id)
            .map(Checklist::completion_percentage)
            .ok_or_else(|| checklist_not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Core`] if no checklist has `id`.
    pub fn share_url(&self, id: &str, origin: &str) -> Result<String, StoreError> {
        self.checklist(id)
            .map(|c| c.share_url(origin))
            .ok_or_else(|| checklist_not_found(id))
    }

    fn checklist_mut(&mut self, id: &str) -> Result<&mut Checklist, StoreError> {
        self.state
            .checklists
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| checklist_not_found(id))
    }
}

fn checklist_not_found(id: &str) -> StoreError {
    StoreError::Core(CoreError::not_found("checklist", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use genie_core::entities::UserProfile;
    use pretty_assertions::assert_eq;

    fn store_with_list() -> (AppStore, String) {
        let mut store = AppStore::in_memory();
        store.set_user(Some(UserProfile::new("sarah_travels")));
        let id = store.create_checklist("Beach Trip Essentials").unwrap().id.clone();
        (store, id)
    }

    #[test]
    fn new_checklists_go_first() {
        let (mut store, first) = store_with_list();
        let second = store.create_checklist("Trek").unwrap().id.clone();
        let ids: Vec<&str> = store.state().checklists.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);
    }

    #[test]
    fn toggle_returns_update_stamped_with_actor() {
        let (mut store, id) = store_with_list();
        let added = store.add_checklist_item(&id, "Sunscreen SPF 50+").unwrap();
        assert_eq!(added.action, ItemAction::Added);
        assert_eq!(added.item.added_by, "sarah_travels");

        let update = store.toggle_checklist_item(&id, &added.item.id).unwrap();
        assert_eq!(update.action, ItemAction::Toggled);
        assert!(update.item.completed);
        assert_eq!(update.item.completed_by.as_deref(), Some("sarah_travels"));
        assert!(update.item.completed_at.is_some());
    }

    #[test]
    fn unknown_checklist_is_not_found() {
        let mut store = AppStore::in_memory();
        let err = store.add_checklist_item("chk-none", "x").unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::NotFound { .. })));
    }

    #[test]
    fn delete_and_remove_item() {
        let (mut store, id) = store_with_list();
        let item = store.add_checklist_item(&id, "Hat").unwrap().item;
        let removed = store.remove_checklist_item(&id, &item.id).unwrap();
        assert_eq!(removed.action, ItemAction::Removed);
        assert!(store.checklist(&id).unwrap().items.is_empty());

        store.delete_checklist(&id).unwrap();
        assert!(store.checklist(&id).is_none());
        assert!(store.delete_checklist(&id).is_err());
    }

    #[test]
    fn join_by_share_id_adds_member_once() {
        let (mut store, id) = store_with_list();
        let share_id = store.checklist(&id).unwrap().share_id.clone();
        store.set_user(Some(UserProfile::new("mike_explorer")));
        store.join_checklist(&share_id).unwrap();
        store.join_checklist(&share_id).unwrap();
        assert_eq!(
            store.checklist(&id).unwrap().members,
            vec!["sarah_travels".to_string(), "mike_explorer".to_string()]
        );
        let err = store.join_checklist("nope").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::NotFound { ref entity_type, .. }) if entity_type == "shared checklist"
        ));
    }

    #[test]
    fn remote_update_from_peer_store_applies() {
        let (mut alice, id) = store_with_list();
        let item = alice.add_checklist_item(&id, "Snorkeling gear").unwrap().item;

        // A second session holding a copy of the same list.
        let mut bob = AppStore::in_memory();
        bob.set_user(Some(UserProfile::new("jenny_wanderer")));
        bob.state.checklists.push(alice.checklist(&id).unwrap().clone());

        let update = bob.toggle_checklist_item(&id, &item.id).unwrap();
        assert!(alice.apply_remote_update(&update));
        let local = &alice.checklist(&id).unwrap().items[0];
        assert!(local.completed);
        assert_eq!(local.completed_by.as_deref(), Some("jenny_wanderer"));

        let mut stranger = AppStore::in_memory();
        assert!(!stranger.apply_remote_update(&update));
    }

    #[test]
    fn share_url_and_completion() {
        let (mut store, id) = store_with_list();
        let item = store.add_checklist_item(&id, "Towel").unwrap().item;
        assert_eq!(store.completion_percentage(&id).unwrap(), 0);
        store.toggle_checklist_item(&id, &item.id).unwrap();
        assert_eq!(store.completion_percentage(&id).unwrap(), 100);

        let url = store.share_url(&id, "http://localhost:5173").unwrap();
        assert!(url.starts_with("http://localhost:5173/group/shared/"));
    }
}
