use std::fs;
use std::path::{Path, PathBuf};

use genie_core::entities::{
    ANONYMOUS, ChatMessage, EmergencyContact, LOCATION_HISTORY_LIMIT, LatLng, LocationRecord,
    Notification, UserProfile,
};
use genie_core::enums::ChatRole;
use genie_core::protocol::EmergencyAlert;

use crate::error::StoreError;
use crate::state::{AppState, PersistedState};

/// Client state with simple setters, optionally backed by a JSON file.
///
/// Setters only touch memory; call [`AppStore::save`] to write the persisted
/// subset.
#[derive(Debug, Default)]
pub struct AppStore {
    pub(crate) state: AppState,
    path: Option<PathBuf>,
}

impl AppStore {
    /// A store that is never written to disk.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store backed by `path`. A missing file yields a fresh state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read and
    /// [`StoreError::Corrupt`] if it does not parse.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = read_persisted(&path)?.map(AppState::from).unwrap_or_default();
        Ok(Self {
            state,
            path: Some(path),
        })
    }

    /// Re-read the persisted subset from disk, keeping session-only state.
    ///
    /// Long-running commands call this before a mutation so that a later
    /// [`AppStore::save`] does not overwrite what other processes wrote in
    /// the meantime. Does nothing for in-memory stores.
    ///
    /// # Errors
    ///
    /// Same as [`AppStore::open`].
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let persisted = read_persisted(path)?
            .unwrap_or_else(|| PersistedState::from(&AppState::default()));
        self.state.restore(persisted);
        Ok(())
    }

    /// Write the persisted subset. Does nothing for in-memory stores.
    ///
    /// The file is replaced atomically via a sibling temp file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or any filesystem step fails.
    pub fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let bytes = serde_json::to_vec_pretty(&PersistedState::from(&self.state))?;
        let tmp = tmp_path(path);
        fs::write(&tmp, bytes).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "saved client state");
        Ok(())
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Name stamped on edits: the signed-in username or `Anonymous`.
    #[must_use]
    pub fn actor(&self) -> String {
        self.state
            .user
            .as_ref()
            .map_or_else(|| ANONYMOUS.to_string(), |u| u.username.clone())
    }

    // ── Theme ──────────────────────────────────────────────────────

    /// Flip dark mode and return the new value.
    pub const fn toggle_dark_mode(&mut self) -> bool {
        self.state.dark_mode = !self.state.dark_mode;
        self.state.dark_mode
    }

    // ── Session ────────────────────────────────────────────────────

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.state.is_authenticated = user.is_some();
        self.state.is_guest = user.is_none();
        self.state.user = user;
    }

    pub fn logout(&mut self) {
        self.set_user(None);
    }

    // ── Emergency ──────────────────────────────────────────────────

    pub fn add_emergency_contact(&mut self, contact: EmergencyContact) -> &EmergencyContact {
        self.state.emergency_contacts.push(contact);
        &self.state.emergency_contacts[self.state.emergency_contacts.len() - 1]
    }

    /// Remove the contact with `id`. Returns whether one was removed.
    pub fn remove_emergency_contact(&mut self, id: &str) -> bool {
        let before = self.state.emergency_contacts.len();
        self.state.emergency_contacts.retain(|c| c.id != id);
        self.state.emergency_contacts.len() != before
    }

    pub const fn toggle_panic_mode(&mut self) -> bool {
        self.state.panic_mode = !self.state.panic_mode;
        self.state.panic_mode
    }

    /// Switch panic mode on and compose the alert to broadcast.
    ///
    /// The alert is placed at `position`, else the known user location, else
    /// the newest location history entry.
    pub fn activate_panic(&mut self, position: Option<LatLng>) -> EmergencyAlert {
        self.state.panic_mode = true;
        let position = position.or(self.state.user_location).or_else(|| {
            self.state
                .location_history
                .first()
                .map(|r| LatLng { lat: r.lat, lng: r.lng })
        });
        tracing::warn!(user = %self.actor(), located = position.is_some(), "panic mode activated");
        EmergencyAlert::panic(&self.actor(), position)
    }

    // ── Notifications ──────────────────────────────────────────────

    pub fn add_notification(&mut self, notification: Notification) -> &Notification {
        self.state.notifications.push(notification);
        &self.state.notifications[self.state.notifications.len() - 1]
    }

    pub fn remove_notification(&mut self, id: &str) -> bool {
        let before = self.state.notifications.len();
        self.state.notifications.retain(|n| n.id != id);
        self.state.notifications.len() != before
    }

    // ── Location history ───────────────────────────────────────────

    /// Record a position at the front of the history, dropping the oldest
    /// entries beyond the limit.
    pub fn add_location_history(&mut self, position: LatLng) -> &LocationRecord {
        self.state
            .location_history
            .insert(0, LocationRecord::new(position));
        self.state.location_history.truncate(LOCATION_HISTORY_LIMIT);
        &self.state.location_history[0]
    }

    // ── Compass ────────────────────────────────────────────────────

    pub const fn toggle_compass(&mut self) -> bool {
        self.state.compass_enabled = !self.state.compass_enabled;
        self.state.compass_enabled
    }

    /// Heading in degrees, normalized into `0..360`.
    pub fn set_device_orientation(&mut self, degrees: f64) {
        self.state.device_orientation = degrees.rem_euclid(360.0);
    }

    // ── Chat ───────────────────────────────────────────────────────

    pub fn add_chat_message(&mut self, role: ChatRole, text: &str) -> &ChatMessage {
        self.state.chat_messages.push(ChatMessage::new(role, text));
        &self.state.chat_messages[self.state.chat_messages.len() - 1]
    }

    pub fn clear_chat_messages(&mut self) {
        self.state.chat_messages.clear();
    }

    // ── Connectivity ───────────────────────────────────────────────

    pub const fn set_online_status(&mut self, online: bool) {
        self.state.online = online;
    }
}

/// Read the state file. `None` when it does not exist yet.
fn read_persisted(path: &Path) -> Result<Option<PersistedState>, StoreError> {
    match fs::read(path) {
        Ok(bytes) => {
            let persisted =
                serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                    path: path.to_path_buf(),
                    source,
                })?;
            tracing::debug!(path = %path.display(), "loaded client state");
            Ok(Some(persisted))
        }
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no state file; starting fresh");
            Ok(None)
        }
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
