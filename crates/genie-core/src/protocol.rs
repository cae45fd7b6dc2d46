//! Realtime relay wire protocol.
//!
//! Every frame is one JSON object on its own line:
//!
//! ```text
//! {"event":"join-checklist","data":{"checklistId":"chk-1a2b3c4d5e6f"}}
//! {"event":"checklist-update","data":{"checklistId":"chk-…","action":"toggled","item":{…}}}
//! ```
//!
//! | client sends       | relay emits          | recipients                         |
//! |--------------------|----------------------|------------------------------------|
//! | `join-checklist`   | -                    | -                                  |
//! | `leave-checklist`  | -                    | -                                  |
//! | `checklist-update` | `checklist-updated`  | channel members except the sender  |
//! | `share-location`   | `location-shared`    | every session except the sender    |
//! | `emergency-alert`  | `emergency-alert`    | every session, sender included     |

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChecklistItem, LatLng};
use crate::enums::ItemAction;

/// Name of the broadcast channel for one checklist.
#[must_use]
pub fn channel_name(checklist_id: &str) -> String {
    format!("checklist-{checklist_id}")
}

/// Frames a client sends to the relay.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientFrame {
    JoinChecklist(ChannelRef),
    LeaveChecklist(ChannelRef),
    ChecklistUpdate(ChecklistUpdate),
    ShareLocation(LocationShare),
    EmergencyAlert(EmergencyAlert),
}

impl ClientFrame {
    /// Wire name of the event.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::JoinChecklist(_) => "join-checklist",
            Self::LeaveChecklist(_) => "leave-checklist",
            Self::ChecklistUpdate(_) => "checklist-update",
            Self::ShareLocation(_) => "share-location",
            Self::EmergencyAlert(_) => "emergency-alert",
        }
    }
}

/// Frames the relay sends to a client.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerFrame {
    Connected(SessionInfo),
    ChecklistUpdated(ChecklistUpdate),
    LocationShared(LocationShare),
    EmergencyAlert(EmergencyAlert),
    Error(ErrorFrame),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRef {
    pub checklist_id: String,
}

/// A mutated checklist item, addressed to the checklist's channel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistUpdate {
    pub checklist_id: String,
    #[serde(default)]
    pub action: ItemAction,
    pub item: ChecklistItem,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationShare {
    pub user: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub shared_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyAlert {
    pub user: String,
    pub message: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl EmergencyAlert {
    /// The alert raised by panic mode, stamped with the current time.
    #[must_use]
    pub fn panic(user: &str, position: Option<LatLng>) -> Self {
        Self::panic_at(user, position, Utc::now())
    }

    /// The panic alert text: where, when and a maps link, in the wording of
    /// the emergency email template.
    #[must_use]
    pub fn panic_at(user: &str, position: Option<LatLng>, at: DateTime<Utc>) -> Self {
        let (location, map_link) = position.map_or_else(
            || ("Location unavailable".to_string(), "N/A".to_string()),
            |p| {
                (
                    format!("{}, {}", p.lat, p.lng),
                    format!("https://maps.google.com?q={},{}", p.lat, p.lng),
                )
            },
        );
        let message = format!(
            "This is an emergency alert from Travel Genie.\n\n\
             Location: {location}\n\
             Time: {time}\n\
             Map Link: {map_link}\n\n\
             Please send help immediately.\n\n\
             This message was sent automatically by Travel Genie Emergency System.",
            time = at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
        Self {
            user: user.to_string(),
            message,
            lat: position.map(|p| p.lat),
            lng: position.map(|p| p.lng),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorFrame {
    pub message: String,
}
