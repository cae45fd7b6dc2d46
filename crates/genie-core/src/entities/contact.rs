use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ContactKind;
use crate::ids::{self, PREFIX_CONTACT};

/// A number to call in an emergency.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub number: String,
    pub kind: ContactKind,
}

impl EmergencyContact {
    #[must_use]
    pub fn new(name: &str, number: &str, kind: ContactKind) -> Self {
        Self {
            id: ids::generate_id(PREFIX_CONTACT),
            name: name.to_string(),
            number: number.to_string(),
            kind,
        }
    }

    /// Contacts every fresh store starts with.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Police", "100", ContactKind::Police),
            Self::new("Hospital", "108", ContactKind::Medical),
            Self::new("Fire", "101", ContactKind::Fire),
        ]
    }
}
