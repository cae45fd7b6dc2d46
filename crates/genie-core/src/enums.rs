//! Travel modes, map styles, contact and document kinds, chat roles and checklist actions.
//!
//! All enums serialize lowercase and parse back from the same strings so the
//! CLI can accept them as arguments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// VehicleMode
// ---------------------------------------------------------------------------

/// How the traveller moves between two points. Drives the route estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VehicleMode {
    Car,
    Bike,
    Walk,
}

impl VehicleMode {
    /// Average speed in km/h used for the travel time estimate.
    #[must_use]
    pub const fn speed_kmh(self) -> f64 {
        match self {
            Self::Car => 50.0,
            Self::Bike => 25.0,
            Self::Walk => 5.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Bike => "bike",
            Self::Walk => "walk",
        }
    }
}

impl fmt::Display for VehicleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car" => Ok(Self::Car),
            "bike" => Ok(Self::Bike),
            "walk" => Ok(Self::Walk),
            other => Err(CoreError::Validation(format!(
                "unknown vehicle mode '{other}' (expected car, bike or walk)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// MapStyle
// ---------------------------------------------------------------------------

/// Base layer of the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Streets,
    Satellite,
    Terrain,
}

impl MapStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Streets => "streets",
            Self::Satellite => "satellite",
            Self::Terrain => "terrain",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "streets" => Ok(Self::Streets),
            "satellite" => Ok(Self::Satellite),
            "terrain" => Ok(Self::Terrain),
            other => Err(CoreError::Validation(format!("unknown map style '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// ContactKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Police,
    Medical,
    Fire,
    Personal,
}

impl ContactKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Police => "police",
            Self::Medical => "medical",
            Self::Fire => "fire",
            Self::Personal => "personal",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "police" => Ok(Self::Police),
            "medical" => Ok(Self::Medical),
            "fire" => Ok(Self::Fire),
            "personal" => Ok(Self::Personal),
            other => Err(CoreError::Validation(format!(
                "unknown contact kind '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// DocumentKind
// ---------------------------------------------------------------------------

/// What a stored travel document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Passport,
    Visa,
    Ticket,
    Booking,
    Insurance,
    #[default]
    Other,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passport => "passport",
            Self::Visa => "visa",
            Self::Ticket => "ticket",
            Self::Booking => "booking",
            Self::Insurance => "insurance",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "passport" => Ok(Self::Passport),
            "visa" => Ok(Self::Visa),
            "ticket" => Ok(Self::Ticket),
            "booking" => Ok(Self::Booking),
            "insurance" => Ok(Self::Insurance),
            "other" => Ok(Self::Other),
            other => Err(CoreError::Validation(format!(
                "unknown document kind '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ChatRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

// ---------------------------------------------------------------------------
// ItemAction
// ---------------------------------------------------------------------------

/// What happened to the item carried by a `checklist-update` event.
///
/// Receivers apply every action last-write-wins: there is no merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemAction {
    Added,
    #[default]
    Toggled,
    Removed,
}

impl ItemAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Toggled => "toggled",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
