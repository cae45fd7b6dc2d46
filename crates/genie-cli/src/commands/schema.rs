use genie_core::entities::{Checklist, EmergencyContact, Itinerary, SavedPlace, TravelDocument};
use genie_core::protocol::{ClientFrame, ServerFrame};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `genie schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::ClientFrame => schema_for!(ClientFrame),
        SchemaType::ServerFrame => schema_for!(ServerFrame),
        SchemaType::Checklist => schema_for!(Checklist),
        SchemaType::SavedPlace => schema_for!(SavedPlace),
        SchemaType::EmergencyContact => schema_for!(EmergencyContact),
        SchemaType::TravelDocument => schema_for!(TravelDocument),
        SchemaType::Itinerary => schema_for!(Itinerary),
    };
    output(&schema, flags.format)
}
