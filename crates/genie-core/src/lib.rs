//! # genie-core
//!
//! Core types, ID generation, and error types for Travel Genie.
//!
//! This crate provides the foundational types shared across all Genie crates:
//! - Entity structs for the client state (checklists, markers, saved places, contacts,
//!   documents, itineraries, chat)
//! - Checklist mutation rules (toggle stamping, last-write-wins remote updates)
//! - ID prefix constants and share token generation
//! - The realtime relay wire protocol, including the composed panic alert
//! - The `{success, message, data}` API envelope
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod envelope;
pub mod errors;
pub mod ids;
pub mod protocol;
