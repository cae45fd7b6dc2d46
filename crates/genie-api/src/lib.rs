//! # genie-api
//!
//! The `/api/*` REST surface: a health check plus placeholder routes for auth,
//! users, places, chat, itineraries and emergency features.
//!
//! Every response carries CORS headers for the configured frontend origin and
//! a fixed set of security headers. Bodies over the configured limit are
//! rejected with 413.

pub mod routes;
pub mod server;

mod error;

pub use error::ApiError;
pub use routes::{Reply, route};
pub use server::{ApiServer, ShutdownHandle};
