//! Emergency Dispatch Decision Engine — deterministic, rule-based.
//!
//! Ingests emergency call records, classifies them by ordered keyword rules,
//! scores severity, derives a triage priority, computes a resource allocation
//! with cost and dispatch order, and tracks each incident's lifecycle in an
//! in-memory registry.
//!
//! No AI, no DB, no network; pure computation + in-memory state.

pub mod allocate;
pub mod assess;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod intake;
pub mod registry;
pub mod types;

pub use config::Config;
pub use coordinator::Coordinator;
pub use error::EngineError;
pub use registry::IncidentRegistry;
pub use types::{CallResponse, EmergencyIncident, InboundCall};
