//! Core library for AgroChain
//!
//! This crate defines the route table, form schemas, dashboard and journey
//! state, notifications, and the static sample data shown on every page.
//! It performs no I/O; the `server` crate renders everything it exposes.

pub mod certificates;
pub mod error;
pub mod form;
pub mod journey;
pub mod notifications;
pub mod roles;
pub mod routes;
pub mod schema;

// Re-exports
pub use certificates::{lookup_certificate, recent_inspections, CertificateLookup, InspectionRecord};
pub use error::{Error, Result, SubmitError};
pub use form::{FormRecord, RoleDashboard};
pub use journey::{
    journey_stages, JourneyStage, JourneyView, JourneyViewer, StageStatus, SAMPLE_IDENTIFIER,
    SAMPLE_PRODUCT,
};
pub use notifications::{Notification, NotificationLevel};
pub use roles::{Role, RoleDefinition, RoleSummary, Tone};
pub use routes::Route;
pub use schema::{FieldKind, FieldSpec, SelectOption};
