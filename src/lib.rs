//! Contact API library.
//!
//! Backend for the NeuraLink AI marketing site's contact page:
//! - Static company contact information
//! - Consultation request intake with field and email validation
//! - Quote request intake with service selection and project sizing
//!
//! Accepted submissions are held in process memory for the lifetime of
//! the server; nothing is persisted.

pub mod api;
pub mod config;
pub mod models;
pub mod store;

pub use api::create_router;
pub use api::handlers::AppState;
pub use config::{ContactInfo, ServerConfig};
pub use models::{
    ConsultationRequest, ContactError, ContactResult, QuoteRequest, RequestKind, RequestStatus,
};
pub use store::RequestStore;
