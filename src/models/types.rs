//! Domain records held by the contact service.
//!
//! Field names serialize in camelCase because the site frontend consumes
//! these records verbatim. Pass-through quote fields are kept as raw
//! `serde_json::Value` so whatever the form sent is what gets stored.

use serde::Serialize;
use serde_json::Value;

/// Which request store a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Consultation,
    Quote,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consultation => "Consultation request",
            Self::Quote => "Quote request",
        }
    }
}

/// Lifecycle state of an inbound request.
///
/// New submissions start out pending; nothing in this service
/// transitions them further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

/// A lightweight inbound inquiry: who is asking, and about what.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Defaults to "Not specified" when the form omits it.
    pub company: String,
    pub message: String,
    /// Defaults to "General inquiry" when the form omits it.
    pub service_interest: String,
    /// ISO-8601 creation time, UTC.
    pub timestamp: String,
    pub status: RequestStatus,
}

/// A richer inquiry with selected services and project sizing fields,
/// used to open a pricing conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub company: String,
    /// Defaults to "Not provided" when the form omits it.
    pub phone: String,
    /// Defaults to "No additional details provided" when the form omits it.
    pub message: String,
    /// Non-empty, in the order the form sent them.
    pub selected_services: Vec<String>,
    pub project_details: ProjectDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_total: Option<Value>,
    /// ISO-8601 creation time, UTC.
    pub timestamp: String,
    pub status: RequestStatus,
}

/// Sizing fields captured verbatim from the quote form.
///
/// None of these are validated; fields absent from the form stay absent
/// in the stored record and its serialization.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_support: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_training: Option<Value>,
}
