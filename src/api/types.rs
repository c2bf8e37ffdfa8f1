//! API request/response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed response-time estimate quoted back on every accepted submission.
pub const ESTIMATED_RESPONSE_TIME: &str = "24 hours";

/// What happens after a quote request is accepted.
pub const QUOTE_NEXT_STEPS: [&str; 3] = [
    "Our team will review your requirements",
    "We will prepare a detailed proposal",
    "You will receive a personalized quote via email",
];

// ============================================
// Consultation Requests
// ============================================

/// Consultation form body. Everything is optional at the wire level;
/// the handler decides what is required so that a missing field produces
/// the API's own 400 rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    pub service_interest: Option<String>,
}

/// 201 body for an accepted consultation submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub message: &'static str,
    pub request_id: u64,
    pub estimated_response_time: &'static str,
}

// ============================================
// Quote Requests
// ============================================

/// Quote form body. The sizing fields are raw `Value`s: they are stored
/// as sent, whatever their JSON type.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub selected_services: Option<Vec<String>>,
    pub project_scope: Option<Value>,
    pub team_size: Option<Value>,
    pub urgency: Option<Value>,
    pub include_support: Option<Value>,
    pub include_training: Option<Value>,
    pub estimated_total: Option<Value>,
}

/// 201 body for an accepted quote submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReceipt {
    pub message: &'static str,
    pub request_id: u64,
    pub estimated_response_time: &'static str,
    pub next_steps: [&'static str; 3],
}

// ============================================
// Listings
// ============================================

/// Listing wrapper: the whole store plus its size. No pagination.
#[derive(Debug, Serialize)]
pub struct RequestListing<T: Serialize> {
    pub total: usize,
    pub requests: Vec<T>,
}

// ============================================
// Health / Stats
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub consultation_requests: usize,
    pub quote_requests: usize,
    pub uptime_seconds: u64,
    pub api_version: &'static str,
}
