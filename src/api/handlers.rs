//! API request handlers.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use chrono::{SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::types::*;
use crate::config::ContactInfo;
use crate::models::{
    ConsultationRequest, ContactError, ProjectDetails, QuoteRequest, RequestKind, RequestStatus,
};
use crate::store::RequestStore;

/// Shared application state.
///
/// Constructed once at startup and handed to every handler through the
/// `State` extractor; the stores live exactly as long as the process.
pub struct AppState {
    pub contact_info: ContactInfo,
    pub consultations: RequestStore<ConsultationRequest>,
    pub quotes: RequestStore<QuoteRequest>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            contact_info: ContactInfo::default(),
            consultations: RequestStore::new(),
            quotes: RequestStore::new(),
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// Contact Info
// ============================================

pub async fn get_contact_info(State(state): State<Arc<AppState>>) -> Json<ContactInfo> {
    Json(state.contact_info.clone())
}

// ============================================
// Consultation Requests
// ============================================

pub async fn submit_consultation(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ConsultationForm>,
) -> Result<(StatusCode, Json<SubmissionReceipt>), ContactError> {
    let (name, email, message) = match (
        required(form.name),
        required(form.email),
        required(form.message),
    ) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        _ => {
            return Err(ContactError::missing_fields(
                "Name, email, and message are required",
            ))
        }
    };

    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }

    let record = state.consultations.append(|id| ConsultationRequest {
        id,
        name,
        email,
        company: or_default(form.company, "Not specified"),
        message,
        service_interest: or_default(form.service_interest, "General inquiry"),
        timestamp: now_iso8601(),
        status: RequestStatus::Pending,
    });

    Ok((
        StatusCode::CREATED,
        Json(SubmissionReceipt {
            message: "Consultation request submitted successfully",
            request_id: record.id,
            estimated_response_time: ESTIMATED_RESPONSE_TIME,
        }),
    ))
}

pub async fn list_consultations(
    State(state): State<Arc<AppState>>,
) -> Json<RequestListing<ConsultationRequest>> {
    let requests = state.consultations.list();
    Json(RequestListing {
        total: requests.len(),
        requests,
    })
}

pub async fn get_consultation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ConsultationRequest>, ContactError> {
    state
        .consultations
        .get(id)
        .map(Json)
        .ok_or_else(|| ContactError::not_found(RequestKind::Consultation, id))
}

// ============================================
// Quote Requests
// ============================================

pub async fn submit_quote(
    State(state): State<Arc<AppState>>,
    Json(form): Json<QuoteForm>,
) -> Result<(StatusCode, Json<QuoteReceipt>), ContactError> {
    let (name, email, company) = match (
        required(form.name),
        required(form.email),
        required(form.company),
    ) {
        (Some(name), Some(email), Some(company)) => (name, email, company),
        _ => {
            return Err(ContactError::missing_fields(
                "Name, email, and company are required",
            ))
        }
    };

    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }

    let selected_services = match form.selected_services {
        Some(services) if !services.is_empty() => services,
        _ => return Err(ContactError::NoServicesSelected),
    };

    let record = state.quotes.append(|id| QuoteRequest {
        id,
        name,
        email,
        company,
        phone: or_default(form.phone, "Not provided"),
        message: or_default(form.message, "No additional details provided"),
        selected_services,
        project_details: ProjectDetails {
            scope: form.project_scope,
            team_size: form.team_size,
            urgency: form.urgency,
            include_support: form.include_support,
            include_training: form.include_training,
        },
        estimated_total: form.estimated_total,
        timestamp: now_iso8601(),
        status: RequestStatus::Pending,
    });

    info!(
        id = record.id,
        company = %record.company,
        services = ?record.selected_services,
        estimated_total = ?record.estimated_total,
        "Quote request received"
    );

    Ok((
        StatusCode::CREATED,
        Json(QuoteReceipt {
            message: "Quote request submitted successfully",
            request_id: record.id,
            estimated_response_time: ESTIMATED_RESPONSE_TIME,
            next_steps: QUOTE_NEXT_STEPS,
        }),
    ))
}

pub async fn list_quotes(State(state): State<Arc<AppState>>) -> Json<RequestListing<QuoteRequest>> {
    let requests = state.quotes.list();
    Json(RequestListing {
        total: requests.len(),
        requests,
    })
}

pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<QuoteRequest>, ContactError> {
    state
        .quotes
        .get(id)
        .map(Json)
        .ok_or_else(|| ContactError::not_found(RequestKind::Quote, id))
}

// ============================================
// Health / Stats
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
    })
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsData> {
    Json(StatsData {
        consultation_requests: state.consultations.len(),
        quote_requests: state.quotes.len(),
        uptime_seconds: state.uptime_seconds(),
        api_version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================
// Helper Functions
// ============================================

lazy_static! {
    /// Syntactic check only: something@domain.tld with no whitespace and
    /// no second @. Says nothing about deliverability.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A required field: present and non-empty, or None.
fn required(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// An optional field with a fixed fallback. Empty strings count as absent.
fn or_default(field: Option<String>, default: &str) -> String {
    field
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
