//! Static company profile and server configuration.
//!
//! The contact page renders this profile verbatim, so every value lives
//! here rather than scattered through handlers.

use serde::Serialize;

/// Company contact information served by `GET /api/contact`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub address: PostalAddress,
    pub social_media: SocialMedia,
    pub business_hours: BusinessHours,
    pub response_time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialMedia {
    pub linkedin: String,
    pub twitter: String,
    pub github: String,
}

/// Weekly opening hours; closed days carry the literal string "Closed".
#[derive(Debug, Clone, Serialize)]
pub struct BusinessHours {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        let weekday_hours = "9:00 AM - 6:00 PM PST".to_string();
        Self {
            company: "NeuraLink AI".to_string(),
            email: "contact@neuralink-ai.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            address: PostalAddress {
                street: "123 Innovation Drive, Suite 400".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94105".to_string(),
                country: "United States".to_string(),
            },
            social_media: SocialMedia {
                linkedin: "https://linkedin.com/company/neuralink-ai".to_string(),
                twitter: "https://twitter.com/neuralinklai".to_string(),
                github: "https://github.com/neuralink-ai".to_string(),
            },
            business_hours: BusinessHours {
                monday: weekday_hours.clone(),
                tuesday: weekday_hours.clone(),
                wednesday: weekday_hours.clone(),
                thursday: weekday_hours.clone(),
                friday: weekday_hours,
                saturday: "Closed".to_string(),
                sunday: "Closed".to_string(),
            },
            response_time: "We typically respond within 24 hours".to_string(),
        }
    }
}

/// Server bind configuration.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("CONTACT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // Hosting platforms inject PORT; CONTACT_PORT is for local dev.
            port: std::env::var("PORT")
                .or_else(|_| std::env::var("CONTACT_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
        }
    }
}
