//! Wire schema for the triage backend.
//!
//! DESIGN
//! ======
//! Every payload crossing the HTTP boundary is decoded into one of these
//! types. Unexpected shapes fail deserialization instead of leaking missing
//! fields into the UI; callers map those failures to typed errors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of account roles issued by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Radiologist,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Radiologist => "radiologist",
        }
    }

    /// Human-readable badge text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Doctor => "Verified Physician",
            Self::Radiologist => "Radiologist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated identity as returned by `POST /v1/auth/login`.
///
/// This is also the record persisted to durable storage between reloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique login name.
    pub username: String,
    /// Display name, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Assigned role.
    pub role: Role,
}

impl User {
    /// Name shown in page headers; falls back to the username.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Login request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Success envelope wrapping the login identity: `{ status, data }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginEnvelope {
    pub status: String,
    pub data: User,
}

/// Error body carried by non-2xx backend responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Urgency category assigned by the backend triage rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriageLevel {
    Critical,
    Urgent,
    Monitoring,
    /// Any level this client does not know about yet.
    #[serde(other)]
    Unknown,
}

impl TriageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Urgent => "URGENT",
            Self::Monitoring => "MONITORING",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// CSS modifier used for badges and result panels.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Urgent => "urgent",
            Self::Monitoring => "monitoring",
            Self::Unknown => "unknown",
        }
    }
}

/// Triage block of an analysis result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triage {
    pub level: TriageLevel,
    /// Colour hint (`red`, `orange`, `blue`).
    pub color: String,
    /// Recommended clinical action.
    pub action: String,
}

/// Processing metadata attached to an analysis result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub processing_device: String,
    pub anonymized: bool,
    pub retention_policy: String,
}

/// Response of `POST /analyze`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub status: String,
    /// Audit reference, e.g. `JGTX-1A2B3C4D`.
    pub audit_id: String,
    pub triage: Triage,
    pub top_disease: String,
    /// Probability of `top_disease` in `0.0..=1.0`.
    pub top_confidence: f64,
    /// Per-label probabilities in `0.0..=1.0`.
    pub predictions: BTreeMap<String, f64>,
    /// Base64-encoded JPEG Grad-CAM overlay.
    pub visual_explanation: String,
    /// Generated clinical narrative.
    pub textual_explanation: String,
    #[serde(default)]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(default)]
    pub compliance_note: Option<String>,
}

impl AnalysisResult {
    /// Predictions ordered by probability, highest first.
    pub fn ranked_predictions(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .predictions
            .iter()
            .map(|(label, p)| (label.as_str(), *p))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// `data:` URL for the heatmap image.
    pub fn heatmap_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.visual_explanation)
    }
}

/// One row of `GET /v1/audit/history`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub audit_id: String,
    pub doctor_name: String,
    pub triage_result: TriageLevel,
    /// ISO 8601 timestamp (UTC, no offset).
    pub analysis_time: String,
}
