//! Response and request schemas for the extraction service.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account as the identity endpoint and admin listing return it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Name to show in the UI, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.email)
    }
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Postal address block inside extracted document fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub full_address: Option<String>,
    pub address_line_1: Option<String>,
    pub locality: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
}

/// Structured fields pulled out of a single document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub company_name: Option<String>,
    pub trade_name: Option<String>,
    pub identification_number: Option<String>,
    pub address: Option<Address>,
    pub issue_date: Option<String>,
    pub approver_name: Option<String>,
}

/// One completed extraction, as `/extract`, `/history`, and the dashboard
/// activity feed return it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    pub request_id: Uuid,
    pub document_type: String,
    #[serde(default)]
    pub data: ExtractedFields,
    pub confidence: f64,
    pub confidence_reason: Option<String>,
    pub validation_results: Option<serde_json::Value>,
    pub data_quality_score: Option<i64>,
    pub quality_grade: Option<String>,
    pub processing_time_ms: Option<i64>,
    pub uploaded_at: Option<String>,
}

/// One page of extraction history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPage {
    pub total: u64,
    pub items: Vec<Extraction>,
}

/// Result of a multi-file upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub total_processed: u64,
    pub successful: u64,
    pub failed: u64,
    pub results: Vec<Extraction>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

/// Headline numbers for the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_documents: u64,
    pub success_rate: f64,
    pub avg_confidence: f64,
    pub pending_reviews: u64,
    pub todays_volume: u64,
    pub volume_trend: f64,
    pub active_users: u64,
}

/// One point of the daily-volume series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub count: i64,
}

/// One bucket of the quality-grade distribution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QualityBucket {
    pub name: String,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub daily_trend: Vec<ChartPoint>,
    pub quality_distribution: Vec<QualityBucket>,
}

/// Everything the dashboard page renders, in one response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub summary: DashboardSummary,
    pub charts: DashboardCharts,
    #[serde(default)]
    pub recent_activity: Vec<Extraction>,
}

/// Payload for creating a user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: String,
}

/// Fields an admin may change on an existing account. Sent as query
/// parameters, matching the service's update endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub is_active: bool,
}
