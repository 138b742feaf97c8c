use super::*;

// =============================================================
// Deserialization against representative service payloads
// =============================================================

#[test]
fn user_roundtrips_with_optional_fields_missing() {
    let json = r#"{
        "id": 1,
        "email": "admin@example.com",
        "full_name": null,
        "role": "admin",
        "is_active": true
    }"#;
    let user: User = serde_json::from_str(json).expect("user");
    assert!(user.is_admin());
    assert!(user.last_login.is_none());
    assert_eq!(user.display_name(), "admin@example.com");
}

#[test]
fn display_name_prefers_full_name() {
    let json = r#"{
        "id": 2,
        "email": "ops@example.com",
        "full_name": "Ops Person",
        "role": "user",
        "is_active": true,
        "last_login": "2025-11-02T09:15:00"
    }"#;
    let user: User = serde_json::from_str(json).expect("user");
    assert!(!user.is_admin());
    assert_eq!(user.display_name(), "Ops Person");
}

#[test]
fn token_parses_login_response() {
    let token: Token =
        serde_json::from_str(r#"{"access_token":"abc.def.ghi","token_type":"bearer"}"#)
            .expect("token");
    assert_eq!(token.access_token, "abc.def.ghi");
}

#[test]
fn extraction_parses_full_payload() {
    let json = r#"{
        "request_id": "7b1f2a9c-8a43-4a2e-9d5f-0e2b9a6c1d3e",
        "document_type": "GST_CERTIFICATE",
        "data": {
            "company_name": "Acme Widgets Pvt Ltd",
            "trade_name": "Acme",
            "identification_number": "27AAAPL1234C1ZV",
            "address": {"city": "Pune", "state": "MH", "pincode": "411001"},
            "issue_date": "2021-04-01",
            "approver_name": null
        },
        "confidence": 0.93,
        "confidence_reason": "all anchor fields present",
        "validation_results": {"identification_number": {"valid": true}},
        "data_quality_score": 88,
        "quality_grade": "B",
        "processing_time_ms": 2741,
        "uploaded_at": "2025-11-02T10:30:00"
    }"#;
    let extraction: Extraction = serde_json::from_str(json).expect("extraction");
    assert_eq!(extraction.document_type, "GST_CERTIFICATE");
    assert_eq!(extraction.data.company_name.as_deref(), Some("Acme Widgets Pvt Ltd"));
    assert_eq!(extraction.data.address.as_ref().and_then(|a| a.city.as_deref()), Some("Pune"));
    assert_eq!(extraction.quality_grade.as_deref(), Some("B"));
}

#[test]
fn extraction_tolerates_sparse_data() {
    // Failed extractions come back with empty data and no scoring.
    let json = r#"{
        "request_id": "7b1f2a9c-8a43-4a2e-9d5f-0e2b9a6c1d3e",
        "document_type": "OTHER",
        "confidence": 0.0
    }"#;
    let extraction: Extraction = serde_json::from_str(json).expect("extraction");
    assert_eq!(extraction.data, ExtractedFields::default());
    assert!(extraction.data_quality_score.is_none());
}

#[test]
fn history_page_parses() {
    let json = r#"{
        "total": 42,
        "items": [{
            "request_id": "7b1f2a9c-8a43-4a2e-9d5f-0e2b9a6c1d3e",
            "document_type": "PAN_CARD",
            "data": {},
            "confidence": 0.5
        }]
    }"#;
    let page: HistoryPage = serde_json::from_str(json).expect("history page");
    assert_eq!(page.total, 42);
    assert_eq!(page.items.len(), 1);
}

#[test]
fn batch_result_parses_with_errors() {
    let json = r#"{
        "total_processed": 3,
        "successful": 2,
        "failed": 1,
        "results": [],
        "errors": [{"filename": "blurry.pdf", "error": "unreadable"}]
    }"#;
    let batch: BatchResult = serde_json::from_str(json).expect("batch");
    assert_eq!(batch.failed, 1);
    assert_eq!(batch.errors.len(), 1);
}

#[test]
fn dashboard_stats_parse() {
    let json = r#"{
        "summary": {
            "total_documents": 120,
            "success_rate": 91.5,
            "avg_confidence": 0.87,
            "pending_reviews": 4,
            "todays_volume": 12,
            "volume_trend": -8.3,
            "active_users": 5
        },
        "charts": {
            "daily_trend": [{"date": "2025-11-01", "count": 9}],
            "quality_distribution": [{"name": "A", "value": 61}, {"name": "B", "value": 40}]
        },
        "recent_activity": []
    }"#;
    let stats: DashboardStats = serde_json::from_str(json).expect("stats");
    assert_eq!(stats.summary.total_documents, 120);
    assert_eq!(stats.charts.quality_distribution[0].name, "A");
}
