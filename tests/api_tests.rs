//! API integration tests
//!
//! Run against a live server: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000/api";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_equipment() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_equipment_crud() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "asset_no": "TEST-EQ-1",
            "equipment_name": "Test Excavator",
            "shift_type": "Day",
            "status": "Working"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["equipment_id"].as_i64().expect("No equipment_id");

    // Read
    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["asset_no"], "TEST-EQ-1");

    // Update
    let response = client
        .put(format!("{}/equipment/{}", BASE_URL, id))
        .json(&json!({ "status": "Standby" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "Standby");

    // Delete
    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_request_lifecycle() {
    let client = Client::new();

    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "equipment_name": "Telehandler",
            "zone_department": "Zone A",
            "num_shifts": 2
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["status"], "pending");
    let id = created["request_id"].as_i64().expect("No request_id");

    let response = client
        .put(format!("{}/requests/{}", BASE_URL, id))
        .json(&json!({ "status": "approved" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "approved");

    let response = client
        .delete(format!("{}/requests/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}
