//! API integration tests
//!
//! These tests run against a live server with a seeded database:
//! one admin (id 1), one student (id 2), one AVAILABLE book (id 1) and
//! table "A1" (id 1) with seats {1,2,3,4}.

use reqwest::Client;
use serde_json::{json, Value};

use studyhall_server::models::{Role, UserClaims};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const JWT_SECRET: &str = "change-this-secret-in-production";

/// Mint a token the way the external identity service would
fn token_for(user_id: i32, role: Role) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = UserClaims {
        sub: format!("user-{}", user_id),
        user_id,
        role,
        iat: now,
        exp: now + 3600,
    };
    claims.create_token(JWT_SECRET).expect("token")
}

async fn post_reservation(client: &Client, token: &str, seat: i32, start: &str, end: &str) -> reqwest::Response {
    client
        .post(format!("{}/reservations", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "book_id": 1,
            "table_id": 1,
            "seat_number": seat,
            "reserved_date": "2030-01-15",
            "start_time": start,
            "end_time": end
        }))
        .send()
        .await
        .expect("Failed to send request")
}

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
async fn test_missing_token_is_unauthorized() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reservations", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_seat_conflict_flow() {
    let client = Client::new();
    let student = token_for(2, Role::Student);

    // Seat 1, 09:00-11:00 -> PENDING
    let first = post_reservation(&client, &student, 1, "09:00", "11:00").await;
    assert_eq!(first.status(), 201);
    let first: Value = first.json().await.expect("Failed to parse response");
    assert_eq!(first["status"], "PENDING");

    // Overlapping slot on the same seat is rejected
    let overlap = post_reservation(&client, &student, 1, "10:00", "12:00").await;
    assert_eq!(overlap.status(), 409);

    // Adjacent slot is allowed (half-open intervals)
    let adjacent = post_reservation(&client, &student, 1, "11:00", "13:00").await;
    assert_eq!(adjacent.status(), 201);

    // Same slot on a different seat is allowed
    let other_seat = post_reservation(&client, &student, 2, "09:00", "11:00").await;
    assert_eq!(other_seat.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_reservation_decision_is_terminal() {
    let client = Client::new();
    let student = token_for(2, Role::Student);
    let admin = token_for(1, Role::Admin);

    let created = post_reservation(&client, &student, 3, "14:00", "16:00").await;
    assert_eq!(created.status(), 201);
    let created: Value = created.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("reservation id");

    let decide = |status: &str| {
        let client = client.clone();
        let admin = admin.clone();
        let status = status.to_string();
        async move {
            client
                .patch(format!("{}/reservations/{}", BASE_URL, id))
                .bearer_auth(&admin)
                .json(&json!({ "status": status }))
                .send()
                .await
                .expect("Failed to send request")
        }
    };

    let approved = decide("APPROVED").await;
    assert_eq!(approved.status(), 200);
    let approved: Value = approved.json().await.expect("Failed to parse response");
    assert_eq!(approved["status"], "APPROVED");

    // A decided reservation cannot be decided again
    let again = decide("DENIED").await;
    assert_eq!(again.status(), 400);

    // Unknown target statuses are rejected outright
    let bogus = decide("CANCELLED").await;
    assert_eq!(bogus.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_decision_requires_admin_role() {
    let client = Client::new();
    let student = token_for(2, Role::Student);

    let response = client
        .patch(format!("{}/reservations/1", BASE_URL))
        .bearer_auth(&student)
        .json(&json!({ "status": "APPROVED" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_borrow_request_flow() {
    let client = Client::new();
    let student = token_for(2, Role::Student);
    let admin = token_for(1, Role::Admin);

    // Book 1 is AVAILABLE: request goes PENDING with the default window
    let first = client
        .post(format!("{}/borrow-requests", BASE_URL))
        .bearer_auth(&student)
        .json(&json!({ "book_id": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);
    let first: Value = first.json().await.expect("Failed to parse response");
    assert_eq!(first["status"], "PENDING");
    let id = first["id"].as_i64().expect("request id");

    // A second request for the same book while the first is pending
    let duplicate = client
        .post(format!("{}/borrow-requests", BASE_URL))
        .bearer_auth(&student)
        .json(&json!({ "book_id": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(duplicate.status(), 409);

    // Approval flips the book to BORROWED
    let approved = client
        .patch(format!("{}/borrow-requests/{}", BASE_URL, id))
        .bearer_auth(&admin)
        .json(&json!({ "status": "APPROVED" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(approved.status(), 200);

    let book = client
        .get(format!("{}/books/1", BASE_URL))
        .bearer_auth(&student)
        .send()
        .await
        .expect("Failed to send request");
    let book: Value = book.json().await.expect("Failed to parse response");
    assert_eq!(book["availability_status"], "BORROWED");

    // A borrowed book admits no further requests
    let unavailable = client
        .post(format!("{}/borrow-requests", BASE_URL))
        .bearer_auth(&student)
        .json(&json!({ "book_id": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(unavailable.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_malformed_slot_is_rejected() {
    let client = Client::new();
    let student = token_for(2, Role::Student);

    let response = post_reservation(&client, &student, 1, "9am", "11:00").await;
    assert_eq!(response.status(), 400);

    let inverted = post_reservation(&client, &student, 1, "13:00", "11:00").await;
    assert_eq!(inverted.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_seat_is_not_found() {
    let client = Client::new();
    let student = token_for(2, Role::Student);

    // Table A1 has seats {1,2,3,4}
    let response = post_reservation(&client, &student, 9, "09:00", "10:00").await;
    assert_eq!(response.status(), 404);
}
