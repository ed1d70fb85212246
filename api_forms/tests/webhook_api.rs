use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

macro_rules! forms_app {
    ($pool:expr) => {
        test::init_service(
            App::new().app_data(web::Data::new($pool.clone())).service(
                web::scope("/api")
                    .service(api_forms::mount_webhook())
                    .service(api_forms::mount_forms()),
            ),
        )
        .await
    };
}

#[actix_web::test]
async fn webhook_persists_a_submission() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = forms_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/webhook/google-form")
        .set_json(json!({
            "Timestamp": "2026-08-07T09:30:00Z",
            "What is your role?": "setter",
            "Dials made?": "55",
            "Pick ups?": "12",
            "Appt's Set?": "3",
            "Setter Name": "Sam"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Form submission saved"));
    let id = body["id"].as_i64().expect("submission id");

    let req = test::TestRequest::get()
        .uri("/api/webhook/entries")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let entry = &body["entries"][0];
    assert_eq!(entry["id"], json!(id));
    assert_eq!(entry["timestamp"], json!("2026-08-07T09:30:00Z"));
    assert_eq!(entry["role"], json!("setter"));
    assert_eq!(entry["dials"], json!(55));
    assert_eq!(entry["pick_ups"], json!(12));
    assert_eq!(entry["appts_set"], json!(3));
    assert_eq!(entry["setter_name"], json!("Sam"));
    // unresolved fields fall back to their defaults
    assert_eq!(entry["dqs"], json!(0));
    assert_eq!(entry["cash_collected"], json!(0.0));
    assert_eq!(entry["call_notes"], json!(""));
}

#[actix_web::test]
async fn camel_case_payload_persists_the_same_values() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = forms_app!(pool);

    let human = json!({
        "What is your role?": "closer",
        "LIVE Calls?": "4",
        "Cash Collected\nThe amount of cash collected today (ex 4000, 2000, 1500)": "2000",
        "Revenue Generated\nThe total value of the contract (ex: 4000, 4500)": "4500",
        "Closer Name": "Charlie"
    });
    let camel = json!({
        "role": "closer",
        "liveCalls": 4,
        "cashCollected": 2000,
        "revenueGenerated": 4500,
        "closerName": "Charlie"
    });
    for payload in [&human, &camel] {
        let req = test::TestRequest::post()
            .uri("/api/webhook/google-form")
            .set_json(payload)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/webhook/entries")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let entries = body["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 2);
    for field in [
        "role",
        "live_calls",
        "cash_collected",
        "revenue_generated",
        "closer_name",
    ] {
        assert_eq!(entries[0][field], entries[1][field], "field {}", field);
    }
    assert_eq!(entries[0]["cash_collected"], json!(2000.0));
}

#[actix_web::test]
async fn duplicate_submissions_insert_duplicate_rows() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = forms_app!(pool);

    let payload = json!({"role": "setter", "dials": 10});
    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/webhook/google-form")
            .set_json(&payload)
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["id"].as_i64().expect("submission id"));
    }
    assert_ne!(ids[0], ids[1]);

    let req = test::TestRequest::get()
        .uri("/api/webhook/entries")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["entries"].as_array().map(Vec::len), Some(2));
}

#[actix_web::test]
async fn forms_listing_projects_camel_case() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = forms_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/webhook/google-form")
        .set_json(json!({
            "Pick ups?": "7",
            "Appt's Pitched?": "2",
            "Hybrid Closer?": "Yes",
            "Prospect Email": "lead@example.com",
            "Fathom Link": "https://fathom.video/call/123"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/forms/entries").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let entry = &body["entries"][0];
    assert_eq!(entry["pickUps"], json!(7));
    assert_eq!(entry["apptsPitched"], json!(2));
    assert_eq!(entry["hybridCloser"], json!("Yes"));
    assert_eq!(entry["prospectEmail"], json!("lead@example.com"));
    assert_eq!(entry["fathomLink"], json!("https://fathom.video/call/123"));
    assert!(entry.get("createdAt").is_some());
    // snake_case spellings must not leak out of the projection
    assert!(entry.get("pick_ups").is_none());
    assert!(entry.get("created_at").is_none());
}

#[actix_web::test]
async fn missing_timestamp_is_stamped_server_side() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = forms_app!(pool);

    let req = test::TestRequest::post()
        .uri("/api/webhook/google-form")
        .set_json(json!({"role": "closer"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/webhook/entries")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let timestamp = body["entries"][0]["timestamp"]
        .as_str()
        .expect("timestamp string");
    assert!(!timestamp.is_empty());
}
