use actix_web::{http::StatusCode, test, web, App};
use chrono::{Duration, Utc};
use remindu_api::configure_server_api;
use remindu_infra::ReminduContext;
use serde_json::{json, Value};

macro_rules! init_app {
    () => {{
        let ctx = ReminduContext::create_inmemory();
        test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await
    }};
}

fn date_string(days_from_now: i64) -> String {
    (Utc::now() + Duration::days(days_from_now))
        .format("%Y-%m-%d")
        .to_string()
}

#[actix_web::test]
async fn test_status_ok() {
    let app = init_app!();

    let req = test::TestRequest::with_uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_create_valid_reminder() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/reminders/")
        .set_json(&json!({
            "date": date_string(1),
            "time": "09:00",
            "message": "Pay rent",
            "reminder_method": "EMAIL"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Pay rent");
    assert_eq!(body["reminder_method"], "EMAIL");
    assert!(body["id"].is_string());
    assert_eq!(body["created_at"], body["updated_at"]);
    assert!(body["reminder_datetime"].as_i64().unwrap() > Utc::now().timestamp_millis());
    // The raw inputs are merged into reminder_datetime and not echoed back
    assert!(body.get("date").is_none());
    assert!(body.get("time").is_none());
}

#[actix_web::test]
async fn test_create_reminder_in_past() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/reminders/")
        .set_json(&json!({
            "date": date_string(-1),
            "time": "09:00",
            "message": "This should fail",
            "reminder_method": "SMS"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["non_field_errors"][0],
        "Reminder date and time must be in the future."
    );
}

#[actix_web::test]
async fn test_create_reminder_with_invalid_method() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/reminders/")
        .set_json(&json!({
            "date": date_string(1),
            "time": "09:00",
            "message": "Invalid method test",
            "reminder_method": "WHATSAPP"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["reminder_method"][0],
        "Invalid method. Choose from: EMAIL, SMS"
    );
}

#[actix_web::test]
async fn test_create_reminder_with_missing_fields() {
    let app = init_app!();

    let required_fields = vec!["date", "time", "message", "reminder_method"];
    for field in required_fields {
        let mut body = json!({
            "date": date_string(1),
            "time": "09:00",
            "message": "Missing field test",
            "reminder_method": "EMAIL"
        });
        body.as_object_mut().unwrap().remove(field);

        let req = test::TestRequest::post()
            .uri("/reminders/")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp_body: Value = test::read_body_json(resp).await;
        assert!(
            resp_body.get(field).is_some(),
            "expected an error keyed to {}",
            field
        );
    }
}

#[actix_web::test]
async fn test_create_reminder_with_malformed_date() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/reminders/")
        .set_json(&json!({
            "date": "01-06-2030",
            "time": "09:00",
            "message": "Malformed date test",
            "reminder_method": "EMAIL"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["date"][0], "Date must be in YYYY-MM-DD format.");
}

#[actix_web::test]
async fn test_list_returns_reminders_newest_first() {
    let app = init_app!();

    // Posted oldest-datetime first on purpose, the list endpoint has to
    // order by reminder_datetime descending
    let inputs = vec![(date_string(1), "First"), (date_string(2), "Second")];
    for (date, message) in &inputs {
        let req = test::TestRequest::post()
            .uri("/reminders/")
            .set_json(&json!({
                "date": date,
                "time": "09:00",
                "message": message,
                "reminder_method": "EMAIL"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::with_uri("/reminders/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let reminders = body.as_array().unwrap();
    assert_eq!(reminders.len(), 2);
    assert_eq!(reminders[0]["message"], "Second");
    assert_eq!(reminders[1]["message"], "First");
    assert!(
        reminders[0]["reminder_datetime"].as_i64().unwrap()
            > reminders[1]["reminder_datetime"].as_i64().unwrap()
    );
}
