use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
        .expect("session cookie in response")
}

#[actix_web::test]
async fn register_signs_caller_in() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(api_auth::session_middleware(false, Key::generate()))
            .service(web::scope("/api").configure(api_auth::mount_auth)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"email": "ana@example.com", "password": "hunter2", "name": "Ana"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let cookie = session_cookie(&res);

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["email"], json!("ana@example.com"));
    assert_eq!(body["user"]["name"], json!("Ana"));
    let user_id = body["user"]["id"].as_i64().expect("user id");

    // the register response cookie already authenticates /me
    let req = test::TestRequest::get()
        .uri("/api/me")
        .cookie(cookie)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["id"], json!(user_id));
    assert_eq!(body["user"]["name"], json!("Ana"));
}

#[actix_web::test]
async fn duplicate_email_is_rejected() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(api_auth::session_middleware(false, Key::generate()))
            .service(web::scope("/api").configure(api_auth::mount_auth)),
    )
    .await;

    let payload = json!({"email": "dup@example.com", "password": "pw", "name": "First"});
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(&payload)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn register_requires_all_fields() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(api_auth::session_middleware(false, Key::generate()))
            .service(web::scope("/api").configure(api_auth::mount_auth)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"email": "no-name@example.com", "password": "pw"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"email": "", "password": "pw", "name": "Blank Email"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_rejects_bad_credentials_identically() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(api_auth::session_middleware(false, Key::generate()))
            .service(web::scope("/api").configure(api_auth::mount_auth)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"email": "bob@example.com", "password": "correct", "name": "Bob"}))
        .to_request();
    test::call_service(&app, req).await;

    // wrong password and unknown email answer with the same status and body
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "bob@example.com", "password": "wrong"}))
        .to_request();
    let wrong_password = test::call_service(&app, req).await;
    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    let wrong_password: Value = test::read_body_json(wrong_password).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "nobody@example.com", "password": "correct"}))
        .to_request();
    let unknown_email = test::call_service(&app, req).await;
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
    let unknown_email: Value = test::read_body_json(unknown_email).await;

    assert_eq!(wrong_password, unknown_email);
}

#[actix_web::test]
async fn login_me_logout_flow() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(api_auth::session_middleware(false, Key::generate()))
            .service(web::scope("/api").configure(api_auth::mount_auth)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({"email": "cara@example.com", "password": "secret", "name": "Cara"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"email": "cara@example.com", "password": "secret"}))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = session_cookie(&res);
    let body: Value = test::read_body_json(res).await;
    let user_id = body["user"]["id"].as_i64().expect("user id");

    let req = test::TestRequest::get()
        .uri("/api/me")
        .cookie(cookie.clone())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["id"], json!(user_id));

    // logout clears the cookie; a client honoring Set-Cookie is signed out
    let req = test::TestRequest::post()
        .uri("/api/logout")
        .cookie(cookie)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cleared = session_cookie(&res);

    let req = test::TestRequest::get()
        .uri("/api/me")
        .cookie(cleared)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"], Value::Null);
}

#[actix_web::test]
async fn me_without_session_is_null_not_an_error() {
    let pool = db::setup_memory().await.expect("in-memory database");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(api_auth::session_middleware(false, Key::generate()))
            .service(web::scope("/api").configure(api_auth::mount_auth)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["user"], Value::Null);
}
