mod common;

use axum::http::StatusCode;
use common::{CookieJar, TestApp};
use url_redirector::application::services::OwnershipMode;

#[tokio::test]
async fn test_register_logs_in_and_redirects_home() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.register(&mut jar, "a@x.com", "pw1").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
    assert!(jar.has_session());

    let response = app.get(&mut jar, "/").await;
    response.assert_status_ok();
    assert!(response.text().contains("a@x.com"));

    let response = app.get(&mut jar, "/settings").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_register_then_login_with_same_password() {
    let app = TestApp::new(OwnershipMode::Scoped);

    let mut first = CookieJar::new();
    app.register(&mut first, "a@x.com", "pw1").await;

    let mut second = CookieJar::new();
    let response = app.login(&mut second, "a@x.com", "pw1").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");

    let response = app.get(&mut second, "/settings").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_register_duplicate_email_flashes_and_creates_nothing() {
    let app = TestApp::new(OwnershipMode::Scoped);

    let mut first = CookieJar::new();
    app.register(&mut first, "a@x.com", "pw1").await;

    let mut second = CookieJar::new();
    let response = app.register(&mut second, "a@x.com", "other").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?show_login_modal=true");

    let users = app.state.account_service.list_users().await.unwrap();
    assert_eq!(users.len(), 1);

    let response = app.get(&mut second, "/?show_login_modal=true").await;
    assert!(response.text().contains("User already exist!"));

    // The second browser is still anonymous.
    let response = app.get(&mut second, "/settings").await;
    assert_eq!(response.header("location"), "/?show_login_modal=true");
}

#[tokio::test]
async fn test_register_with_missing_password_rerenders_form() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.register(&mut jar, "a@x.com", "").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.text().contains("Password is required"));
    assert!(app.state.account_service.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_points_to_sign_up() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.login(&mut jar, "nobody@x.com", "pw").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?show_sign_up_modal=true");

    let response = app.get(&mut jar, "/?show_sign_up_modal=true").await;
    let body = response.text();
    assert!(body.contains("User does not exist, please sign up."));

    // Flash messages are shown once.
    let response = app.get(&mut jar, "/").await;
    assert!(!response.text().contains("User does not exist"));
}

#[tokio::test]
async fn test_login_wrong_password_never_binds_session() {
    let app = TestApp::new(OwnershipMode::Scoped);

    let mut owner = CookieJar::new();
    app.register(&mut owner, "a@x.com", "pw1").await;

    let mut jar = CookieJar::new();
    let response = app.login(&mut jar, "a@x.com", "wrong").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?show_login_modal=true");

    let response = app.get(&mut jar, "/").await;
    assert!(response.text().contains("Incorrect password, please try again"));

    let response = app.get(&mut jar, "/settings").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?show_login_modal=true");
}

#[tokio::test]
async fn test_get_login_opens_login_dialog() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.get(&mut jar, "/login").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/?show_login_modal=true");
}

#[tokio::test]
async fn test_register_page_renders() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.get(&mut jar, "/register").await;

    response.assert_status_ok();
    assert!(response.text().contains("action=\"/register\""));
}

#[tokio::test]
async fn test_logout_twice_stays_anonymous() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    app.register(&mut jar, "a@x.com", "pw1").await;

    for _ in 0..2 {
        let response = app.get(&mut jar, "/logout").await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        let response = app.get(&mut jar, "/settings").await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/?show_login_modal=true");
    }
}

#[tokio::test]
async fn test_landing_page_dialog_flags() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.get(&mut jar, "/").await;
    response.assert_status_ok();
    assert!(!response.text().contains("id=\"login-modal\" class=\"modal\" open"));

    let response = app.get(&mut jar, "/?show_login_modal=true").await;
    assert!(response.text().contains("id=\"login-modal\" class=\"modal\" open"));

    let response = app.get(&mut jar, "/?show_sign_up_modal=true").await;
    assert!(response.text().contains("id=\"sign-up-modal\" class=\"modal\" open"));
}

#[tokio::test]
async fn test_contact_page() {
    let app = TestApp::new(OwnershipMode::Scoped);
    let mut jar = CookieJar::new();

    let response = app.get(&mut jar, "/contact").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "ContactPage");
}
