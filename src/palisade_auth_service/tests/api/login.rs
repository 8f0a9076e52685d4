use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn register_then_login_succeeds() {
    let app = TestApp::new();

    let (status, _) = app
        .register(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;
    assert_eq!(status, 201);

    let (status, body) = app
        .login(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "message": "Login successful" }));
}

#[tokio::test]
async fn login_accepts_a_username_with_surrounding_whitespace() {
    let app = TestApp::new();

    app.register(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;

    let (status, _) = app
        .login(json!({ "username": "  mary  ", "password": "StrongPass1" }))
        .await;

    assert_eq!(status, 200);
}

#[tokio::test]
async fn unknown_user_and_wrong_password_responses_are_identical() {
    let app = TestApp::new();

    app.register(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;

    let (unknown_status, unknown_body) = app
        .login(json!({ "username": "nosuchuser", "password": "StrongPass1" }))
        .await;
    let (wrong_status, wrong_body) = app
        .login(json!({ "username": "mary", "password": "WrongPass1" }))
        .await;

    assert_eq!(unknown_status, 401);
    assert_eq!(wrong_status, 401);
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(
        unknown_body,
        json!({ "error": "Invalid username or password" })
    );
}

#[tokio::test]
async fn login_does_not_enforce_the_password_policy() {
    let app = TestApp::new();

    app.register(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;

    // A policy-violating password still gets a generic 401, not a policy
    // error: login never re-validates password strength.
    let (status, body) = app
        .login(json!({ "username": "mary", "password": "weak" }))
        .await;

    assert_eq!(status, 401);
    assert_eq!(body, json!({ "error": "Invalid username or password" }));
}

#[tokio::test]
async fn non_string_credentials_are_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .login(json!({ "username": 123, "password": "StrongPass1" }))
        .await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({ "error": "Username and password must be strings" })
    );
}
