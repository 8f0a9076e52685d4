use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn register_creates_a_user() {
    let app = TestApp::new();

    let (status, body) = app
        .register(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;

    assert_eq!(status, 201);
    assert_eq!(body, json!({ "message": "User created successfully" }));
}

#[tokio::test]
async fn duplicate_usernames_are_rejected_even_with_whitespace() {
    let app = TestApp::new();

    let (status, _) = app
        .register(json!({ "username": "mary", "password": "StrongPass1" }))
        .await;
    assert_eq!(status, 201);

    let (status, body) = app
        .register(json!({ "username": " mary ", "password": "OtherPass2" }))
        .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Username already exists" }));
}

#[tokio::test]
async fn weak_passwords_are_rejected() {
    let app = TestApp::new();

    for weak in ["weak", "alllowercase1", "ALLUPPER1", "NoDigitsHere"] {
        let (status, body) = app
            .register(json!({ "username": "mary", "password": weak }))
            .await;

        assert_eq!(status, 400, "{weak:?}");
        assert_eq!(
            body,
            json!({
                "error": "Password must be at least 8 characters long and contain at least one uppercase letter, one lowercase letter, and one number"
            })
        );
    }
}

#[tokio::test]
async fn non_string_credentials_are_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .register(json!({ "username": 123, "password": 456 }))
        .await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({ "error": "Username and password must be strings" })
    );
}

#[tokio::test]
async fn missing_credentials_are_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .register(json!({ "username": "", "password": "" }))
        .await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({ "error": "Username and password are required" }));
}

#[tokio::test]
async fn username_length_bounds_are_inclusive() {
    let app = TestApp::new();

    for rejected in ["ab", &"a".repeat(21)] {
        let (status, body) = app
            .register(json!({ "username": rejected, "password": "StrongPass1" }))
            .await;

        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({ "error": "Username must be between 3 and 20 characters long" })
        );
    }

    for accepted in ["abc", &"a".repeat(20)] {
        let (status, _) = app
            .register(json!({ "username": accepted, "password": "StrongPass1" }))
            .await;

        assert_eq!(status, 201);
    }
}
