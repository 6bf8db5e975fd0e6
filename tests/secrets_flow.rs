//! Integration tests for the device-secrets interface

use secrecy::ExposeSecret;
use serde_json::json;
use skyfort_sdk::{Client, ClientBuilder, Credentials, OsType};
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jwtToken": "test-jwt"})))
        .mount(&server)
        .await;

    let client = ClientBuilder::new(server.uri())
        .credentials(Credentials::new("test-id", "test-secret"))
        .timeout_ms(5000)
        .build()
        .expect("failed to build client");

    (server, client)
}

#[tokio::test]
async fn test_get_otp() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/public/v1/getOtp"))
        .and(header("auth-token", "test-jwt"))
        .and(query_param("udid", "device-udid-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"otp": "123456"})))
        .expect(1)
        .mount(&server)
        .await;

    let otp = client
        .secrets()
        .get_otp("device-udid-1")
        .await
        .expect("failed to get otp");

    assert_eq!(otp.otp.expose_secret(), "123456");
}

#[tokio::test]
async fn test_get_passwords() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/public/v1/getPasswords"))
        .and(header("auth-token", "test-jwt"))
        .and(query_param("username", "jdoe@example.com"))
        .and(query_param("osType", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "exitPassword": "exit-pass",
            "logoutPassword": "logout-pass",
            "uninstallPassword": "uninstall-pass"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let passwords = client
        .secrets()
        .get_passwords("jdoe@example.com", OsType::MacOs)
        .await
        .expect("failed to get passwords");

    assert_eq!(
        passwords.logout_password.as_ref().map(|p| p.expose_secret().as_str()),
        Some("logout-pass")
    );
    assert_eq!(
        passwords.uninstall_password.as_ref().map(|p| p.expose_secret().as_str()),
        Some("uninstall-pass")
    );
    assert!(passwords.gateway_disable_password.is_none());
    assert!(passwords.tunnel_disable_password.is_none());

    // Debug output must not leak the values
    let debug_str = format!("{:?}", passwords);
    assert!(!debug_str.contains("logout-pass"));
}
