use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/api/");
    assert_eq!(client.base_url, "http://localhost:8000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000/api");
    assert_eq!(client.base_url, "http://localhost:8000/api");
}

#[test]
fn test_new_client_has_no_token() {
    let client = Client::new("http://localhost:8000/api");
    assert!(!client.has_token());
}

#[test]
fn test_with_token_and_clear() {
    let mut client = Client::new("http://localhost:8000/api").with_token("abc");
    assert!(client.has_token());

    client.set_token(None);
    assert!(!client.has_token());
}

#[test]
fn test_missing_token_error_is_not_transport() {
    let err = ClientError::missing_token();
    assert!(!err.is_transport());
    assert_eq!(err.status(), None);
}

#[test]
fn test_api_error_carries_status() {
    let err = ClientError::api_error(401, "Invalid credentials".to_string());
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Invalid credentials"));
}
