use super::*;
use session::api::Method;

#[test]
fn describe_formats_method_and_url() {
    let request = ApiRequest {
        method: Method::Post,
        url: "http://localhost:5000/auth/login".to_owned(),
        headers: Vec::new(),
        body: None,
    };
    assert_eq!(describe(&request), "POST http://localhost:5000/auth/login");
}

#[test]
fn network_error_prefixes_stage() {
    let err = network_error("send", "connection refused");
    assert_eq!(err.to_string(), "network error: send: connection refused");
    assert_eq!(err.status(), None);
}
