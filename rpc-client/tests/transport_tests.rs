//! Transport tests against a mock device
//!
//! A mockito server stands in for the display so headers, status codes and
//! body handling can be checked without hardware.

use mockito::{Matcher, Server};
use rpc_client::{RpcClient, RpcClientError, RpcRequest};
use serde_json::json;
use std::net::TcpListener;
use std::time::Duration;

fn service_url(server: &Server, service: &str) -> String {
    format!("{}/sony/{}", server.url(), service)
}

#[test]
fn test_call_sends_exact_body_and_returns_result() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sony/system")
        .match_header("content-type", "application/json")
        .match_header("x-auth-psk", Matcher::Missing)
        .match_body(Matcher::Exact(
            r#"{"method":"getPowerStatus","params":[],"id":1,"version":"1.0"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"result":[{"status":"active"}],"id":1}"#)
        .create();

    let client = RpcClient::new();
    let request = RpcRequest::new("getPowerStatus", vec![], 1, "1.0");
    let result = client
        .call(&service_url(&server, "system"), &request, None)
        .expect("call should succeed");

    assert_eq!(result, json!([{"status": "active"}]));
    mock.assert();
}

#[test]
fn test_call_sends_psk_header() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/sony/audio")
        .match_header("x-auth-psk", "1234")
        .with_status(200)
        .with_body(r#"{"result":[],"id":5}"#)
        .create();

    let client = RpcClient::new();
    let request = RpcRequest::new("setAudioMute", vec![json!({"status": true})], 5, "1.0");
    let result = client
        .call(&service_url(&server, "audio"), &request, Some("1234"))
        .expect("call should succeed");

    assert_eq!(result, json!([]));
    mock.assert();
}

#[test]
fn test_device_error_is_fault() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/sony/system")
        .with_status(200)
        .with_body(r#"{"error":[40005,"Display Is Turned Off"],"id":1}"#)
        .create();

    let client = RpcClient::new();
    let request = RpcRequest::new("getPowerStatus", vec![], 1, "1.0");
    let err = client
        .call(&service_url(&server, "system"), &request, None)
        .unwrap_err();

    match err {
        RpcClientError::Fault { code, message } => {
            assert_eq!(code, 40005);
            assert_eq!(message, "Display Is Turned Off");
        }
        other => panic!("Expected RpcClientError::Fault, got {:?}", other),
    }
}

#[test]
fn test_non_success_status_is_network_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/sony/system")
        .with_status(403)
        .with_body(r#"{"error":[403,"Forbidden"],"id":1}"#)
        .create();

    let client = RpcClient::new();
    let request = RpcRequest::new("getPowerStatus", vec![], 1, "1.0");
    let err = client
        .call(&service_url(&server, "system"), &request, None)
        .unwrap_err();

    match err {
        RpcClientError::Network(msg) => assert!(msg.contains("403")),
        other => panic!("Expected RpcClientError::Network, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_body_is_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/sony/system")
        .with_status(200)
        .with_body("not json at all")
        .create();

    let client = RpcClient::new();
    let request = RpcRequest::new("getPowerStatus", vec![], 1, "1.0");
    let err = client
        .call(&service_url(&server, "system"), &request, None)
        .unwrap_err();

    assert!(matches!(err, RpcClientError::Parse(_)));
}

#[test]
fn test_mismatched_response_id() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/sony/system")
        .with_status(200)
        .with_body(r#"{"result":[{"status":"active"}],"id":2}"#)
        .expect(2)
        .create();

    let request = RpcRequest::new("getPowerStatus", vec![], 1, "1.0");
    let url = service_url(&server, "system");

    let err = RpcClient::new().call(&url, &request, None).unwrap_err();
    assert!(matches!(err, RpcClientError::IdMismatch { expected: 1, .. }));

    let result = RpcClient::new()
        .verify_response_id(false)
        .call(&url, &request, None)
        .expect("id check disabled");
    assert_eq!(result, json!([{"status": "active"}]));
}

#[test]
fn test_connection_refused_is_network_error() {
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = RpcClient::with_timeouts(Duration::from_secs(1), Duration::from_secs(1));
    let request = RpcRequest::new("getPowerStatus", vec![], 1, "1.0");
    let err = client
        .call(&format!("http://127.0.0.1:{}/sony/system", port), &request, None)
        .unwrap_err();

    assert!(matches!(err, RpcClientError::Network(_)));
}
