//! Property tests for the request envelope

use proptest::prelude::*;
use rpc_client::{RpcRequest, RpcResponse};
use serde_json::{json, Map, Value};

fn object(key: String, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key, value);
    Value::Object(map)
}

fn param_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        ("k[a-z]{0,6}", any::<i64>()).prop_map(|(k, v)| object(k, json!(v))),
        ("k[a-z]{0,6}", "[ -~]{0,16}").prop_map(|(k, v)| object(k, json!(v))),
        ("k[a-z]{0,6}", any::<bool>()).prop_map(|(k, v)| object(k, json!(v))),
        "[ -~]{0,16}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn request_body_matches_wire_layout(
        method in "[a-zA-Z]{1,24}",
        params in prop::collection::vec(param_strategy(), 0..4),
        id in 1u32..=2_147_483_647,
        version in "[0-9]\\.[0-9]{1,2}",
    ) {
        let request = RpcRequest::new(method.clone(), params.clone(), id, version.clone());
        let body = request.to_body().unwrap();

        let expected = format!(
            r#"{{"method":{},"params":{},"id":{},"version":{}}}"#,
            serde_json::to_string(&method).unwrap(),
            serde_json::to_string(&params).unwrap(),
            id,
            serde_json::to_string(&version).unwrap(),
        );
        prop_assert_eq!(body, expected);
    }

    #[test]
    fn result_is_returned_verbatim(params in prop::collection::vec(param_strategy(), 0..4)) {
        let body = json!({ "result": params.clone(), "id": 1 }).to_string();
        let result = RpcResponse::parse(&body).unwrap().into_result().unwrap();
        prop_assert_eq!(result, Value::Array(params));
    }

    #[test]
    fn error_is_surfaced_verbatim(code in any::<i64>(), message in "[ -~]{0,32}") {
        let body = json!({ "result": [], "error": [code, message.clone()], "id": 1 }).to_string();
        match RpcResponse::parse(&body).unwrap().into_result() {
            Err(rpc_client::RpcClientError::Fault { code: c, message: m }) => {
                prop_assert_eq!(c, code);
                prop_assert_eq!(m, message);
            }
            other => prop_assert!(false, "expected fault, got {:?}", other),
        }
    }
}
