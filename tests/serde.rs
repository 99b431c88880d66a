// Copyright 2022 jmjoy
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![cfg(feature = "serde")]

use server_params::{Headers, RawParams, ServerParams};

mod common;

#[test]
fn test_serialize() {
    common::setup();

    let raw = RawParams::new()
        .request_method("DELETE")
        .request_uri("/users/1")
        .server_port(443)
        .https("on");
    let params = ServerParams::new(&raw, &Headers::new().with("Host", "example.com")).unwrap();

    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(value["request_method"], "DELETE");
    assert_eq!(value["request_uri"], "/users/1");
    assert_eq!(value["server_port"], 443);
    assert_eq!(value["content_length"], serde_json::Value::Null);
    assert_eq!(value["http_host"], "example.com");
    assert_eq!(value["argv"], serde_json::json!([]));
}
