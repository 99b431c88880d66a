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

use proptest::prelude::*;
use server_params::{Headers, Method, RawParams, ServerParams, ValidationError, vars};

mod common;

fn method() -> impl Strategy<Value = Method> {
    proptest::sample::select(Method::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_fields_round_trip(
        method in method(),
        server_port: u16,
        remote_port: u16,
        content_length in proptest::option::of(any::<u64>()),
        request_time_float in 0.0..4_102_444_800.0f64,
        remote_addr in "[0-9]{1,3}(\\.[0-9]{1,3}){3}",
        request_uri in "/[a-z0-9/._-]{0,32}",
        user_agent in "[ -~]{0,48}",
        argv in proptest::collection::vec("[a-z=&]{0,8}", 0..6),
    ) {
        common::setup();

        let mut raw = RawParams::new()
            .request_method(method.as_str())
            .server_port(server_port)
            .remote_port(remote_port)
            .request_time_float(request_time_float)
            .remote_addr(remote_addr.as_str())
            .request_uri(request_uri.as_str())
            .argv(argv.iter().map(String::as_str));
        if let Some(content_length) = content_length {
            raw = raw.content_length(content_length);
        }
        let headers = Headers::new().with("user-agent", user_agent.as_str());

        let params = ServerParams::new(&raw, &headers).unwrap();
        prop_assert_eq!(params.request_method(), method);
        prop_assert_eq!(params.server_port(), server_port);
        prop_assert_eq!(params.remote_port(), remote_port);
        prop_assert_eq!(params.content_length(), content_length);
        prop_assert_eq!(params.request_time_float(), request_time_float);
        prop_assert_eq!(params.remote_addr(), remote_addr.as_str());
        prop_assert_eq!(params.request_uri(), request_uri.as_str());
        prop_assert_eq!(params.http_user_agent(), user_agent.as_str());
        prop_assert_eq!(params.argv(), argv.as_slice());

        let again = ServerParams::new(&params.to_raw(), &Headers::default()).unwrap();
        prop_assert_eq!(again, params);
    }

    #[test]
    fn test_argc_matches_argv(
        argv in proptest::collection::vec(".{0,8}", 0..16),
        argc: usize,
    ) {
        let raw = RawParams::new()
            .argv(argv.iter().map(String::as_str))
            .custom(vars::ARGC, argc.to_string());
        let params = ServerParams::new(&raw, &Headers::default()).unwrap();
        prop_assert_eq!(params.argc(), argv.len());
        prop_assert_eq!(params.argc(), params.argv().len());
    }

    #[test]
    fn test_request_time_is_truncated_float(request_time_float in 0.0..4_102_444_800.0f64) {
        let raw = RawParams::new().request_time_float(request_time_float);
        let params = ServerParams::new(&raw, &Headers::default()).unwrap();
        prop_assert_eq!(params.request_time(), params.request_time_float().trunc() as i64);

        let raw = raw.request_time(params.request_time());
        let params = ServerParams::new(&raw, &Headers::default()).unwrap();
        prop_assert_eq!(params.request_time(), request_time_float.trunc() as i64);
    }

    #[test]
    fn test_integer_request_time_round_trips(request_time: i64) {
        let raw = RawParams::new().request_time(request_time);
        match ServerParams::new(&raw, &Headers::default()) {
            Ok(params) => {
                prop_assert!((0..=1i64 << 53).contains(&request_time));
                prop_assert_eq!(params.request_time(), request_time);
                prop_assert_eq!(params.request_time_float().trunc() as i64, request_time);
                let again = ServerParams::new(&params.to_raw(), &Headers::default()).unwrap();
                prop_assert_eq!(again, params);
            }
            Err(err) => {
                prop_assert!(!(0..=1i64 << 53).contains(&request_time));
                prop_assert_eq!(
                    err,
                    ValidationError::InvalidRequestTime {
                        key: vars::REQUEST_TIME,
                        value: request_time.to_string(),
                    }
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_port_rejected(port in 65_536u32..=u32::MAX) {
        let raw = RawParams::new().custom(vars::REMOTE_PORT, port.to_string());
        let result = ServerParams::new(&raw, &Headers::default());
        let is_out_of_range = matches!(result, Err(ValidationError::PortOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn test_negative_content_length_rejected(length in i64::MIN..0) {
        let raw = RawParams::new().custom(vars::CONTENT_LENGTH, length.to_string());
        prop_assert_eq!(
            ServerParams::new(&raw, &Headers::default()),
            Err(ValidationError::NegativeContentLength(length.to_string()))
        );
    }

    #[test]
    fn test_unknown_method_rejected(token in "[A-Z]{1,10}") {
        prop_assume!(Method::ALL.iter().all(|method| method.as_str() != token));
        let raw = RawParams::new().request_method(token.as_str());
        prop_assert_eq!(
            ServerParams::new(&raw, &Headers::default()),
            Err(ValidationError::InvalidMethod(token.clone()))
        );
    }
}
