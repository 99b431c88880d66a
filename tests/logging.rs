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

use server_params::{Headers, RawParams, ServerParams, vars};
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_every_rejection_is_logged() {
    let cases = [
        RawParams::new().request_method("INVALID"),
        RawParams::new().custom(vars::SERVER_PORT, "eighty"),
        RawParams::new().custom(vars::REMOTE_PORT, "70000"),
        RawParams::new().custom(vars::CONTENT_LENGTH, "-5"),
        RawParams::new().custom(vars::CONTENT_LENGTH, "5kb"),
        RawParams::new().custom(vars::REQUEST_TIME, "yesterday"),
        RawParams::new()
            .request_time(1_700_000_001)
            .request_time_float(1_700_000_000.5),
    ];

    for raw in cases {
        let mut result = None;
        let logs = captured_logs(|| result = Some(ServerParams::new(&raw, &Headers::default())));
        let err = result.unwrap().unwrap_err();
        assert!(logs.contains("Reject server params."), "no log for {err:?}: {logs}");
        assert!(logs.contains(&err.to_string()), "missing {err} in {logs}");
    }
}

#[test]
fn test_inconsistent_argc_is_warned() {
    let raw = RawParams::new().argv(["a"]).custom(vars::ARGC, "3");
    let logs = captured_logs(|| {
        ServerParams::new(&raw, &Headers::default()).unwrap();
    });
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("Ignore argc inconsistent with argv."), "{logs}");
}
