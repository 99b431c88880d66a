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

use server_params::RawParams;
use std::sync::Once;

static START: Once = Once::new();

/// Setup function that is only run once, even if called multiple times.
#[allow(dead_code)]
pub fn setup() {
    START.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Parameters of a typical php-fpm request behind nginx.
#[allow(dead_code)]
pub fn php_fpm_params() -> RawParams<'static> {
    RawParams::new()
        .gateway_interface("CGI/1.1")
        .server_software("nginx/1.25.3")
        .server_protocol("HTTP/1.1")
        .request_method("POST")
        .php_self("/index.php/users")
        .script_filename("/var/www/html/index.php")
        .script_name("/index.php")
        .path_info("/users")
        .orig_path_info("/users")
        .path_translated("/var/www/html/users")
        .document_root("/var/www/html")
        .query_string("page=2")
        .request_uri("/index.php/users?page=2")
        .remote_addr("192.168.1.20")
        .remote_host("client.lan")
        .remote_port(52814)
        .remote_user("alice")
        .redirect_remote_user("alice")
        .server_addr("192.168.1.2")
        .server_name("example.com")
        .server_port(8080)
        .server_admin("webmaster@example.com")
        .server_signature("<address>nginx at example.com Port 8080</address>")
        .content_type("application/x-www-form-urlencoded")
        .content_length(27)
        .request_time(1_700_000_000)
        .request_time_float(1_700_000_000.125)
        .https("on")
        .auth_type("Basic")
        .php_auth_user("alice")
        .php_auth_pw("secret")
        .php_auth_digest("")
        .argv(["page=2"])
}
