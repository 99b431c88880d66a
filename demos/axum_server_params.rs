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

//! Serves every request by dumping its `$_SERVER` parameters.
//!
//! Run with `cargo run --example axum_server_params --features http`, then
//! `curl -v http://127.0.0.1:3000/index.php/users?page=2`.

use axum::{
    Router,
    extract::{ConnectInfo, Request},
    http::StatusCode,
};
use server_params::{Headers, RawParams, ServerParams};
use std::{
    net::SocketAddr,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;

const ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let app = Router::new().fallback(handle);
    let listener = TcpListener::bind(ADDR).await?;
    tracing::info!("Listening on http://{}", ADDR);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}

async fn handle(
    ConnectInfo(peer): ConnectInfo<SocketAddr>, request: Request,
) -> Result<String, (StatusCode, String)> {
    let (parts, _body) = request.into_parts();
    let local: SocketAddr = ADDR.parse().map_err(internal)?;
    let request_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(internal)?
        .as_secs_f64();
    let query = parts.uri.query().unwrap_or_default();
    let path = parts.uri.path();

    let raw = RawParams::new()
        .gateway_interface("CGI/1.1")
        .server_software(concat!("server-params/", env!("CARGO_PKG_VERSION")))
        .server_protocol(format!("{:?}", parts.version))
        .request_method(parts.method.as_str())
        .request_uri(parts.uri.to_string())
        .query_string(query)
        .php_self(path)
        .script_name(path)
        .remote_addr(peer.ip().to_string())
        .remote_port(peer.port())
        .server_addr(local.ip().to_string())
        .server_port(local.port())
        .server_name("localhost")
        .request_time_float(request_time);
    let headers = Headers::from(&parts.headers);

    let params = ServerParams::new(&raw, &headers)
        .map_err(|err| (StatusCode::BAD_REQUEST, err.to_string()))?;

    Ok(format!("{:#?}\n", params))
}

fn internal<E: std::error::Error>(err: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
