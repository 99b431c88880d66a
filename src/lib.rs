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

#![warn(rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Typed, immutable access to CGI server parameters, the `$_SERVER`
//! superglobal of PHP.
//!
//! A request-building layer (a CGI gateway, a FastCGI server or an HTTP
//! server) fills in [`RawParams`] and [`Headers`], and
//! [`ServerParams::new`] validates them into a read-only snapshot.
//!
//! ```
//! use server_params::{Headers, Method, RawParams, ServerParams};
//!
//! let raw = RawParams::new()
//!     .request_method("POST")
//!     .request_uri("/index.php?id=1")
//!     .query_string("id=1")
//!     .server_port(8080)
//!     .content_length(11);
//! let headers = Headers::new().with("User-Agent", "curl/8.0");
//!
//! let params = ServerParams::new(&raw, &headers).unwrap();
//! assert_eq!(params.request_method(), Method::Post);
//! assert_eq!(params.server_port(), 8080);
//! assert_eq!(params.content_length(), Some(11));
//! assert_eq!(params.http_user_agent(), "curl/8.0");
//! ```
//!
//! # Features
//!
//! - `http`: conversions from the [`http`](https://docs.rs/http) crate's
//!   `HeaderMap` and `Method`.
//! - `serde`: `Serialize` for [`ServerParams`] and [`Method`].

mod error;
mod headers;
mod method;
mod params;
mod server;
pub mod vars;

pub use crate::{
    error::{ValidationError, ValidationResult},
    headers::Headers,
    method::Method,
    params::RawParams,
    server::ServerParams,
};
