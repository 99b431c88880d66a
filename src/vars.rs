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

//! `$_SERVER` variable names.
//!
//! <https://www.php.net/manual/en/reserved.variables.server.php>

pub const PHP_SELF: &str = "PHP_SELF";
pub const ARGC: &str = "argc";
pub const GATEWAY_INTERFACE: &str = "GATEWAY_INTERFACE";
pub const SERVER_ADDR: &str = "SERVER_ADDR";
pub const SERVER_NAME: &str = "SERVER_NAME";
pub const SERVER_SOFTWARE: &str = "SERVER_SOFTWARE";
pub const SERVER_PROTOCOL: &str = "SERVER_PROTOCOL";
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";
pub const REQUEST_TIME: &str = "REQUEST_TIME";
pub const REQUEST_TIME_FLOAT: &str = "REQUEST_TIME_FLOAT";
pub const QUERY_STRING: &str = "QUERY_STRING";
pub const DOCUMENT_ROOT: &str = "DOCUMENT_ROOT";
pub const HTTPS: &str = "HTTPS";
pub const REMOTE_ADDR: &str = "REMOTE_ADDR";
pub const REMOTE_HOST: &str = "REMOTE_HOST";
pub const REMOTE_PORT: &str = "REMOTE_PORT";
pub const REMOTE_USER: &str = "REMOTE_USER";
pub const REDIRECT_REMOTE_USER: &str = "REDIRECT_REMOTE_USER";
pub const SCRIPT_FILENAME: &str = "SCRIPT_FILENAME";
pub const SERVER_ADMIN: &str = "SERVER_ADMIN";
pub const SERVER_PORT: &str = "SERVER_PORT";
pub const SERVER_SIGNATURE: &str = "SERVER_SIGNATURE";
pub const PATH_TRANSLATED: &str = "PATH_TRANSLATED";
pub const SCRIPT_NAME: &str = "SCRIPT_NAME";
pub const REQUEST_URI: &str = "REQUEST_URI";
pub const PHP_AUTH_DIGEST: &str = "PHP_AUTH_DIGEST";
pub const PHP_AUTH_USER: &str = "PHP_AUTH_USER";
pub const PHP_AUTH_PW: &str = "PHP_AUTH_PW";
pub const AUTH_TYPE: &str = "AUTH_TYPE";
pub const PATH_INFO: &str = "PATH_INFO";
pub const ORIG_PATH_INFO: &str = "ORIG_PATH_INFO";
pub const CONTENT_LENGTH: &str = "CONTENT_LENGTH";
pub const CONTENT_TYPE: &str = "CONTENT_TYPE";

// Request headers, as CGI exposes them.
pub const HTTP_ACCEPT: &str = "HTTP_ACCEPT";
pub const HTTP_ACCEPT_CHARSET: &str = "HTTP_ACCEPT_CHARSET";
pub const HTTP_ACCEPT_ENCODING: &str = "HTTP_ACCEPT_ENCODING";
pub const HTTP_ACCEPT_LANGUAGE: &str = "HTTP_ACCEPT_LANGUAGE";
pub const HTTP_CONNECTION: &str = "HTTP_CONNECTION";
pub const HTTP_HOST: &str = "HTTP_HOST";
pub const HTTP_REFERER: &str = "HTTP_REFERER";
pub const HTTP_USER_AGENT: &str = "HTTP_USER_AGENT";
