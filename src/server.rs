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

//! Validated, immutable server parameters.
//!
//! [`ServerParams`] is built once per request from a [`RawParams`] and a
//! [`Headers`] set, and only exposes read-only accessors afterwards.

use crate::{
    error::{ValidationError, ValidationResult},
    headers::Headers,
    method::Method,
    params::RawParams,
    vars,
};
use std::{borrow::Cow, ffi::OsString};
use tracing::{debug, warn};

/// Typed snapshot of the `$_SERVER` parameters of one request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ServerParams {
    php_self: String,
    argv: Vec<String>,
    content_length: Option<u64>,
    content_type: String,
    gateway_interface: String,
    server_addr: String,
    server_name: String,
    server_software: String,
    server_protocol: String,
    request_method: Method,
    request_time: i64,
    request_time_float: f64,
    query_string: String,
    document_root: String,
    http_accept: String,
    http_accept_charset: String,
    http_accept_encoding: String,
    http_accept_language: String,
    http_connection: String,
    http_host: String,
    http_referer: String,
    http_user_agent: String,
    https: String,
    remote_addr: String,
    remote_host: String,
    remote_port: u16,
    remote_user: String,
    redirect_remote_user: String,
    script_filename: String,
    server_admin: String,
    server_port: u16,
    server_signature: String,
    path_translated: String,
    script_name: String,
    request_uri: String,
    php_auth_digest: String,
    php_auth_user: String,
    php_auth_pw: String,
    auth_type: String,
    path_info: String,
    orig_path_info: String,
}

/// CGI variables of the negotiation headers, in the order of
/// `ServerParams::header_values`.
const HEADER_VARS: [&str; 8] = [
    vars::HTTP_ACCEPT,
    vars::HTTP_ACCEPT_CHARSET,
    vars::HTTP_ACCEPT_ENCODING,
    vars::HTTP_ACCEPT_LANGUAGE,
    vars::HTTP_CONNECTION,
    vars::HTTP_HOST,
    vars::HTTP_REFERER,
    vars::HTTP_USER_AGENT,
];

impl ServerParams {
    /// Validates raw CGI parameters and request headers.
    ///
    /// Absent fields default to empty strings, zero ports and an unknown
    /// content length. Values are copied, later changes to `raw` or
    /// `headers` do not affect the result.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the request method, a port,
    /// the content length or the request time is invalid.
    pub fn new(raw: &RawParams<'_>, headers: &Headers) -> ValidationResult<Self> {
        Self::validate(raw, headers).inspect_err(|err| debug!(%err, "Reject server params."))
    }

    fn validate(raw: &RawParams<'_>, headers: &Headers) -> ValidationResult<Self> {
        let text = |key: &str| raw.var(key).unwrap_or_default().to_owned();
        let header = |name: &str, key: &str| {
            headers
                .get(name)
                .or_else(|| raw.var(key))
                .unwrap_or_default()
                .to_owned()
        };

        let request_method = match raw.var(vars::REQUEST_METHOD) {
            Some(method) => method.parse::<Method>()?,
            None => Method::default(),
        };
        let server_port = parse_port(raw, vars::SERVER_PORT)?;
        let remote_port = parse_port(raw, vars::REMOTE_PORT)?;
        let content_length = parse_content_length(raw)?;
        let (request_time, request_time_float) = parse_request_time(raw)?;

        let query_string = text(vars::QUERY_STRING);
        let argv = match raw.argv_slice() {
            Some(argv) => argv.iter().map(|arg| arg.to_string()).collect(),
            None => argv_from_query(&query_string),
        };
        check_argc(raw, argv.len());

        let params = Self {
            php_self: text(vars::PHP_SELF),
            argv,
            content_length,
            content_type: text(vars::CONTENT_TYPE),
            gateway_interface: text(vars::GATEWAY_INTERFACE),
            server_addr: text(vars::SERVER_ADDR),
            server_name: text(vars::SERVER_NAME),
            server_software: text(vars::SERVER_SOFTWARE),
            server_protocol: text(vars::SERVER_PROTOCOL),
            request_method,
            request_time,
            request_time_float,
            query_string,
            document_root: text(vars::DOCUMENT_ROOT),
            http_accept: header("accept", vars::HTTP_ACCEPT),
            http_accept_charset: header("accept-charset", vars::HTTP_ACCEPT_CHARSET),
            http_accept_encoding: header("accept-encoding", vars::HTTP_ACCEPT_ENCODING),
            http_accept_language: header("accept-language", vars::HTTP_ACCEPT_LANGUAGE),
            http_connection: header("connection", vars::HTTP_CONNECTION),
            http_host: header("host", vars::HTTP_HOST),
            http_referer: header("referer", vars::HTTP_REFERER),
            http_user_agent: header("user-agent", vars::HTTP_USER_AGENT),
            https: text(vars::HTTPS),
            remote_addr: text(vars::REMOTE_ADDR),
            remote_host: text(vars::REMOTE_HOST),
            remote_port,
            remote_user: text(vars::REMOTE_USER),
            redirect_remote_user: text(vars::REDIRECT_REMOTE_USER),
            script_filename: text(vars::SCRIPT_FILENAME),
            server_admin: text(vars::SERVER_ADMIN),
            server_port,
            server_signature: text(vars::SERVER_SIGNATURE),
            path_translated: text(vars::PATH_TRANSLATED),
            script_name: text(vars::SCRIPT_NAME),
            request_uri: text(vars::REQUEST_URI),
            php_auth_digest: text(vars::PHP_AUTH_DIGEST),
            php_auth_user: text(vars::PHP_AUTH_USER),
            php_auth_pw: text(vars::PHP_AUTH_PW),
            auth_type: text(vars::AUTH_TYPE),
            path_info: text(vars::PATH_INFO),
            orig_path_info: text(vars::ORIG_PATH_INFO),
        };

        debug!(
            method = %params.request_method,
            uri = %params.request_uri,
            "Server params constructed."
        );

        Ok(params)
    }

    /// Builds the parameters of a classic CGI process from its environment
    /// variables and command line arguments.
    ///
    /// Variables and arguments that are not valid unicode are converted lossily.
    pub fn from_process_env() -> ValidationResult<Self> {
        Self::from_os_env(std::env::vars_os(), std::env::args_os())
    }

    /// Builds the parameters from environment-style variables and arguments,
    /// as [`ServerParams::from_process_env`] does with those of the process.
    pub fn from_os_env<V, A>(vars: V, args: A) -> ValidationResult<Self>
    where
        V: IntoIterator<Item = (OsString, OsString)>,
        A: IntoIterator<Item = OsString>,
    {
        let raw: RawParams<'static> = vars
            .into_iter()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect();
        let raw = raw.argv(
            args.into_iter()
                .map(|arg| arg.to_string_lossy().into_owned()),
        );
        Self::new(&raw, &Headers::default())
    }

    /// Exports the parameters back to CGI variables.
    ///
    /// Headers are written as `HTTP_*` variables, numeric fields in their
    /// decimal form, and an unknown content length is left out.
    pub fn to_raw(&self) -> RawParams<'_> {
        let mut raw = RawParams::new()
            .php_self(self.php_self.as_str())
            .content_type(self.content_type.as_str())
            .gateway_interface(self.gateway_interface.as_str())
            .server_addr(self.server_addr.as_str())
            .server_name(self.server_name.as_str())
            .server_software(self.server_software.as_str())
            .server_protocol(self.server_protocol.as_str())
            .request_method(self.request_method.as_str())
            .request_time(self.request_time)
            .request_time_float(self.request_time_float)
            .query_string(self.query_string.as_str())
            .document_root(self.document_root.as_str())
            .https(self.https.as_str())
            .remote_addr(self.remote_addr.as_str())
            .remote_host(self.remote_host.as_str())
            .remote_port(self.remote_port)
            .remote_user(self.remote_user.as_str())
            .redirect_remote_user(self.redirect_remote_user.as_str())
            .script_filename(self.script_filename.as_str())
            .server_admin(self.server_admin.as_str())
            .server_port(self.server_port)
            .server_signature(self.server_signature.as_str())
            .path_translated(self.path_translated.as_str())
            .script_name(self.script_name.as_str())
            .request_uri(self.request_uri.as_str())
            .php_auth_digest(self.php_auth_digest.as_str())
            .php_auth_user(self.php_auth_user.as_str())
            .php_auth_pw(self.php_auth_pw.as_str())
            .auth_type(self.auth_type.as_str())
            .path_info(self.path_info.as_str())
            .orig_path_info(self.orig_path_info.as_str())
            .custom(vars::ARGC, self.argc().to_string())
            .argv(self.argv.iter().map(String::as_str));

        if let Some(content_length) = self.content_length {
            raw = raw.content_length(content_length);
        }

        for (key, value) in HEADER_VARS.into_iter().zip(self.header_values()) {
            raw.insert(Cow::Borrowed(key), Cow::Borrowed(value));
        }

        raw
    }

    fn header_values(&self) -> [&str; 8] {
        [
            self.http_accept.as_str(),
            self.http_accept_charset.as_str(),
            self.http_accept_encoding.as_str(),
            self.http_accept_language.as_str(),
            self.http_connection.as_str(),
            self.http_host.as_str(),
            self.http_referer.as_str(),
            self.http_user_agent.as_str(),
        ]
    }

    /// The filename of the currently executing script, relative to the document root.
    pub fn php_self(&self) -> &str {
        &self.php_self
    }

    /// Arguments passed to the script.
    ///
    /// For a web request without explicit arguments this is the query
    /// string, split on `+`.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Number of arguments, always `argv().len()`.
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    /// Size of the message body, `None` when unknown.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Media type of the message body.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// CGI revision of the server, i.e. `CGI/1.1`.
    pub fn gateway_interface(&self) -> &str {
        &self.gateway_interface
    }

    /// IP address of the server under which the current script is executing.
    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    /// Host name of the server, or of the virtual host serving the request.
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Server identification string, given in the response headers.
    pub fn server_software(&self) -> &str {
        &self.server_software
    }

    /// Protocol of the request, i.e. `HTTP/1.0`.
    pub fn server_protocol(&self) -> &str {
        &self.server_protocol
    }

    /// Method used to access the page, i.e. `GET`, `HEAD`, `POST`, `PUT`.
    pub fn request_method(&self) -> Method {
        self.request_method
    }

    /// Start of the request, in seconds since the epoch.
    pub fn request_time(&self) -> i64 {
        self.request_time
    }

    /// Start of the request, in seconds since the epoch with sub-second precision.
    pub fn request_time_float(&self) -> f64 {
        self.request_time_float
    }

    /// The query string, if any, via which the page was accessed.
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Document root directory, as configured in the server.
    pub fn document_root(&self) -> &str {
        &self.document_root
    }

    /// Contents of the `Accept` header.
    pub fn http_accept(&self) -> &str {
        &self.http_accept
    }

    /// Contents of the `Accept-Charset` header, i.e. `iso-8859-1,*,utf-8`.
    pub fn http_accept_charset(&self) -> &str {
        &self.http_accept_charset
    }

    /// Contents of the `Accept-Encoding` header, i.e. `gzip`.
    pub fn http_accept_encoding(&self) -> &str {
        &self.http_accept_encoding
    }

    /// Contents of the `Accept-Language` header, i.e. `en`.
    pub fn http_accept_language(&self) -> &str {
        &self.http_accept_language
    }

    /// Contents of the `Connection` header, i.e. `Keep-Alive`.
    pub fn http_connection(&self) -> &str {
        &self.http_connection
    }

    /// Contents of the `Host` header.
    pub fn http_host(&self) -> &str {
        &self.http_host
    }

    /// Address of the page which referred the user agent here, if any.
    pub fn http_referer(&self) -> &str {
        &self.http_referer
    }

    /// Contents of the `User-Agent` header.
    pub fn http_user_agent(&self) -> &str {
        &self.http_user_agent
    }

    /// Non-empty when the request came over HTTPS.
    pub fn https(&self) -> &str {
        &self.https
    }

    /// Whether the request came over HTTPS.
    ///
    /// IIS reports `off` for plain requests, which counts as not secure.
    pub fn is_https(&self) -> bool {
        !self.https.is_empty() && !self.https.eq_ignore_ascii_case("off")
    }

    /// IP address of the client.
    pub fn remote_addr(&self) -> &str {
        &self.remote_addr
    }

    /// Host name of the client, empty when no reverse lookup was done.
    pub fn remote_host(&self) -> &str {
        &self.remote_host
    }

    /// Port used on the client machine to talk to the web server.
    pub fn remote_port(&self) -> u16 {
        self.remote_port
    }

    /// The authenticated user.
    pub fn remote_user(&self) -> &str {
        &self.remote_user
    }

    /// The authenticated user, if the request was internally redirected.
    pub fn redirect_remote_user(&self) -> &str {
        &self.redirect_remote_user
    }

    /// Absolute path of the currently executing script.
    pub fn script_filename(&self) -> &str {
        &self.script_filename
    }

    /// The `SERVER_ADMIN` contact of the (virtual) host.
    pub fn server_admin(&self) -> &str {
        &self.server_admin
    }

    /// Port on the server machine used by the web server.
    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    /// Server version and virtual host name added to server-generated pages.
    pub fn server_signature(&self) -> &str {
        &self.server_signature
    }

    /// Filesystem path to the script, after virtual-to-real mapping.
    pub fn path_translated(&self) -> &str {
        &self.path_translated
    }

    /// Path of the current script, for pages which need to point to themselves.
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// The URI given to access this page, i.e. `/index.html`.
    pub fn request_uri(&self) -> &str {
        &self.request_uri
    }

    /// `Authorization` header of a Digest authentication.
    pub fn php_auth_digest(&self) -> &str {
        &self.php_auth_digest
    }

    /// Username provided by the user during HTTP authentication.
    pub fn php_auth_user(&self) -> &str {
        &self.php_auth_user
    }

    /// Password provided by the user during HTTP authentication.
    pub fn php_auth_pw(&self) -> &str {
        &self.php_auth_pw
    }

    /// Authentication type, i.e. `Basic`.
    pub fn auth_type(&self) -> &str {
        &self.auth_type
    }

    /// Client path information between the script name and the query string.
    pub fn path_info(&self) -> &str {
        &self.path_info
    }

    /// `PATH_INFO` before the server processed it.
    pub fn orig_path_info(&self) -> &str {
        &self.orig_path_info
    }
}

/// A variable that is set to a non-empty value.
fn present<'r>(raw: &'r RawParams<'_>, key: &str) -> Option<&'r str> {
    raw.var(key).filter(|value| !value.is_empty())
}

fn parse_port(raw: &RawParams<'_>, key: &'static str) -> ValidationResult<u16> {
    let Some(value) = present(raw, key) else {
        return Ok(0);
    };
    let port = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::MalformedPort { key, value: value.to_owned() })?;
    u16::try_from(port).map_err(|_| ValidationError::PortOutOfRange { key, value: value.to_owned() })
}

fn parse_content_length(raw: &RawParams<'_>) -> ValidationResult<Option<u64>> {
    let Some(value) = present(raw, vars::CONTENT_LENGTH) else {
        return Ok(None);
    };
    match value.trim().parse::<i128>() {
        Ok(length) if length < 0 => Err(ValidationError::NegativeContentLength(value.to_owned())),
        Ok(length) => u64::try_from(length)
            .map(Some)
            .map_err(|_| ValidationError::MalformedContentLength(value.to_owned())),
        Err(_) => Err(ValidationError::MalformedContentLength(value.to_owned())),
    }
}

/// Largest timestamp whose float form still truncates back to it.
const MAX_REQUEST_TIME: i64 = 1 << f64::MANTISSA_DIGITS;

fn parse_request_time(raw: &RawParams<'_>) -> ValidationResult<(i64, f64)> {
    let invalid = |key: &'static str, value: &str| ValidationError::InvalidRequestTime {
        key,
        value: value.to_owned(),
    };

    let time = present(raw, vars::REQUEST_TIME)
        .map(|value| match value.trim().parse::<i64>() {
            Ok(time) if (0..=MAX_REQUEST_TIME).contains(&time) => Ok(time),
            _ => Err(invalid(vars::REQUEST_TIME, value)),
        })
        .transpose()?;
    let time_float = present(raw, vars::REQUEST_TIME_FLOAT)
        .map(|value| match value.trim().parse::<f64>() {
            Ok(time) if (0.0..=MAX_REQUEST_TIME as f64).contains(&time) => Ok(time),
            _ => Err(invalid(vars::REQUEST_TIME_FLOAT, value)),
        })
        .transpose()?;

    match (time, time_float) {
        (Some(time), Some(time_float)) if time_float.trunc() as i64 != time => {
            Err(ValidationError::RequestTimeMismatch { time, time_float })
        }
        (Some(_), Some(time_float)) | (None, Some(time_float)) => {
            Ok((time_float.trunc() as i64, time_float))
        }
        (Some(time), None) => Ok((time, time as f64)),
        (None, None) => Ok((0, 0.0)),
    }
}

/// PHP splits the query string of a web request on `+` to build `argv`.
fn argv_from_query(query_string: &str) -> Vec<String> {
    if query_string.is_empty() {
        return Vec::new();
    }
    query_string.split('+').map(str::to_owned).collect()
}

fn check_argc(raw: &RawParams<'_>, len: usize) {
    if let Some(argc) = present(raw, vars::ARGC)
        && argc.trim().parse::<usize>().ok() != Some(len)
    {
        warn!(argc, argv_len = len, "Ignore argc inconsistent with argv.");
    }
}
