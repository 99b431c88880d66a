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

//! Error types for server parameter construction.
//!
//! Accessors never fail, so the only error in this crate is the one
//! raised while validating raw CGI input.

/// Result type alias for server parameter construction.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Raw CGI input that could not be turned into
/// [`ServerParams`](crate::ServerParams).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// `REQUEST_METHOD` is not one of the known HTTP methods.
    #[error("Unrecognized request method `{0}`")]
    InvalidMethod(String),

    /// A port parsed as an integer but lies outside `0..=65535`.
    #[error("Port `{key}` out of range: {value}")]
    PortOutOfRange { key: &'static str, value: String },

    /// A port is not an integer at all.
    #[error("Port `{key}` is not a valid integer: `{value}`")]
    MalformedPort { key: &'static str, value: String },

    /// `CONTENT_LENGTH` is negative.
    #[error("Content length is negative: {0}")]
    NegativeContentLength(String),

    /// `CONTENT_LENGTH` is not an integer.
    #[error("Content length is not a valid integer: `{0}`")]
    MalformedContentLength(String),

    /// A request timestamp is malformed, negative or not finite.
    #[error("Request time `{key}` is invalid: `{value}`")]
    InvalidRequestTime { key: &'static str, value: String },

    /// `REQUEST_TIME` and `REQUEST_TIME_FLOAT` disagree on the whole second.
    #[error("Request time {time} does not match request time float {time_float}")]
    RequestTimeMismatch { time: i64, time_float: f64 },
}
