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

//! Raw CGI parameters builder and container.
//!
//! This module provides the `RawParams` struct, the untyped input from
//! which a [`ServerParams`](crate::ServerParams) is validated. It is
//! what a CGI gateway or an HTTP server fills in before handing the
//! request over, with convenient methods for setting common CGI parameters.

use crate::vars;
use std::{
    borrow::Cow,
    collections::HashMap,
    ops::{Deref, DerefMut},
};

/// Raw CGI environment, please reference to nginx-php-fpm fastcgi_params.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams<'a> {
    vars: HashMap<Cow<'a, str>, Cow<'a, str>>,
    argv: Option<Vec<Cow<'a, str>>>,
}

macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident => $key:path;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name<S: Into<Cow<'a, str>>>(mut self, $name: S) -> Self {
                self.vars.insert($key.into(), $name.into());
                self
            }
        )*
    };
}

impl<'a> RawParams<'a> {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom parameter with the given key and value.
    ///
    /// # Arguments
    ///
    /// * `key` - The parameter name
    /// * `value` - The parameter value
    #[inline]
    pub fn custom<K: Into<Cow<'a, str>>, S: Into<Cow<'a, str>>>(
        mut self, key: K, value: S,
    ) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets the argument vector.
    ///
    /// Without it, the argument vector is taken from the query string.
    #[inline]
    pub fn argv<I, S>(mut self, argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'a, str>>,
    {
        self.argv = Some(argv.into_iter().map(Into::into).collect());
        self
    }

    /// The argument vector, if one was set.
    pub fn argv_slice(&self) -> Option<&[Cow<'a, str>]> {
        self.argv.as_deref()
    }

    setters! {
        /// Sets the PHP_SELF parameter.
        php_self => vars::PHP_SELF;
        /// Sets the GATEWAY_INTERFACE parameter (e.g., "CGI/1.1").
        gateway_interface => vars::GATEWAY_INTERFACE;
        /// Sets the SERVER_SOFTWARE parameter.
        server_software => vars::SERVER_SOFTWARE;
        /// Sets the SERVER_PROTOCOL parameter (e.g., "HTTP/1.1").
        server_protocol => vars::SERVER_PROTOCOL;
        /// Sets the REQUEST_METHOD parameter (e.g., "GET", "POST").
        request_method => vars::REQUEST_METHOD;
        /// Sets the SCRIPT_FILENAME parameter.
        script_filename => vars::SCRIPT_FILENAME;
        /// Sets the SCRIPT_NAME parameter.
        script_name => vars::SCRIPT_NAME;
        /// Sets the PATH_INFO parameter.
        path_info => vars::PATH_INFO;
        /// Sets the ORIG_PATH_INFO parameter.
        orig_path_info => vars::ORIG_PATH_INFO;
        /// Sets the PATH_TRANSLATED parameter.
        path_translated => vars::PATH_TRANSLATED;
        /// Sets the QUERY_STRING parameter.
        query_string => vars::QUERY_STRING;
        /// Sets the REQUEST_URI parameter.
        request_uri => vars::REQUEST_URI;
        /// Sets the DOCUMENT_ROOT parameter.
        document_root => vars::DOCUMENT_ROOT;
        /// Sets the REMOTE_ADDR parameter.
        remote_addr => vars::REMOTE_ADDR;
        /// Sets the REMOTE_HOST parameter.
        remote_host => vars::REMOTE_HOST;
        /// Sets the REMOTE_USER parameter.
        remote_user => vars::REMOTE_USER;
        /// Sets the REDIRECT_REMOTE_USER parameter.
        redirect_remote_user => vars::REDIRECT_REMOTE_USER;
        /// Sets the SERVER_ADDR parameter.
        server_addr => vars::SERVER_ADDR;
        /// Sets the SERVER_NAME parameter.
        server_name => vars::SERVER_NAME;
        /// Sets the SERVER_ADMIN parameter.
        server_admin => vars::SERVER_ADMIN;
        /// Sets the SERVER_SIGNATURE parameter.
        server_signature => vars::SERVER_SIGNATURE;
        /// Sets the CONTENT_TYPE parameter.
        content_type => vars::CONTENT_TYPE;
        /// Sets the HTTPS parameter, usually "on".
        https => vars::HTTPS;
        /// Sets the AUTH_TYPE parameter.
        auth_type => vars::AUTH_TYPE;
        /// Sets the PHP_AUTH_USER parameter.
        php_auth_user => vars::PHP_AUTH_USER;
        /// Sets the PHP_AUTH_PW parameter.
        php_auth_pw => vars::PHP_AUTH_PW;
        /// Sets the PHP_AUTH_DIGEST parameter.
        php_auth_digest => vars::PHP_AUTH_DIGEST;
    }

    /// Sets the REMOTE_PORT parameter.
    ///
    /// # Arguments
    ///
    /// * `remote_port` - The remote client port number
    #[inline]
    pub fn remote_port(mut self, remote_port: u16) -> Self {
        self.vars
            .insert(vars::REMOTE_PORT.into(), remote_port.to_string().into());
        self
    }

    /// Sets the SERVER_PORT parameter.
    ///
    /// # Arguments
    ///
    /// * `server_port` - The server port number
    #[inline]
    pub fn server_port(mut self, server_port: u16) -> Self {
        self.vars
            .insert(vars::SERVER_PORT.into(), server_port.to_string().into());
        self
    }

    /// Sets the CONTENT_LENGTH parameter.
    ///
    /// # Arguments
    ///
    /// * `content_length` - The length of the request body in bytes
    #[inline]
    pub fn content_length(mut self, content_length: u64) -> Self {
        self.vars.insert(
            vars::CONTENT_LENGTH.into(),
            content_length.to_string().into(),
        );
        self
    }

    /// Sets the REQUEST_TIME parameter, in seconds since the epoch.
    #[inline]
    pub fn request_time(mut self, request_time: i64) -> Self {
        self.vars
            .insert(vars::REQUEST_TIME.into(), request_time.to_string().into());
        self
    }

    /// Sets the REQUEST_TIME_FLOAT parameter, in seconds since the epoch.
    #[inline]
    pub fn request_time_float(mut self, request_time_float: f64) -> Self {
        self.vars.insert(
            vars::REQUEST_TIME_FLOAT.into(),
            request_time_float.to_string().into(),
        );
        self
    }

    /// Looks up a parameter by its exact key.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|value| value.as_ref())
    }
}

impl<'a> Deref for RawParams<'a> {
    type Target = HashMap<Cow<'a, str>, Cow<'a, str>>;

    fn deref(&self) -> &Self::Target {
        &self.vars
    }
}

impl<'a> DerefMut for RawParams<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vars
    }
}

impl<'a, K: Into<Cow<'a, str>>, V: Into<Cow<'a, str>>> FromIterator<(K, V)> for RawParams<'a> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            argv: None,
        }
    }
}

impl From<HashMap<String, String>> for RawParams<'static> {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl<'a> From<RawParams<'a>> for HashMap<Cow<'a, str>, Cow<'a, str>> {
    fn from(params: RawParams<'a>) -> Self {
        params.vars
    }
}
