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

//! Parsed request headers.
//!
//! Header names are compared case-insensitively, values are kept as given.

use std::collections::{HashMap, hash_map::Entry};

/// Request headers keyed case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(HashMap<String, String>);

impl Headers {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous value with the same name.
    pub fn insert<K: AsRef<str>, V: Into<String>>(&mut self, name: K, value: V) {
        self.0.insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Adds a header, joining repeated names with `", "` the way
    /// servers fold them into a single CGI variable.
    pub fn append<K: AsRef<str>, V: AsRef<str>>(&mut self, name: K, value: V) {
        match self.0.entry(name.as_ref().to_ascii_lowercase()) {
            Entry::Occupied(mut entry) => {
                let current = entry.get_mut();
                current.push_str(", ");
                current.push_str(value.as_ref());
            }
            Entry::Vacant(entry) => {
                entry.insert(value.as_ref().to_owned());
            }
        }
    }

    /// Chainable form of [`Headers::insert`].
    #[inline]
    pub fn with<K: AsRef<str>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(lowercase name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for Headers {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        headers.extend(iter);
        headers
    }
}

#[cfg(feature = "http")]
impl From<&http::HeaderMap> for Headers {
    fn from(map: &http::HeaderMap) -> Self {
        let mut headers = Headers::new();
        for (name, value) in map {
            match value.to_str() {
                Ok(value) => headers.append(name.as_str(), value),
                Err(_) => tracing::debug!(header = %name, "Skip non-visible-ascii header value."),
            }
        }
        headers
    }
}
