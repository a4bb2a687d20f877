/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// Continuation link taken from the `paging.next` field of a media listing.
///
/// It is a complete URL (query string, access token and all) and is fetched as is with
/// [`Client::next_page`](crate::basic_display::Client::next_page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Next(String);

impl Next {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Next {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for Next {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl AsRef<str> for Next {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
