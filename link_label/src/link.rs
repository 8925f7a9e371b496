// Copyright 2025 the Link Label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use url::Url;

/// The payload of a link run.
///
/// A URL-typed value is reported as [`Link::Url`]; any other value is carried as an opaque
/// string. Strings are never parsed into URLs behind the caller's back, so a string link is
/// reported exactly as it was set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Link {
    /// A parsed URL.
    Url(Url),
    /// Any other link value.
    Text(String),
}

impl Link {
    /// Parse `input` as a URL link.
    pub fn parse_url(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self::Url)
    }

    /// The URL, if this is a URL link.
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            Self::Text(_) => None,
        }
    }

    /// The link as a string: the serialized URL, or the text as given.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Url(url) => url.as_str(),
            Self::Text(text) => text,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Url> for Link {
    fn from(url: Url) -> Self {
        Self::Url(url)
    }
}

impl From<String> for Link {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Link {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}
