// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `wled_lib` library.
//!
//! Failures fall into a small hierarchy: network transport failures,
//! malformed device bodies, local encoding failures, and value validation.
//! A preset that is absent from the device is not an error; lookups return
//! `Option` instead.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be completed or the device answered non-2xx.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The device answered with a body that could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A payload could not be built before sending it.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// A value was rejected during validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

impl Error {
    /// Returns `true` if this is a network failure.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns `true` if this is a decoding failure of a device body.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Errors raised while talking to the device.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The HTTP request failed (connection refused, timeout, body read).
    #[error("request to {url} failed: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The device answered with a non-2xx status.
    #[error("{url} answered HTTP {status} {reason}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The canonical reason phrase.
        reason: String,
    },

    /// The host could not be turned into a device address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors raised while decoding a device response body.
///
/// Every variant carries the resource URL and the raw body text so a failed
/// read can be diagnosed without re-fetching.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body is not the expected JSON document.
    #[error("invalid JSON from {url} ('{body}'): {source}")]
    Json {
        /// The resource URL.
        url: String,
        /// The raw response body.
        body: String,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The body is not well-formed XML.
    #[error("invalid XML from {url} ('{body}'): {message}")]
    Xml {
        /// The resource URL.
        url: String,
        /// The raw response body.
        body: String,
        /// Description of the XML failure.
        message: String,
    },

    /// The XML root element is not the one the resource documents.
    #[error("unexpected root <{found}> from {url}, expected <{expected}>")]
    UnexpectedRoot {
        /// The resource URL.
        url: String,
        /// The documented root element.
        expected: &'static str,
        /// The root element that was found.
        found: String,
    },
}

impl ParseError {
    /// Returns the raw body that failed to decode, if any.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Json { body, .. } | Self::Xml { body, .. } => Some(body),
            Self::UnexpectedRoot { .. } => None,
        }
    }

    /// Returns the URL of the resource that failed to decode.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Json { url, .. } | Self::Xml { url, .. } | Self::UnexpectedRoot { url, .. } => {
                url
            }
        }
    }
}

/// Errors raised while building an outgoing payload.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The preset collection could not be serialized.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A color tuple does not have 3 (RGB) or 4 (RGBW) channels.
    #[error("color must have 3 or 4 channels, got {0}")]
    InvalidColor(usize),

    /// A preset id was empty.
    #[error("preset id must not be empty")]
    EmptyPresetId,
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 1,
            max: 250,
            actual: 300,
        };
        assert_eq!(err.to_string(), "value 300 is out of range [1, 250]");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidColor(2).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidColor(2))));
    }

    #[test]
    fn status_error_display() {
        let err = NetworkError::Status {
            url: "http://wled.local/win".to_string(),
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "http://wled.local/win answered HTTP 404 Not Found"
        );
        assert!(Error::from(err).is_network());
    }

    #[test]
    fn json_parse_error_keeps_body() {
        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = ParseError::Json {
            url: "http://wled.local/presets.json".to_string(),
            body: "nope".to_string(),
            source,
        };
        assert_eq!(err.body(), Some("nope"));
        assert_eq!(err.url(), "http://wled.local/presets.json");
        assert!(err.to_string().contains("'nope'"));
        assert!(Error::from(err).is_parse());
    }

    #[test]
    fn unexpected_root_has_no_body() {
        let err = ParseError::UnexpectedRoot {
            url: "http://wled.local/win".to_string(),
            expected: "vs",
            found: "html".to_string(),
        };
        assert!(err.body().is_none());
        assert_eq!(
            err.to_string(),
            "unexpected root <html> from http://wled.local/win, expected <vs>"
        );
    }
}
