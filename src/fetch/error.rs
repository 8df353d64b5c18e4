use std::fmt;

/// Sentinel status for "no HTTP status was obtainable". The real HTTP
/// transport always has a status once a response arrives, so this shows up
/// only from non-HTTP transports and in tests.
pub const UNKNOWN_STATUS: i32 = -999;

/// Everything that can go wrong between a URL and a view-ready resource.
///
/// Transport and decode failures are both folded in here at the fetcher
/// boundary; nothing above it ever sees a raw reqwest or serde error.
/// Causes are carried as strings so the error stays `Clone`: a fallback
/// view-model keeps the error that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The URL could not be parsed. No request is attempted.
    BadUrl(String),
    /// Connection-level failure (DNS, timeout, refused). Cause preserved.
    Network(String),
    /// The server replied outside the 2xx range, or `UNKNOWN_STATUS` when
    /// no status code could be obtained.
    BadStatus(i32),
    /// The response body did not match the record schema.
    Decode(String),
    /// The bytes were not a decodable bitmap.
    ImageDecode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadUrl(msg) => write!(f, "bad URL: {msg}"),
            AppError::Network(msg) => write!(f, "network error: {msg}"),
            AppError::BadStatus(code) => write!(f, "bad status code: {code}"),
            AppError::Decode(msg) => write!(f, "decode error: {msg}"),
            AppError::ImageDecode(msg) => write!(f, "image decode error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}
