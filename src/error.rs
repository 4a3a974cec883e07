// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for AnyConn
//!
//! Every failure of a request surfaces as one of these variants. Nothing is
//! retried or swallowed; the underlying error is carried unchanged.

use thiserror::Error;

/// Result type alias for AnyConn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for AnyConn
#[derive(Error, Debug)]
pub enum Error {
    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Connection, write or mid-stream read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response claimed JSON but the body did not parse
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request body could not be serialized
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    /// Check if this is a URL error
    pub fn is_url(&self) -> bool {
        matches!(self, Error::Url(_))
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is a response decoding error
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}
