// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # AnyConn - Minimal HTTP(S) Request Helper
//!
//! Performs one request per call and resolves with the status code, the
//! decoded body and the response headers.
//!
//! ## Features
//!
//! - GET data becomes query parameters, POST data is encoded as JSON,
//!   urlencoded form or multipart form fields
//! - Response bodies decoded from the content type: JSON, text or raw bytes
//! - Fixed `user-agent` identity header the caller cannot override
//! - `https` URLs go over rustls, everything else over plain TCP
//!
//! ## Example
//!
//! ```rust,no_run
//! use anyconn::{DataType, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let response = anyconn::request(
//!         RequestOptions::post("https://example.com/login")
//!             .data_type(DataType::Form)
//!             .field("user", "alice")
//!             .field("remember", true),
//!     )
//!     .await?;
//!
//!     println!("{} {:?}", response.status_code, response.data);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{request, RequestExecutor, Transport};
pub use http::{ContentType, Charset};
pub use http::{DataType, Fields, Method, RequestData, RequestOptions, Target};
pub use http::{PreparedRequest, Response, ResponseData};
pub use http::IDENTITY_USER_AGENT;

/// AnyConn version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
