// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for AnyConn
//!
//! Turns `RequestOptions` into a wire request, dispatches it once and decodes
//! the buffered response according to its content type.

mod body;
mod client;
mod content_type;
mod options;
mod request;
mod response;

use lazy_static::lazy_static;

pub use body::{encode_form, encode_json, encode_multipart, generate_boundary, BOUNDARY_PREFIX};
pub use client::{request, RequestExecutor, Transport};
pub use content_type::{Charset, ContentType};
pub use options::{DataType, Fields, Method, RequestData, RequestOptions, Target};
pub use request::{merge_headers, PreparedRequest};
pub use response::{Response, ResponseData};

/// Identity user agent, sent on every request
pub const IDENTITY_USER_AGENT: &str = "AnyConn/0.0.1";

lazy_static! {
    /// Headers sent unless the caller overrides them
    pub static ref DEFAULT_HEADERS: Vec<(&'static str, &'static str)> = vec![
        (headers::ACCEPT, "*/*"),
        (headers::CONNECTION, "keep-alive"),
    ];

    /// Headers the caller cannot override
    pub static ref IDENTITY_HEADERS: Vec<(&'static str, &'static str)> =
        vec![(headers::USER_AGENT, IDENTITY_USER_AGENT)];
}

/// Common HTTP headers
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const CONNECTION: &str = "connection";
    pub const CONTENT_TYPE: &str = "content-type";
    pub const USER_AGENT: &str = "user-agent";
}
