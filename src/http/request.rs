// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Wire-ready request built from `RequestOptions`

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use super::body::{self, stringify};
use super::content_type::ContentType;
use super::headers::CONTENT_TYPE;
use super::options::{DataType, Fields, Method, RequestData, RequestOptions};
use super::{DEFAULT_HEADERS, IDENTITY_HEADERS};
use crate::error::Result;

/// Fully resolved request: final URL, merged headers and encoded body
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Request method
    pub method: Method,
    /// Final URL including injected query parameters
    pub url: Url,
    /// Merged headers
    pub headers: HeaderMap,
    /// Encoded body, `None` for GET or when nothing was encoded
    pub body: Option<Bytes>,
}

impl PreparedRequest {
    /// Build the wire request from caller options
    pub fn from_options(options: &RequestOptions) -> Result<Self> {
        let mut url = options.url.to_url()?;
        let mut headers = merge_headers(&options.header);

        let body = match (options.method, options.data.as_ref()) {
            (Method::Get, Some(RequestData::Fields(data))) => {
                body::inject_query(&mut url, data);
                None
            }
            (Method::Get, _) => None,
            (Method::Post, Some(RequestData::Fields(data))) => {
                Some(encode_post(data, options.data_type, &mut headers)?)
            }
            (Method::Post, Some(RequestData::Raw(raw))) => Some(Bytes::from(raw.clone())),
            (Method::Post, None) => None,
        };

        Ok(Self {
            method: options.method,
            url,
            headers,
            body: body.filter(|b| !b.is_empty()),
        })
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Merge default headers, caller headers and the identity header, in that
/// order of precedence. Null values and invalid names/values are skipped.
pub fn merge_headers(caller: &Fields) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in DEFAULT_HEADERS.iter() {
        insert(&mut headers, name, value);
    }
    for (name, value) in caller {
        if let Some(value) = stringify(value) {
            insert(&mut headers, name, &value);
        }
    }
    for (name, value) in IDENTITY_HEADERS.iter() {
        insert(&mut headers, name, value);
    }
    headers
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
    if let (Ok(name), Ok(value)) = (
        HeaderName::try_from(name),
        HeaderValue::try_from(value),
    ) {
        headers.insert(name, value);
    }
}

fn encode_post(data: &Fields, data_type: DataType, headers: &mut HeaderMap) -> Result<Bytes> {
    // Informational only; `data_type` picks the encoding.
    let requested = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(ContentType::parse)
        .unwrap_or_else(|| ContentType::parse("application/json"));
    tracing::trace!(requested = ?requested, ?data_type, "Encoding request body");

    let (body, content_type) = match data_type {
        DataType::Json => (body::encode_json(data)?, "application/json".to_string()),
        DataType::Form => (
            body::encode_form(data),
            "application/x-www-form-urlencoded".to_string(),
        ),
        DataType::FormData => {
            let boundary = body::generate_boundary();
            let body = body::encode_multipart(data, &boundary);
            tracing::trace!(body = %String::from_utf8_lossy(&body), "Multipart body");
            (body, format!("multipart/form-data; boundary={}", boundary))
        }
    };

    insert(headers, CONTENT_TYPE, &content_type);
    Ok(body)
}
