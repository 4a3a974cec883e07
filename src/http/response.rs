// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::content_type::ContentType;
use crate::error::{Error, Result};

/// Decoded response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseData {
    /// Parsed JSON (`*/json` content types)
    Json(Value),
    /// Charset-decoded text (`text/*` content types)
    Text(String),
    /// Raw bytes for everything else
    Binary(Bytes),
}

impl ResponseData {
    /// Decode buffered bytes according to the response descriptor
    pub fn decode(content_type: &ContentType, bytes: Bytes) -> Result<Self> {
        if content_type.is_json() {
            let text = content_type.decode(&bytes);
            return Ok(ResponseData::Json(serde_json::from_str(&text)?));
        }
        if content_type.is_text() {
            return Ok(ResponseData::Text(content_type.decode(&bytes)));
        }
        Ok(ResponseData::Binary(bytes))
    }

    /// JSON value, if the body was JSON
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseData::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Text, if the body was text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseData::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Raw bytes, if the body was binary
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            ResponseData::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// Result of one request
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status_code: u16,
    /// Decoded body
    pub data: ResponseData,
    /// Response headers
    pub headers: HeaderMap,
}

impl Response {
    /// Create a response from a status and buffered body
    pub fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Result<Self> {
        let content_type = ContentType::from_headers(&headers);
        let data = ResponseData::decode(&content_type, body)?;
        Ok(Self {
            status_code: status.as_u16(),
            data,
            headers,
        })
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Descriptor of the response content type
    pub fn content_type(&self) -> ContentType {
        ContentType::from_headers(&self.headers)
    }

    /// Deserialize a JSON body into `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match &self.data {
            ResponseData::Json(value) => serde_json::from_value(value.clone()).map_err(Error::from),
            ResponseData::Text(text) => serde_json::from_str(text).map_err(Error::from),
            ResponseData::Binary(bytes) => serde_json::from_slice(bytes).map_err(Error::from),
        }
    }

    /// Body as text; JSON is re-serialized, binary is decoded lossily
    pub fn text(&self) -> String {
        match &self.data {
            ResponseData::Json(value) => value.to_string(),
            ResponseData::Text(text) => text.clone(),
            ResponseData::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}
