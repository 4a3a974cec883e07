// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Caller-facing request options and builder

use serde_json::{Map, Value};
use url::Url;

use crate::error::Result;

/// Ordered field name to scalar mapping, used for headers and data
pub type Fields = Map<String, Value>;

/// Request method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    /// Convert to the transport's method type
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// POST body encoding strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    /// `application/json`
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`
    Form,
    /// `multipart/form-data`
    FormData,
}

impl std::str::FromStr for DataType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DataType::Json),
            "form" => Ok(DataType::Form),
            "formdata" => Ok(DataType::FormData),
            other => Err(format!("unknown data type: {}", other)),
        }
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestData {
    /// Field mapping, encoded per `DataType` (POST) or into the query (GET)
    Fields(Fields),
    /// Raw body sent verbatim on POST
    Raw(String),
}

impl From<Fields> for RequestData {
    fn from(fields: Fields) -> Self {
        RequestData::Fields(fields)
    }
}

impl From<String> for RequestData {
    fn from(raw: String) -> Self {
        RequestData::Raw(raw)
    }
}

impl From<&str> for RequestData {
    fn from(raw: &str) -> Self {
        RequestData::Raw(raw.to_string())
    }
}

/// Request target, either unparsed or already parsed
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Raw(String),
    Parsed(Url),
}

impl Target {
    /// Normalize to a parsed URL
    pub fn to_url(&self) -> Result<Url> {
        match self {
            Target::Raw(s) => Ok(Url::parse(s)?),
            Target::Parsed(url) => Ok(url.clone()),
        }
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        Target::Raw(s.to_string())
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Target::Raw(s)
    }
}

impl From<Url> for Target {
    fn from(url: Url) -> Self {
        Target::Parsed(url)
    }
}

/// Options for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// Request URL
    pub url: Target,
    /// Request method
    pub method: Method,
    /// Caller headers; null values are dropped
    pub header: Fields,
    /// Request payload
    pub data: Option<RequestData>,
    /// POST body encoding
    pub data_type: DataType,
}

impl RequestOptions {
    /// Create GET options for a URL
    pub fn new(url: impl Into<Target>) -> Self {
        Self {
            url: url.into(),
            method: Method::default(),
            header: Fields::new(),
            data: None,
            data_type: DataType::default(),
        }
    }

    /// Create GET options
    pub fn get(url: impl Into<Target>) -> Self {
        Self::new(url)
    }

    /// Create POST options
    pub fn post(url: impl Into<Target>) -> Self {
        Self::new(url).method(Method::Post)
    }

    /// Set the method
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.header.insert(name.into(), value.into());
        self
    }

    /// Set multiple headers
    pub fn headers(mut self, headers: Fields) -> Self {
        self.header.extend(headers);
        self
    }

    /// Set a single data field, turning raw data into a mapping
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut fields = match self.data.take() {
            Some(RequestData::Fields(fields)) => fields,
            _ => Fields::new(),
        };
        fields.insert(name.into(), value.into());
        self.data = Some(RequestData::Fields(fields));
        self
    }

    /// Set the payload
    pub fn data(mut self, data: impl Into<RequestData>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set a raw body
    pub fn raw(self, body: impl Into<String>) -> Self {
        self.data(RequestData::Raw(body.into()))
    }

    /// Set the POST body encoding
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }
}

impl From<&str> for RequestOptions {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for RequestOptions {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

impl From<Url> for RequestOptions {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let opts = RequestOptions::from("http://example.com");
        assert_eq!(opts.method, Method::Get);
        assert_eq!(opts.data_type, DataType::Json);
        assert!(opts.header.is_empty());
        assert!(opts.data.is_none());
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let opts = RequestOptions::post("http://example.com")
            .field("z", 1)
            .field("a", "x")
            .field("m", true);

        let Some(RequestData::Fields(fields)) = opts.data else {
            panic!("Expected fields");
        };
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_field_replaces_raw() {
        let opts = RequestOptions::post("http://example.com").raw("abc").field("k", "v");
        assert_eq!(opts.data, Some(RequestData::Fields(json!({"k": "v"}).as_object().unwrap().clone())));
    }

    #[test]
    fn test_target_parse() {
        assert!(Target::from("http://h/p").to_url().is_ok());
        assert!(Target::from("::not a url").to_url().unwrap_err().is_url());
    }

    #[test]
    fn test_data_type_from_str() {
        assert_eq!("FormData".parse::<DataType>().unwrap(), DataType::FormData);
        assert_eq!("form".parse::<DataType>().unwrap(), DataType::Form);
        assert!("xml".parse::<DataType>().is_err());
    }
}
