// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Content-type descriptor and charset decoding

use reqwest::header::{HeaderMap, HeaderValue};

use super::headers::CONTENT_TYPE;

/// Parsed `type/format; charset=...` view of a content-type value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Part before the `/`, e.g. `application`
    pub kind: String,
    /// Part after the `/`, e.g. `json`
    pub format: String,
    /// Charset parameter, `utf-8` when not given
    pub charset: String,
}

impl Default for ContentType {
    fn default() -> Self {
        Self {
            kind: "text".to_string(),
            format: "plain".to_string(),
            charset: "utf-8".to_string(),
        }
    }
}

impl ContentType {
    /// Parse a raw content-type value
    pub fn parse(value: &str) -> Self {
        let lowered = value.to_ascii_lowercase();
        let mut segments = lowered.split(';');

        let mime = segments.next().unwrap_or_default().trim();
        let (kind, format) = match mime.split_once('/') {
            Some((kind, format)) => (kind.trim(), format.trim()),
            None => (mime, ""),
        };

        let charset = segments
            .filter_map(|segment| segment.trim().strip_prefix("charset="))
            .map(|cs| cs.trim().trim_matches('"'))
            .find(|cs| !cs.is_empty())
            .unwrap_or("utf-8");

        Self {
            kind: kind.to_string(),
            format: format.to_string(),
            charset: charset.to_string(),
        }
    }

    /// Descriptor for an optional header value; absent or non-text values
    /// fall back to `text/plain; charset=utf-8`
    pub fn from_header(value: Option<&HeaderValue>) -> Self {
        value
            .and_then(|v| v.to_str().ok())
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Descriptor for the `content-type` entry of a header map
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_header(headers.get(CONTENT_TYPE))
    }

    /// Whether the body should be parsed as JSON
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Whether the body should be decoded to a string
    pub fn is_text(&self) -> bool {
        self.kind == "text"
    }

    /// Decode bytes into a string using this descriptor's charset
    pub fn decode(&self, bytes: &[u8]) -> String {
        Charset::from_label(&self.charset).decode(bytes)
    }
}

/// Charsets understood when turning a body into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Latin1,
    Ascii,
    Utf16Le,
}

impl Charset {
    /// Map a charset label; unknown labels decode as UTF-8
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "latin1" | "iso-8859-1" | "iso8859-1" | "binary" => Charset::Latin1,
            "ascii" | "us-ascii" => Charset::Ascii,
            "utf-16le" | "utf16le" | "ucs2" | "ucs-2" => Charset::Utf16Le,
            _ => Charset::Utf8,
        }
    }

    /// Decode bytes, replacing invalid sequences
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Charset::Latin1 => bytes.iter().map(|&b| b as char).collect(),
            Charset::Ascii => bytes.iter().map(|&b| (b & 0x7f) as char).collect(),
            Charset::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        }
    }
}
