// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Body and query-string encoders

use bytes::Bytes;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use serde_json::Value;
use url::Url;

use super::options::Fields;
use crate::error::{Error, Result};

/// Prefix of every multipart boundary token
pub const BOUNDARY_PREFIX: &str = "AnyConn";

/// Characters escaped in form bodies: everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Coerce a scalar to its wire string. Null has no wire form.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Set each non-null field as a query parameter.
///
/// A key already present keeps its position and loses any duplicates; new
/// keys are appended. The query is left untouched when nothing is set.
pub fn inject_query(url: &mut Url, data: &Fields) {
    let updates: Vec<(&str, String)> = data
        .iter()
        .filter_map(|(k, v)| stringify(v).map(|s| (k.as_str(), s)))
        .collect();
    if updates.is_empty() {
        return;
    }

    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    for (key, value) in updates {
        match pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                pairs[first].1 = value;
                let mut index = 0;
                pairs.retain(|(k, _)| {
                    let keep = index <= first || k != key;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_string(), value)),
        }
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
}

/// JSON body
pub fn encode_json(data: &Fields) -> Result<Bytes> {
    serde_json::to_vec(data)
        .map(Bytes::from)
        .map_err(Error::Encode)
}

/// `application/x-www-form-urlencoded` body, percent-encoding keys and values
pub fn encode_form(data: &Fields) -> Bytes {
    let body = data
        .iter()
        .map(|(k, v)| {
            let value = stringify(v).unwrap_or_else(|| "null".to_string());
            format!(
                "{}={}",
                utf8_percent_encode(k, FORM_COMPONENT),
                utf8_percent_encode(&value, FORM_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    Bytes::from(body)
}

/// `multipart/form-data` body for plain fields.
///
/// Names and values are written as-is; a quote or newline in a name, or the
/// boundary inside a value, produces a malformed body.
pub fn encode_multipart(data: &Fields, boundary: &str) -> Bytes {
    let mut body = String::new();
    for (name, value) in data {
        let value = stringify(value).unwrap_or_else(|| "null".to_string());
        body.push_str(&format!(
            "--{}\nContent-Disposition: form-data; name=\"{}\"\n\n{}\n",
            boundary, name, value
        ));
    }
    body.push_str(&format!("--{}--", boundary));
    Bytes::from(body)
}

/// Generate a multipart boundary token.
///
/// Not collision-proof against adversarial input.
pub fn generate_boundary() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::thread_rng();
    format!(
        "{}{}{}{}",
        BOUNDARY_PREFIX,
        to_base36(millis),
        to_base36(rng.gen()),
        to_base36(rng.gen()),
    )
}

/// Base-36 digits of `n`, lowercase
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&json!("x")).as_deref(), Some("x"));
        assert_eq!(stringify(&json!(1)).as_deref(), Some("1"));
        assert_eq!(stringify(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(stringify(&json!(false)).as_deref(), Some("false"));
        assert_eq!(stringify(&json!([1, 2])).as_deref(), Some("[1,2]"));
        assert_eq!(stringify(&Value::Null), None);
    }

    #[test]
    fn test_inject_query_appends() {
        let mut url = Url::parse("http://h/p").unwrap();
        inject_query(&mut url, &fields(json!({"a": 1, "b": "x"})));
        assert_eq!(url.as_str(), "http://h/p?a=1&b=x");
    }

    #[test]
    fn test_inject_query_overwrites_existing() {
        let mut url = Url::parse("http://h/p?a=old&keep=1&a=dup").unwrap();
        inject_query(&mut url, &fields(json!({"a": "new", "z": null})));
        assert_eq!(url.as_str(), "http://h/p?a=new&keep=1");
    }

    #[test]
    fn test_inject_query_nothing_to_set() {
        let mut url = Url::parse("http://h/p").unwrap();
        inject_query(&mut url, &fields(json!({"skip": null})));
        assert_eq!(url.as_str(), "http://h/p");
    }

    #[test]
    fn test_encode_json() {
        let body = encode_json(&fields(json!({"a": 1}))).unwrap();
        assert_eq!(&body[..], br#"{"a":1}"#);
    }

    #[test]
    fn test_encode_form() {
        let body = encode_form(&fields(json!({"a b": "c&d", "n": 2})));
        assert_eq!(&body[..], b"a%20b=c%26d&n=2");
    }

    #[test]
    fn test_encode_form_keeps_unreserved_marks() {
        let body = encode_form(&fields(json!({"k": "a!b'(c)*", "e=": "~é/+"})));
        assert_eq!(&body[..], b"k=a!b'(c)*&e%3D=~%C3%A9%2F%2B");
    }

    #[test]
    fn test_encode_multipart() {
        let body = encode_multipart(&fields(json!({"k": "v", "n": 1})), "B");
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "--B\nContent-Disposition: form-data; name=\"k\"\n\nv\n\
             --B\nContent-Disposition: form-data; name=\"n\"\n\n1\n\
             --B--"
        );
    }

    #[test]
    fn test_boundary_shape() {
        let a = generate_boundary();
        let b = generate_boundary();
        assert!(a.starts_with(BOUNDARY_PREFIX));
        assert!(a[BOUNDARY_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }
}
