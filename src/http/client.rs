// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request executor: one dispatch, one buffered response

use std::time::Instant;

use bytes::BytesMut;
use futures::StreamExt;
use reqwest::redirect::Policy;
use reqwest::Client;
use url::Url;

use super::options::RequestOptions;
use super::request::PreparedRequest;
use super::response::Response;
use crate::error::Result;

/// Network transport, picked from the URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Plain TCP
    Plain,
    /// TLS (rustls)
    Tls,
}

impl Transport {
    /// `https` goes over TLS, everything else over plain TCP
    pub fn for_url(url: &Url) -> Self {
        if url.scheme() == "https" {
            Transport::Tls
        } else {
            Transport::Plain
        }
    }

    /// Build a single-use client: no redirects, no idle connections kept
    fn client(self) -> Result<Client> {
        let builder = Client::builder()
            .redirect(Policy::none())
            .pool_max_idle_per_host(0);

        let builder = match self {
            Transport::Plain => builder,
            Transport::Tls => builder.use_rustls_tls().https_only(true),
        };

        Ok(builder.build()?)
    }
}

/// Executes one request per call; holds no state between calls
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestExecutor;

impl RequestExecutor {
    /// Create a new executor
    pub fn new() -> Self {
        Self
    }

    /// Resolve options into the wire request without sending it
    pub fn prepare(&self, options: &RequestOptions) -> Result<PreparedRequest> {
        PreparedRequest::from_options(options)
    }

    /// Execute a request and decode the response
    pub async fn execute(&self, options: impl Into<RequestOptions>) -> Result<Response> {
        let options = options.into();
        let prepared = self.prepare(&options)?;
        self.dispatch(prepared).await
    }

    /// Send an already prepared request
    pub async fn dispatch(&self, request: PreparedRequest) -> Result<Response> {
        let start = Instant::now();
        let transport = Transport::for_url(&request.url);
        let client = transport.client()?;

        tracing::debug!(
            method = ?request.method,
            url = %request.url,
            ?transport,
            body_len = request.body.as_ref().map(|b| b.len()).unwrap_or(0),
            "Dispatching request"
        );

        let mut builder = client
            .request(request.method.as_reqwest(), request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();

        // A failed chunk drops everything buffered so far.
        let mut buffer = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            buffer.extend_from_slice(&chunk?);
        }

        tracing::debug!(
            status = status.as_u16(),
            body_len = buffer.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Response received"
        );

        Response::new(status, headers, buffer.freeze())
    }
}

/// Execute a single request with a bare URL or full options
pub async fn request(options: impl Into<RequestOptions>) -> Result<Response> {
    RequestExecutor::new().execute(options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a local port, returning its base URL
    async fn serve_raw(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/", addr)
    }

    #[test]
    fn test_transport_selection() {
        let https = Url::parse("https://example.com").unwrap();
        let http = Url::parse("http://example.com").unwrap();
        let ws = Url::parse("ws://example.com").unwrap();
        assert_eq!(Transport::for_url(&https), Transport::Tls);
        assert_eq!(Transport::for_url(&http), Transport::Plain);
        assert_eq!(Transport::for_url(&ws), Transport::Plain);
    }

    #[test]
    fn test_clients_build() {
        assert!(Transport::Plain.client().is_ok());
        assert!(Transport::Tls.client().is_ok());
    }

    #[tokio::test]
    async fn test_malformed_url_fails_before_dispatch() {
        let err = request("not a url").await.unwrap_err();
        assert!(err.is_url());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = request(format!("http://{}/", addr)).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_truncated_body_is_transport_error() {
        let url = serve_raw(
            b"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ncontent-length: 100\r\n\r\n0123456789",
        )
        .await;

        let err = request(url).await.unwrap_err();
        assert!(err.is_transport());
    }
}
