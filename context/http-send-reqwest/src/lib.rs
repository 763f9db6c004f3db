//! [`HttpSend`] implementation backed by [`reqwest`].

use async_trait::async_trait;
use bytes::Bytes;
use engage_core::{Error, HttpSend, Result};
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// ReqwestHttpSend dispatches requests through a shared [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        log::debug!("sending {} {}", req.method(), req.uri());

        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert http request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::unexpected("failed to send http request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::unexpected("failed to read http response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
