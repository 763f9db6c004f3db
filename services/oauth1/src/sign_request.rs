use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::Method;
use log::debug;

use crate::constants::*;
use crate::credential::Credential;
use crate::encode::escape;
use crate::nonce::NonceStyle;
use crate::params::{QueryParams, RequestOptions};
use engage_core::hash::base64_hmac_sha1;
use engage_core::time::{format_unix_timestamp, now, DateTime};
use engage_core::Result;

/// RequestSigner signs requests with OAuth 1.0a HMAC-SHA1.
///
/// - [Authorizing a request](https://developer.twitter.com/en/docs/authentication/oauth-1-0a/authorizing-a-request)
/// - [Creating a signature](https://developer.twitter.com/en/docs/authentication/oauth-1-0a/creating-a-signature)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
    user_agent: String,
    nonce_style: NonceStyle,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a signer for the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            nonce_style: NonceStyle::default(),
            time: None,
            nonce: None,
        }
    }

    /// Set the `User-Agent` sent with every request.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set how nonces are generated.
    pub fn with_nonce_style(mut self, style: NonceStyle) -> Self {
        self.nonce_style = style;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A reused nonce makes the request replayable.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// The credential used by this signer.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Sign a request.
    ///
    /// `url` must not carry a query string, pass query parameters through
    /// `params` instead. The payload in `options` is sent as-is and never
    /// signed.
    pub fn sign(
        &self,
        method: &Method,
        url: &str,
        params: Option<&QueryParams>,
        options: Option<&RequestOptions>,
    ) -> SignedRequest {
        let timestamp = format_unix_timestamp(self.time.unwrap_or_else(now));
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| self.nonce_style.generate());

        let mut oauth_params = oauth_params(&self.credential, &timestamp, &nonce);

        let mut merged = oauth_params.clone();
        if let Some(params) = params {
            for (k, v) in params.iter() {
                merged.insert(k.to_string(), v.to_string());
            }
        }

        let request_string = request_string(&merged);
        let base_string = signature_base_string(method.as_str(), url, &request_string);
        debug!("signature base string: {base_string}");

        let key = signing_key(
            &self.credential.consumer_secret,
            &self.credential.access_secret,
        );
        let signature = escape(&base64_hmac_sha1(key.as_bytes(), base_string.as_bytes()));
        oauth_params.insert(OAUTH_SIGNATURE.to_string(), signature);

        let url = match params {
            Some(params) => join_url_to_params(url, params),
            None => url.to_string(),
        };
        debug!("final url: {url}");

        SignedRequest {
            method: method.clone(),
            url,
            headers: vec![
                ("User-Agent".to_string(), self.user_agent.clone()),
                ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
                (
                    "Authorization".to_string(),
                    authorization_header(&oauth_params),
                ),
            ],
            payload: options.and_then(|v| v.payload.clone()),
        }
    }
}

/// The six protocol parameters every request carries before signing.
fn oauth_params(cred: &Credential, timestamp: &str, nonce: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (OAUTH_CONSUMER_KEY.to_string(), cred.consumer_key.clone()),
        (OAUTH_TIMESTAMP.to_string(), timestamp.to_string()),
        (OAUTH_NONCE.to_string(), nonce.to_string()),
        (OAUTH_VERSION.to_string(), OAUTH_VERSION_1_0.to_string()),
        (OAUTH_TOKEN.to_string(), cred.access_token.clone()),
        (OAUTH_SIGNATURE_METHOD.to_string(), HMAC_SHA1.to_string()),
    ])
}

/// Build the parameter string: keys in ascending order, every key and value
/// escaped, pairs joined by `&`.
pub fn request_string(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", escape(k), escape(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the signature base string `METHOD&escape(url)&escape(request_string)`.
pub fn signature_base_string(method: &str, url: &str, request_string: &str) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        escape(url),
        escape(request_string)
    )
}

/// Build the HMAC key `escape(consumer_secret)&escape(access_secret)`.
pub fn signing_key(consumer_secret: &str, access_secret: &str) -> String {
    format!("{}&{}", escape(consumer_secret), escape(access_secret))
}

/// Render the `Authorization` header value.
///
/// Values are written as given, they must be escaped already.
pub fn authorization_header(params: &BTreeMap<String, String>) -> String {
    let pairs = params
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{AUTHORIZATION_SCHEME} {pairs}")
}

/// Append `params` to `url` in insertion order without any encoding.
pub fn join_url_to_params(url: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{url}?{query}")
}

/// A request ready to be sent.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// HTTP method, unchanged from the caller.
    pub method: Method,
    /// Url with the query string appended.
    pub url: String,
    /// `User-Agent`, `Content-Type` and `Authorization` in that order.
    pub headers: Vec<(String, String)>,
    /// Serialized body.
    pub payload: Option<String>,
}

impl SignedRequest {
    /// Get a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Authorization` header value.
    pub fn authorization(&self) -> Option<&str> {
        self.header(AUTHORIZATION.as_str())
    }

    /// Convert into an [`http::Request`].
    ///
    /// Fails if the url or a header is not valid on the wire, for example
    /// when a raw query value contains a space.
    pub fn into_http_request(self) -> Result<http::Request<Bytes>> {
        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(self.url.as_str());
        for (k, v) in &self.headers {
            builder = builder.header(k.as_str(), v.as_str());
        }

        let body = self.payload.map(Bytes::from).unwrap_or_default();
        Ok(builder.body(body)?)
    }
}

impl Debug for SignedRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case(AUTHORIZATION.as_str()) {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect::<Vec<_>>();

        f.debug_struct("SignedRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("payload", &self.payload)
            .finish()
    }
}
