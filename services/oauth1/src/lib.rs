//! OAuth 1.0a HMAC-SHA1 signing implementation for engage.
//!
//! This crate signs requests for APIs authorized with OAuth 1.0a user
//! context, such as the Twitter v2 API.
//!
//! ## Overview
//!
//! [`RequestSigner`] turns a method, a url and its query parameters into a
//! [`SignedRequest`] carrying the final url and the `Authorization` header.
//! Signing never fails: the fallible part is converting the result into an
//! [`http::Request`] and sending it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use engage_oauth1::{Credential, QueryParams, RequestSigner};
//! use http::Method;
//!
//! let signer = RequestSigner::new(Credential::new(
//!     "consumer-key",
//!     "consumer-secret",
//!     "access-token",
//!     "access-secret",
//! ));
//!
//! let params = QueryParams::new().with("max_results", "20");
//! let req = signer.sign(
//!     &Method::GET,
//!     "https://api.twitter.com/2/users/12/tweets",
//!     Some(&params),
//!     None,
//! );
//!
//! println!("{}", req.url);
//! ```
//!
//! ## Signing `http` requests
//!
//! [`Builder`] plugs the same algorithm into [`engage_core::Signer`]:
//!
//! ```no_run
//! use engage_core::{Context, Result, Signer};
//! use engage_oauth1::{Builder, DefaultCredentialProvider};
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), DefaultCredentialProvider::new(), Builder::new());
//!
//! let mut parts = http::Request::get("https://api.twitter.com/2/users/me")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export OAUTH1_CONSUMER_KEY=your-consumer-key
//! export OAUTH1_CONSUMER_SECRET=your-consumer-secret
//! export OAUTH1_ACCESS_TOKEN=your-access-token
//! export OAUTH1_ACCESS_SECRET=your-access-secret
//! ```

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod encode;
pub use encode::{escape, unescape};

mod nonce;
pub use nonce::{sha1_digest_nonce, NonceStyle};

mod params;
pub use params::{QueryParams, RequestOptions};

mod sign_request;
pub use sign_request::{
    authorization_header, join_url_to_params, request_string, signature_base_string, signing_key,
    RequestSigner, SignedRequest,
};

mod build;
pub use build::Builder;

mod provide_credential;
pub use provide_credential::*;
