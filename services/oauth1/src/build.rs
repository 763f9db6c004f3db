use std::time::Duration;

use async_trait::async_trait;
use http::request::Parts;
use http::HeaderValue;
use log::debug;

use crate::encode::escape;
use crate::nonce::NonceStyle;
use crate::params::QueryParams;
use crate::sign_request::RequestSigner;
use crate::Credential;
use engage_core::time::DateTime;
use engage_core::{Context, Error, Result, SignRequest, SigningCredential, SigningRequest};

/// Builder that signs [`http::request::Parts`] with OAuth 1.0a.
///
/// The query of the request takes part in the signature and is written back
/// escaped, the body never does.
#[derive(Debug, Default)]
pub struct Builder {
    user_agent: Option<String>,
    nonce_style: NonceStyle,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl Builder {
    /// Create a new builder for OAuth 1.0a signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
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

    /// Specify the nonce, only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    fn request_signer(&self, cred: &Credential) -> RequestSigner {
        let mut signer = RequestSigner::new(cred.clone()).with_nonce_style(self.nonce_style);
        if let Some(ua) = &self.user_agent {
            signer = signer.with_user_agent(ua.clone());
        }
        if let Some(time) = self.time {
            signer = signer.with_time(time);
        }
        if let Some(nonce) = &self.nonce {
            signer = signer.with_nonce(nonce.clone());
        }
        signer
    }
}

#[async_trait]
impl SignRequest for Builder {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()> {
        let Some(cred) = credential.filter(|c| c.is_valid()) else {
            return Err(Error::credential_invalid(
                "no valid credential found for oauth1 signing",
            ));
        };
        if expires_in.is_some() {
            return Err(Error::request_invalid(
                "oauth1 does not support presigned requests",
            ));
        }

        let mut signing_req = SigningRequest::build(req)?;
        let params = unique_params(&signing_req.query);

        // Every original pair goes back on the wire, escaped.
        signing_req.query = signing_req
            .query
            .iter()
            .map(|(k, v)| (escape(k), escape(v)))
            .collect();

        let params = match params {
            Ok(params) => params,
            Err(err) => {
                signing_req.apply(req)?;
                return Err(err);
            }
        };

        let signed = self.request_signer(cred).sign(
            &signing_req.method,
            &signing_req.url(),
            Some(&params),
            None,
        );
        debug!("signed request: {signed:?}");

        for (name, value) in &signed.headers {
            let mut value = HeaderValue::from_str(value)?;
            if name.eq_ignore_ascii_case(http::header::AUTHORIZATION.as_str()) {
                value.set_sensitive(true);
            }
            signing_req
                .headers
                .insert(http::HeaderName::from_bytes(name.as_bytes())?, value);
        }

        signing_req.apply(req)
    }
}

/// Collect the decoded query, a key may only appear once.
fn unique_params(query: &[(String, String)]) -> Result<QueryParams> {
    let mut params = QueryParams::new();
    for (k, v) in query {
        if params.get(k).is_some() {
            return Err(Error::request_invalid(format!(
                "query key {k} appears more than once and can not be signed"
            )));
        }
        params.insert(k.as_str(), v.as_str());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::time::from_unix_millis;
    use engage_core::ErrorKind;
    use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
    use pretty_assertions::assert_eq;

    fn test_builder() -> Builder {
        Builder::new()
            .with_time(from_unix_millis(1_700_000_000_000).expect("must be valid time"))
            .with_nonce("N")
    }

    fn parts(uri: &str) -> Parts {
        http::Request::get(uri)
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_sign_request_matches_request_signer() -> Result<()> {
        let cred = Credential::new("ck", "cs", "at", "as");
        let mut req = parts("https://api.twitter.com/2/users/12/tweets?since_id=1&max_results=20");

        test_builder()
            .sign_request(&Context::new(), &mut req, Some(&cred), None)
            .await?;

        assert_eq!(
            req.uri,
            "https://api.twitter.com/2/users/12/tweets?since_id=1&max_results=20"
        );
        assert_eq!(req.headers[CONTENT_TYPE], "application/json");
        assert!(req.headers[USER_AGENT].to_str()?.starts_with("engage-oauth1/"));

        let auth = &req.headers[AUTHORIZATION];
        assert!(auth.is_sensitive());
        assert!(auth
            .to_str()?
            .contains("oauth_signature=\"XYNzY8pU7UGc5VzXO1YRDBvRryM%3D\""));
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_escapes_query() -> Result<()> {
        let cred = Credential::new("ck", "cs", "at", "as");
        let mut req = parts("https://api.twitter.com/2/tweets/search/recent?query=from%3Atwitterdev%20-is%3Aretweet");

        test_builder()
            .sign_request(&Context::new(), &mut req, Some(&cred), None)
            .await?;

        assert_eq!(
            req.uri.query(),
            Some("query=from%3Atwitterdev%20-is%3Aretweet")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_without_credential() {
        let mut req = parts("https://api.twitter.com/2/users/me");

        let err = test_builder()
            .sign_request(&Context::new(), &mut req, None, None)
            .await
            .expect_err("must fail without credential");

        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_rejects_incomplete_credential() {
        let cred = Credential::new("ck", "cs", "at", "");
        let mut req = parts("https://api.twitter.com/2/users/me");

        let err = test_builder()
            .sign_request(&Context::new(), &mut req, Some(&cred), None)
            .await
            .expect_err("must fail with an empty access secret");

        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(req.headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_sign_request_rejects_repeated_query_key() {
        let cred = Credential::new("ck", "cs", "at", "as");
        let mut req = parts("https://api.example.com/1?a=1&a=2&b=3");

        let err = test_builder()
            .sign_request(&Context::new(), &mut req, Some(&cred), None)
            .await
            .expect_err("must fail for a repeated query key");

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert_eq!(req.uri, "https://api.example.com/1?a=1&a=2&b=3");
        assert!(req.headers.get(AUTHORIZATION).is_none());
    }

    #[tokio::test]
    async fn test_sign_request_rejects_presign() {
        let cred = Credential::new("ck", "cs", "at", "as");
        let mut req = parts("https://api.twitter.com/2/users/me");

        let err = test_builder()
            .sign_request(
                &Context::new(),
                &mut req,
                Some(&cred),
                Some(Duration::from_secs(60)),
            )
            .await
            .expect_err("must fail for presign");

        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
