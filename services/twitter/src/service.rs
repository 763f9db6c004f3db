use http::{Method, StatusCode};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::constants::*;
use crate::types::{TweetPage, UserResponse};
use crate::Config;
use engage_core::{Context, Error, Result};
use engage_oauth1::{QueryParams, RequestOptions, RequestSigner, SignedRequest};

/// TwitterService calls the Twitter v2 api on behalf of one account.
///
/// Every request is signed with the account's [`RequestSigner`] and sent
/// through the [`Context`].
#[derive(Debug, Clone)]
pub struct TwitterService {
    ctx: Context,
    signer: RequestSigner,
    account_id: String,
    endpoint: String,
}

impl TwitterService {
    /// Create a service acting as `account_id`.
    pub fn new(ctx: Context, signer: RequestSigner, account_id: impl Into<String>) -> Self {
        Self {
            ctx,
            signer,
            account_id: account_id.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Create a service from config.
    ///
    /// Returns `ConfigInvalid` if `account_id` is not set.
    pub fn from_config(ctx: Context, signer: RequestSigner, config: &Config) -> Result<Self> {
        let Some(account_id) = &config.account_id else {
            return Err(Error::config_invalid("twitter account_id is required"));
        };

        let mut svc = Self::new(ctx, signer, account_id.clone());
        if let Some(endpoint) = &config.endpoint {
            svc = svc.with_endpoint(endpoint);
        }
        Ok(svc)
    }

    /// Set the api base url.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Id of the account this service acts as.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Look up the numeric id of `screen_name`.
    pub async fn get_user_id(&self, screen_name: &str) -> Result<String> {
        let url = format!("{}/users/by/username/{screen_name}", self.endpoint);

        let resp: UserResponse = self
            .send("get_user_id", self.signer.sign(&Method::GET, &url, None, None))
            .await?;
        Ok(resp.data.id)
    }

    /// Fetch one page of the tweets posted by `user_id`, newest first.
    pub async fn get_user_tweets(
        &self,
        user_id: &str,
        since_id: Option<&str>,
        pagination_token: Option<&str>,
    ) -> Result<TweetPage> {
        let url = format!("{}/users/{user_id}/tweets", self.endpoint);

        let mut params = QueryParams::new().with("max_results", USER_TWEETS_PAGE_SIZE);
        if let Some(v) = since_id {
            params.insert("since_id", v);
        }
        if let Some(v) = pagination_token {
            params.insert("pagination_token", v);
        }

        self.send(
            "get_user_tweets",
            self.signer.sign(&Method::GET, &url, Some(&params), None),
        )
        .await
    }

    /// Fetch tweets by id.
    pub async fn get_multiple_tweets<S: AsRef<str>>(&self, ids: &[S]) -> Result<TweetPage> {
        let url = format!("{}/tweets", self.endpoint);

        let ids = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        let params = QueryParams::new().with("ids", ids);

        self.send(
            "get_multiple_tweets",
            self.signer.sign(&Method::GET, &url, Some(&params), None),
        )
        .await
    }

    /// Retweet `tweet_id` as this account.
    pub async fn retweet(&self, tweet_id: &str) -> Result<Value> {
        let url = format!("{}/users/{}/retweets", self.endpoint, self.account_id);
        self.post("retweet", &url, tweet_id).await
    }

    /// Like `tweet_id` as this account.
    pub async fn like(&self, tweet_id: &str) -> Result<Value> {
        let url = format!("{}/users/{}/likes", self.endpoint, self.account_id);
        self.post("like", &url, tweet_id).await
    }

    async fn post(&self, action: &str, url: &str, tweet_id: &str) -> Result<Value> {
        let payload = json!({ "tweet_id": tweet_id }).to_string();
        let opts = RequestOptions::new().with_payload(payload);

        self.send(action, self.signer.sign(&Method::POST, url, None, Some(&opts)))
            .await
    }

    async fn send<T: DeserializeOwned>(&self, action: &str, signed: SignedRequest) -> Result<T> {
        debug!("{action}: {} {}", signed.method, signed.url);

        let resp = self
            .ctx
            .http_send_as_string(signed.into_http_request()?)
            .await?;
        let (parts, body) = resp.into_parts();
        debug!("{action}: got response {}: {body}", parts.status);

        match parts.status {
            StatusCode::OK => Ok(serde_json::from_str(&body)?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("{action}: rejected with {}", parts.status);
                Err(Error::credential_denied(format!(
                    "{action} rejected with {}: {body}",
                    parts.status
                )))
            }
            status => Err(Error::unexpected(format!(
                "{action} failed with {status}: {body}"
            ))),
        }
    }
}
