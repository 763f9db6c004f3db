use crate::constants::*;
use engage_core::Context;

/// Config for [`crate::TwitterService`].
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `account_id` is the numeric id of the account that retweets and likes.
    ///
    /// Loaded from this field if set, else env value [`TWITTER_ACCOUNT_ID`].
    pub account_id: Option<String>,
    /// `endpoint` is the api base url without trailing slash.
    ///
    /// Loaded from this field if set, else env value [`TWITTER_API_ENDPOINT`],
    /// else `https://api.twitter.com/2`.
    pub endpoint: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set account_id
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(TWITTER_ACCOUNT_ID) {
            self.account_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TWITTER_API_ENDPOINT) {
            self.endpoint.get_or_insert(v);
        }

        self
    }
}
