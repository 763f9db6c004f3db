use crate::{constants::*, Credential};
use async_trait::async_trait;
use engage_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads OAuth 1.0a credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH1_CONSUMER_KEY`
/// - `OAUTH1_CONSUMER_SECRET`
/// - `OAUTH1_ACCESS_TOKEN`
/// - `OAUTH1_ACCESS_SECRET`
///
/// All four must be present and non-empty.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();
        let get = |k: &str| envs.get(k).filter(|v| !v.is_empty());

        match (
            get(OAUTH1_CONSUMER_KEY),
            get(OAUTH1_CONSUMER_SECRET),
            get(OAUTH1_ACCESS_TOKEN),
            get(OAUTH1_ACCESS_SECRET),
        ) {
            (Some(ck), Some(cs), Some(at), Some(as_)) => Ok(Some(Credential::new(
                ck.clone(),
                cs.clone(),
                at.clone(),
                as_.clone(),
            ))),
            _ => Ok(None),
        }
    }
}
