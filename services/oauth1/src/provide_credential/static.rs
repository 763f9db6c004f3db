use crate::Credential;
use async_trait::async_trait;
use engage_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed OAuth 1.0a credential.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from the consumer pair and the
    /// access token pair.
    pub fn new(
        consumer_key: &str,
        consumer_secret: &str,
        access_token: &str,
        access_secret: &str,
    ) -> Self {
        Self {
            credential: Credential::new(consumer_key, consumer_secret, access_token, access_secret),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let provider = StaticCredentialProvider::new("ck", "cs", "at", "as");
        let cred = provider
            .provide_credential(&Context::new())
            .await?
            .expect("credential must be provided");

        assert_eq!(cred, Credential::new("ck", "cs", "at", "as"));
        Ok(())
    }
}
