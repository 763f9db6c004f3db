use crate::{Config, Credential};
use async_trait::async_trait;
use engage_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

/// ConfigCredentialProvider loads credential from static config.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new `ConfigCredentialProvider` instance.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(self.config.to_credential())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_config_loader_with_credentials() -> anyhow::Result<()> {
        let config = Config::new()
            .with_consumer_key("ck")
            .with_consumer_secret("cs")
            .with_access_token("at")
            .with_access_secret("as");

        let loader = ConfigCredentialProvider::new(Arc::new(config));
        let cred = loader
            .provide_credential(&Context::new())
            .await?
            .expect("credential must be provided");

        assert_eq!(cred, Credential::new("ck", "cs", "at", "as"));
        Ok(())
    }

    #[tokio::test]
    async fn test_config_loader_without_credentials() -> anyhow::Result<()> {
        let loader = ConfigCredentialProvider::new(Arc::new(Config::default()));
        let cred = loader.provide_credential(&Context::new()).await?;

        assert!(cred.is_none());
        Ok(())
    }
}
