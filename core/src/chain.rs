use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// The first provider returning `Some` wins. Providers that fail are logged
/// and skipped.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C> ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider to the front of the chain.
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = C> + 'static,
    ) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<C> Default for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait]
impl<C> ProvideCredential for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("Trying credential provider: {:?}", provider);

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("Successfully loaded credential from provider: {:?}", provider);
                    return Ok(Some(cred));
                }
                Ok(None) => {
                    log::debug!("No credential found in provider: {:?}", provider);
                    continue;
                }
                Err(e) => {
                    log::warn!(
                        "Error loading credential from provider {:?}: {:?}",
                        provider,
                        e
                    );
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug)]
    struct MockSuccessProvider(&'static str);

    #[async_trait]
    impl ProvideCredential for MockSuccessProvider {
        type Credential = String;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(Some(self.0.to_string()))
        }
    }

    #[derive(Debug)]
    struct MockFailProvider;

    #[async_trait]
    impl ProvideCredential for MockFailProvider {
        type Credential = String;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::unexpected("mock provider failed"))
        }
    }

    #[derive(Debug)]
    struct MockEmptyProvider;

    #[async_trait]
    impl ProvideCredential for MockEmptyProvider {
        type Credential = String;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_chain_skips_failures_and_empties() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let chain = ProvideCredentialChain::new()
            .push(MockFailProvider)
            .push(MockEmptyProvider)
            .push(MockSuccessProvider("second"));

        assert_eq!(chain.len(), 3);
        let cred = chain.provide_credential(&Context::new()).await?;
        assert_eq!(cred.as_deref(), Some("second"));
        Ok(())
    }

    #[tokio::test]
    async fn test_push_front_takes_priority() -> Result<()> {
        let chain = ProvideCredentialChain::new()
            .push(MockSuccessProvider("back"))
            .push_front(MockSuccessProvider("front"));

        let cred = chain.provide_credential(&Context::new()).await?;
        assert_eq!(cred.as_deref(), Some("front"));
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() -> Result<()> {
        let chain: ProvideCredentialChain<String> = ProvideCredentialChain::default();

        assert!(chain.is_empty());
        assert!(chain.provide_credential(&Context::new()).await?.is_none());
        Ok(())
    }
}
