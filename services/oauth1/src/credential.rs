use std::fmt::{Debug, Formatter};

use engage_core::{utils::Redact, SigningCredential};

/// Credential for OAuth 1.0a: the consumer (application) pair plus the
/// access token pair of the account acting.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential {
    /// Consumer key of the application.
    pub consumer_key: String,
    /// Consumer secret of the application.
    pub consumer_secret: String,
    /// Access token of the account.
    pub access_token: String,
    /// Access token secret of the account.
    pub access_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field("access_secret", &Redact::from(&self.access_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty()
            && !self.consumer_secret.is_empty()
            && !self.access_token.is_empty()
            && !self.access_secret.is_empty()
    }
}
