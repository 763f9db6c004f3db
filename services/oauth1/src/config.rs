use std::fmt::{Debug, Formatter};

use crate::constants::*;
use crate::credential::Credential;
use engage_core::{utils::Redact, Context};

/// Config carries all the configuration for OAuth 1.0a signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_ACCESS_TOKEN`]
    pub access_token: Option<String>,
    /// `access_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_ACCESS_SECRET`]
    pub access_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set consumer_key
    pub fn with_consumer_key(mut self, consumer_key: impl Into<String>) -> Self {
        self.consumer_key = Some(consumer_key.into());
        self
    }

    /// Set consumer_secret
    pub fn with_consumer_secret(mut self, consumer_secret: impl Into<String>) -> Self {
        self.consumer_secret = Some(consumer_secret.into());
        self
    }

    /// Set access_token
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Set access_secret
    pub fn with_access_secret(mut self, access_secret: impl Into<String>) -> Self {
        self.access_secret = Some(access_secret.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set win over the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_KEY) {
            self.consumer_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_CONSUMER_SECRET) {
            self.consumer_secret.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_ACCESS_TOKEN) {
            self.access_token.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_ACCESS_SECRET) {
            self.access_secret.get_or_insert(v);
        }

        self
    }

    /// Build a credential if all four fields are present.
    pub fn to_credential(&self) -> Option<Credential> {
        match (
            &self.consumer_key,
            &self.consumer_secret,
            &self.access_token,
            &self.access_secret,
        ) {
            (Some(ck), Some(cs), Some(at), Some(as_)) => {
                Some(Credential::new(ck.clone(), cs.clone(), at.clone(), as_.clone()))
            }
            _ => None,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("access_token", &Redact::from(&self.access_token))
            .field("access_secret", &Redact::from(&self.access_secret))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engage_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env_keeps_explicit_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (OAUTH1_CONSUMER_KEY.to_string(), "env_ck".to_string()),
                (OAUTH1_CONSUMER_SECRET.to_string(), "env_cs".to_string()),
                (OAUTH1_ACCESS_TOKEN.to_string(), "env_at".to_string()),
                (OAUTH1_ACCESS_SECRET.to_string(), "env_as".to_string()),
            ]),
        });

        let config = Config::new().with_consumer_key("ck").from_env(&ctx);

        assert_eq!(config.consumer_key.as_deref(), Some("ck"));
        assert_eq!(config.consumer_secret.as_deref(), Some("env_cs"));
        assert_eq!(
            config.to_credential(),
            Some(Credential::new("ck", "env_cs", "env_at", "env_as"))
        );
    }

    #[test]
    fn test_partial_config_has_no_credential() {
        let config = Config::new()
            .with_consumer_key("ck")
            .with_consumer_secret("cs")
            .with_access_token("at");

        assert!(config.to_credential().is_none());
    }
}
