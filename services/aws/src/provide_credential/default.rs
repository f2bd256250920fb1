use std::sync::Arc;

use s3sign_core::{Context, ProvideCredential, Result};

use super::{ConfigCredentialProvider, EnvCredentialProvider, ProvideCredentialChain};
use crate::{Config, Credential};

/// The default credential resolution chain.
///
/// Resolution order:
///
/// 1. Keys set on the [`Config`], via [`ConfigCredentialProvider`]
/// 2. The environment, via [`EnvCredentialProvider`]
///
/// Explicit configuration beats the ambient environment; the first
/// provider yielding a credential wins.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl DefaultCredentialProvider {
    /// Create the default chain for the given config.
    pub fn new(config: Arc<Config>) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(config))
            .push(EnvCredentialProvider::new());

        Self { chain }
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use s3sign_core::StaticEnv;

    use super::*;
    use crate::constants::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};

    #[test]
    fn test_config_beats_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (AWS_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (AWS_SECRET_ACCESS_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let config = Config::new()
            .with_access_key_id("config_ak")
            .with_secret_access_key("config_sk");
        let provider = DefaultCredentialProvider::new(Arc::new(config));

        let cred = provider
            .provide_credential(&ctx)
            .unwrap()
            .expect("credential must be found");
        assert_eq!(cred.access_key_id, "config_ak");
    }

    #[test]
    fn test_falls_back_to_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (AWS_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (AWS_SECRET_ACCESS_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let provider = DefaultCredentialProvider::new(Arc::new(Config::new()));

        let cred = provider
            .provide_credential(&ctx)
            .unwrap()
            .expect("credential must be found");
        assert_eq!(cred.access_key_id, "env_ak");
    }

    #[test]
    fn test_nothing_configured_finds_nothing() {
        let provider = DefaultCredentialProvider::new(Arc::new(Config::new()));
        assert!(provider
            .provide_credential(&Context::new())
            .unwrap()
            .is_none());
    }
}
