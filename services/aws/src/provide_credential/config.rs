use std::sync::Arc;

use s3sign_core::{Context, Error, ProvideCredential, Result};

use crate::constants::DEFAULT_REGION;
use crate::{Config, Credential};

/// Load credentials from a shared [`Config`].
///
/// An access key configured without its secret is a misconfiguration and
/// surfaces as an error instead of silently falling through to the next
/// provider.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a provider backed by the given config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = match &self.config.access_key_id {
            Some(v) if !v.is_empty() => v.clone(),
            _ => return Ok(None),
        };
        let secret_access_key = match &self.config.secret_access_key {
            Some(v) if !v.is_empty() => v.clone(),
            _ => {
                return Err(Error::credential_invalid(
                    "The Amazon S3 Secret Key provided is invalid",
                ))
            }
        };

        let region = self
            .config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Some(Credential {
            access_key_id,
            secret_access_key,
            region,
        }))
    }
}

#[cfg(test)]
mod tests {
    use s3sign_core::ErrorKind;

    use super::*;

    #[test]
    fn test_provide_credential_from_config() {
        let config = Config::new()
            .with_access_key_id("access_key_id")
            .with_secret_access_key("secret_access_key")
            .with_region("ap-northeast-1");
        let provider = ConfigCredentialProvider::new(Arc::new(config));

        let cred = provider
            .provide_credential(&Context::new())
            .unwrap()
            .expect("credential must be found");
        assert_eq!(cred.access_key_id, "access_key_id");
        assert_eq!(cred.secret_access_key, "secret_access_key");
        assert_eq!(cred.region, "ap-northeast-1");
    }

    #[test]
    fn test_missing_region_defaults_to_us_east_1() {
        let config = Config::new()
            .with_access_key_id("ak")
            .with_secret_access_key("sk");
        let provider = ConfigCredentialProvider::new(Arc::new(config));

        let cred = provider
            .provide_credential(&Context::new())
            .unwrap()
            .expect("credential must be found");
        assert_eq!(cred.region, DEFAULT_REGION);
    }

    #[test]
    fn test_empty_config_finds_nothing() {
        let provider = ConfigCredentialProvider::new(Arc::new(Config::new()));
        assert!(provider
            .provide_credential(&Context::new())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_access_key_without_secret_is_error() {
        let config = Config::new().with_access_key_id("ak");
        let provider = ConfigCredentialProvider::new(Arc::new(config));

        let err = provider.provide_credential(&Context::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
        assert!(err.is_credential_error());
    }
}
