use std::fmt::{Debug, Formatter};

use s3sign_core::utils::Redact;
use s3sign_core::{Context, Error, Result};

use crate::constants::*;

/// Config carries all the configuration for S3 request signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    pub region: Option<String>,
    /// `endpoint` is the host of an S3-compatible service, e.g.
    /// `play.min.io` or `s3.eu-central-1.amazonaws.com`.
    ///
    /// It must be a bare host (optionally with a port), never a URL.
    /// Will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ENDPOINT_URL`]
    pub endpoint: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set endpoint.
    ///
    /// Fails when the endpoint carries a protocol prefix.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_endpoint(&endpoint)?;
        self.endpoint = Some(endpoint);

        Ok(self)
    }

    /// Load config from env.
    ///
    /// Fails when the environment supplies an endpoint with a protocol
    /// prefix.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(AWS_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_SECRET_ACCESS_KEY) {
            self.secret_access_key.get_or_insert(v);
        }
        if let Some(v) = ctx
            .env_var(AWS_REGION)
            .or_else(|| ctx.env_var(AWS_DEFAULT_REGION))
        {
            self.region.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AWS_ENDPOINT_URL) {
            validate_endpoint(&v)?;
            self.endpoint.get_or_insert(v);
        }

        Ok(self)
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return Err(Error::endpoint_invalid(format!(
            "do NOT include the protocol (http:// or https://) in the custom endpoint: {endpoint}"
        )));
    }

    Ok(())
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "access_key_id",
                &self.access_key_id.as_ref().map(Redact::from),
            )
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(Redact::from),
            )
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s3sign_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([
                (AWS_ACCESS_KEY_ID.to_string(), "access_key_id".to_string()),
                (
                    AWS_SECRET_ACCESS_KEY.to_string(),
                    "secret_access_key".to_string(),
                ),
                (AWS_DEFAULT_REGION.to_string(), "eu-central-1".to_string()),
            ]),
        });

        let cfg = Config::new().from_env(&ctx).unwrap();
        assert_eq!(cfg.access_key_id.as_deref(), Some("access_key_id"));
        assert_eq!(cfg.secret_access_key.as_deref(), Some("secret_access_key"));
        assert_eq!(cfg.region.as_deref(), Some("eu-central-1"));
        assert_eq!(cfg.endpoint, None);
    }

    #[test]
    fn test_explicit_fields_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([(AWS_REGION.to_string(), "us-west-2".to_string())]),
        });

        let cfg = Config::new()
            .with_region("ap-southeast-1")
            .from_env(&ctx)
            .unwrap();
        assert_eq!(cfg.region.as_deref(), Some("ap-southeast-1"));
    }

    #[test]
    fn test_endpoint_rejects_protocol_prefix() {
        let err = Config::new()
            .with_endpoint("https://play.min.io")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EndpointInvalid);

        let cfg = Config::new().with_endpoint("play.min.io:9000").unwrap();
        assert_eq!(cfg.endpoint.as_deref(), Some("play.min.io:9000"));
    }

    #[test]
    fn test_endpoint_from_env_rejects_protocol_prefix() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from_iter([(
                AWS_ENDPOINT_URL.to_string(),
                "http://127.0.0.1:9000".to_string(),
            )]),
        });

        let err = Config::new().from_env(&ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EndpointInvalid);
    }
}
