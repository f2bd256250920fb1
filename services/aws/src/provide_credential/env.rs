use log::debug;
use s3sign_core::{Context, ProvideCredential, Result};

use crate::constants::{
    AWS_ACCESS_KEY_ID, AWS_DEFAULT_REGION, AWS_REGION, AWS_SECRET_ACCESS_KEY, DEFAULT_REGION,
};
use crate::Credential;

/// Load credentials from the environment.
///
/// Reads [`AWS_ACCESS_KEY_ID`] and [`AWS_SECRET_ACCESS_KEY`]; the region
/// comes from [`AWS_REGION`] with [`AWS_DEFAULT_REGION`] as fallback,
/// defaulting to `us-east-1` when neither is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new environment credential provider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(access_key_id), Some(secret_access_key)) = (
            ctx.env_var(AWS_ACCESS_KEY_ID),
            ctx.env_var(AWS_SECRET_ACCESS_KEY),
        ) else {
            debug!("environment carries no credentials, skipping");
            return Ok(None);
        };
        if access_key_id.is_empty() || secret_access_key.is_empty() {
            return Ok(None);
        }

        let region = ctx
            .env_var(AWS_REGION)
            .or_else(|| ctx.env_var(AWS_DEFAULT_REGION))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Some(Credential {
            access_key_id,
            secret_access_key,
            region,
        }))
    }
}
