use log::debug;
use s3sign_core::{Context, ProvideCredential, Result, SigningCredential};

/// Chain multiple credential providers and try them in order.
///
/// The chain returns the first credential a provider yields. A provider
/// that finds nothing makes way for the next one; a provider that fails
/// aborts the whole chain.
///
/// # Example
///
/// ```no_run
/// use s3sign_aws::provide_credential::{
///     EnvCredentialProvider, ProvideCredentialChain, StaticCredentialProvider,
/// };
///
/// let chain = ProvideCredentialChain::new()
///     .push(EnvCredentialProvider::new())
///     .push(StaticCredentialProvider::new(
///         "access_key_id",
///         "secret_access_key",
///         "us-east-1",
///     ));
/// ```
#[derive(Debug)]
pub struct ProvideCredentialChain<C: SigningCredential> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: SigningCredential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: SigningCredential> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl<C: SigningCredential> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            debug!("trying credential provider: {provider:?}");
            if let Some(credential) = provider.provide_credential(ctx)? {
                return Ok(Some(credential));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use s3sign_core::Error;

    use super::*;
    use crate::provide_credential::StaticCredentialProvider;
    use crate::Credential;

    #[derive(Debug)]
    struct EmptyProvider;

    impl ProvideCredential for EmptyProvider {
        type Credential = Credential;

        fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    impl ProvideCredential for FailingProvider {
        type Credential = Credential;

        fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::unexpected("provider exploded"))
        }
    }

    #[test]
    fn test_first_hit_wins() {
        let chain = ProvideCredentialChain::new()
            .push(EmptyProvider)
            .push(StaticCredentialProvider::new("first", "secret", "us-east-1"))
            .push(StaticCredentialProvider::new(
                "second",
                "secret",
                "us-east-1",
            ));

        let cred = chain
            .provide_credential(&Context::new())
            .unwrap()
            .expect("credential must be found");
        assert_eq!(cred.access_key_id, "first");
    }

    #[test]
    fn test_empty_chain_finds_nothing() {
        let chain: ProvideCredentialChain<Credential> = ProvideCredentialChain::new();
        assert!(chain.provide_credential(&Context::new()).unwrap().is_none());
    }

    #[test]
    fn test_error_aborts_chain() {
        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(StaticCredentialProvider::new("ak", "sk", "us-east-1"));

        assert!(chain.provide_credential(&Context::new()).is_err());
    }
}
