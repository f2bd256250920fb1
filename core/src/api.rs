use std::fmt::Debug;
use std::time::Duration;

use crate::Context;
use crate::Result;

/// A credential a signer can stamp requests with.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Whether this credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// Loads credentials from wherever a deployment keeps them.
///
/// A provider returns `Ok(None)` when its source simply has nothing, so a
/// chain can move on to the next one. Errors are for sources that exist
/// but are unusable.
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Try to load a credential.
    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// Builds the signature for one request.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential this signer consumes.
    ///
    /// Typically the credential a matching [`ProvideCredential`] returns.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// With `expires_in` set, the signature goes into the query as a
    /// presigned URL valid for that long. Without it, the signature goes
    /// into the `Authorization` header.
    fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        expires_in: Option<Duration>,
    ) -> Result<()>;
}
