use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use crate::Context;
use crate::Error;
use crate::ProvideCredential;
use crate::Result;
use crate::SignRequest;
use crate::SigningCredential;

/// Signer is the main struct used to sign the request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    ///
    /// The cached credential is reused while it stays valid and reloaded
    /// from the provider otherwise.
    pub fn sign(&self, req: &mut http::request::Parts, expires_in: Option<Duration>) -> Result<()> {
        let cred = self.lock_credential()?.clone();
        let cred = if cred.is_valid() {
            cred
        } else {
            let loaded = self.loader.provide_credential(&self.ctx)?;
            *self.lock_credential()? = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, cred.as_ref(), expires_in)
    }

    fn lock_credential(&self) -> Result<std::sync::MutexGuard<'_, Option<K>>> {
        self.credential
            .lock()
            .map_err(|_| Error::unexpected("credential cache lock is poisoned"))
    }
}
