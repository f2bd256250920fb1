//! AWS S3 service signer
//!
//! Both SigV2 and SigV4 are supported.

mod acl;
pub use acl::Acl;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

pub mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    ProvideCredentialChain, StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::RequestSigner;

mod version;
pub use version::SignatureVersion;

mod constants;
mod v2;
mod v4;
