use std::fmt;
use std::str::FromStr;

use s3sign_core::Error;

/// The generation of the AWS signature specification used to sign a request.
///
/// S3-compatible services accept one or both of these; pick the one your
/// endpoint documents. When in doubt, use [`SignatureVersion::V4`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureVersion {
    /// Legacy signatures: base64 HMAC-SHA1, `Authorization: AWS access:signature`.
    V2,
    /// Current signatures: hex HMAC-SHA256 over a canonical request,
    /// `Authorization: AWS4-HMAC-SHA256 ...`.
    #[default]
    V4,
}

impl fmt::Display for SignatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureVersion::V2 => write!(f, "v2"),
            SignatureVersion::V4 => write!(f, "v4"),
        }
    }
}

impl FromStr for SignatureVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("v2") {
            Ok(SignatureVersion::V2)
        } else if s.eq_ignore_ascii_case("v4") {
            Ok(SignatureVersion::V4)
        } else {
            Err(Error::version_unsupported(format!(
                "signature version must be v2 or v4, got: {s}"
            )))
        }
    }
}
