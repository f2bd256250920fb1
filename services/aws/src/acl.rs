use std::fmt;
use std::str::FromStr;

use s3sign_core::Error;

use crate::constants::X_AMZ_ACL;

/// Canned access control lists understood by S3-compatible services.
///
/// The signer never interprets these; callers attach the wire literal as
/// the [`Acl::HEADER_NAME`] header, where it participates in signing like
/// any other provider header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acl {
    /// Owner gets full control, nobody else has access.
    Private,
    /// Owner gets full control, everyone else can read.
    PublicRead,
    /// Owner gets full control, everyone else can read and write.
    PublicReadWrite,
    /// Owner gets full control, authenticated users can read.
    AuthenticatedRead,
    /// Object owner gets full control, bucket owner can read.
    BucketOwnerRead,
    /// Both object owner and bucket owner get full control.
    BucketOwnerFullControl,
}

impl Acl {
    /// Header name a canned ACL travels in.
    pub const HEADER_NAME: &'static str = X_AMZ_ACL;

    /// The wire literal for this ACL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Acl::Private => "private",
            Acl::PublicRead => "public-read",
            Acl::PublicReadWrite => "public-read-write",
            Acl::AuthenticatedRead => "authenticated-read",
            Acl::BucketOwnerRead => "bucket-owner-read",
            Acl::BucketOwnerFullControl => "bucket-owner-full-control",
        }
    }
}

impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Acl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private" => Ok(Acl::Private),
            "public-read" => Ok(Acl::PublicRead),
            "public-read-write" => Ok(Acl::PublicReadWrite),
            "authenticated-read" => Ok(Acl::AuthenticatedRead),
            "bucket-owner-read" => Ok(Acl::BucketOwnerRead),
            "bucket-owner-full-control" => Ok(Acl::BucketOwnerFullControl),
            _ => Err(Error::request_invalid(format!("unknown canned ACL: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Acl::Private, "private")]
    #[test_case(Acl::PublicRead, "public-read")]
    #[test_case(Acl::PublicReadWrite, "public-read-write")]
    #[test_case(Acl::AuthenticatedRead, "authenticated-read")]
    #[test_case(Acl::BucketOwnerRead, "bucket-owner-read")]
    #[test_case(Acl::BucketOwnerFullControl, "bucket-owner-full-control")]
    fn test_acl_literals(acl: Acl, literal: &str) {
        assert_eq!(acl.as_str(), literal);
        assert_eq!(literal.parse::<Acl>().unwrap(), acl);
    }

    #[test]
    fn test_unknown_acl() {
        assert!("log-delivery-write".parse::<Acl>().is_err());
    }
}
