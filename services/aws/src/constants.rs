use std::time::Duration;

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in s3 signing.
pub const CONTENT_MD5: &str = "content-md5";
pub const X_AMZ_ACL: &str = "x-amz-acl";
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
pub const X_AMZ_DATE: &str = "x-amz-date";

// Prefix shared by all provider extension headers.
pub const X_AMZ_PREFIX: &str = "x-amz-";

// Env values used in aws services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_ENDPOINT_URL: &str = "AWS_ENDPOINT_URL";

// Hosts with special signing behavior.
pub const S3_DOMAIN: &str = "s3.amazonaws.com";
pub const CLOUDFRONT_DOMAIN: &str = "cloudfront.amazonaws.com";

/// SHA-256 hex digest of the empty byte string, the payload hash signed for
/// bodyless requests.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Region signed when neither config nor environment picks one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Lifetime of a presigned URL when the caller doesn't pick one.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(10);

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
/// as used in query strings.
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
