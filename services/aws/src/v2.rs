//! AWS Signature Version 2 string-to-sign construction.

use std::fmt::Write;

use http::header::CONTENT_TYPE;
use log::debug;
use s3sign_core::{Result, SigningRequest};

use crate::constants::{CLOUDFRONT_DOMAIN, CONTENT_MD5, X_AMZ_PREFIX};

/// Construct string to sign for SigV2.
///
/// ## Format
///
/// ```text
/// VERB + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// CanonicalizedAmzHeaders +
/// CanonicalizedResource
/// ```
///
/// `date_line` is the raw `Date` header value for header signing, or the
/// expiry epoch seconds for presigned URLs.
///
/// CloudFront doesn't understand canonicalized resources: requests against
/// it sign the date line alone.
pub fn string_to_sign(ctx: &SigningRequest, date_line: &str, bucket: &str) -> Result<String> {
    if ctx.authority.host() == CLOUDFRONT_DOMAIN {
        debug!("string to sign: {date_line}");
        return Ok(date_line.to_string());
    }

    let mut s = String::new();
    s.write_str(ctx.method.as_str())?;
    s.write_str("\n")?;
    s.write_str(ctx.header_or_empty(CONTENT_MD5)?)?;
    s.write_str("\n")?;
    s.write_str(ctx.header_or_empty(&CONTENT_TYPE)?)?;
    s.write_str("\n")?;
    s.write_str(date_line)?;
    let amz_headers = canonicalize_amz_headers(ctx);
    if !amz_headers.is_empty() {
        s.write_str("\n")?;
        s.write_str(&amz_headers)?;
    }
    s.write_str("\n")?;
    s.write_str(&canonicalize_resource(ctx, bucket))?;

    debug!("string to sign: {}", &s);
    Ok(s)
}

/// Collect `x-amz-*` headers as lowercased `name:value` lines, sorted by
/// name. Values are taken verbatim; headers with empty values don't
/// participate in signing.
fn canonicalize_amz_headers(ctx: &SigningRequest) -> String {
    let headers = ctx
        .headers_with_prefix(X_AMZ_PREFIX)
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect();

    SigningRequest::sorted_header_lines(headers, ":", "\n")
}

/// The canonicalized resource is the bucket-qualified path.
///
/// Path-style requests already carry `/bucket/...` and sign it verbatim;
/// virtual-hosted requests get the bucket prepended. An empty bucket
/// leaves the path untouched.
fn canonicalize_resource(ctx: &SigningRequest, bucket: &str) -> String {
    if bucket.is_empty() || ctx.path.starts_with(&format!("/{bucket}")) {
        ctx.path.clone()
    } else {
        format!("/{bucket}{}", ctx.path)
    }
}
