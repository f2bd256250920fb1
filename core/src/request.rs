use std::mem;
use std::str::FromStr;
use std::time::Duration;

use http::header::AsHeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// A request pulled apart for signing.
///
/// [`SigningRequest::build`] moves the pieces a signer works on out of the
/// caller's [`http::request::Parts`]; the signer mutates them freely and
/// [`SigningRequest::apply`] writes the result back. Nothing the signer
/// does is visible to the caller until `apply` runs.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// Query pairs, percent-decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Pull the signable pieces out of the request.
    ///
    /// The query string is split into percent-decoded pairs. A request
    /// without an authority can't be signed: every signature covers the
    /// host.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // The headers move out wholesale and move back in apply.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Write the signed pieces back into the request.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;

        let mut uri_parts = mem::take(&mut parts.uri).into_parts();
        uri_parts.scheme = Some(self.scheme);
        uri_parts.authority = Some(self.authority);
        uri_parts.path_and_query = {
            let mut paq = self.path;
            for (i, (k, v)) in self.query.iter().enumerate() {
                paq.push(if i == 0 { '?' } else { '&' });
                paq.push_str(k);
                if !v.is_empty() {
                    paq.push('=');
                    paq.push_str(v);
                }
            }

            Some(PathAndQuery::from_str(&paq)?)
        };
        parts.uri = Uri::from_parts(uri_parts)?;

        Ok(())
    }

    /// Append a query pair.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Read a header, treating an absent header as empty.
    #[inline]
    pub fn header_or_empty(&self, key: impl AsHeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Trim surrounding spaces off a header value.
    pub fn normalize_header_value(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let start = bs.iter().position(|b| *b != b' ').unwrap_or(0);
        let end = bs.len() - bs.iter().rev().position(|b| *b != b' ').unwrap_or(0);

        // This can't fail because we started with a valid HeaderValue and only trimmed spaces
        *v = HeaderValue::from_bytes(&bs[start..end]).expect("invalid header value")
    }

    /// Header names, lowercased and sorted, the way a signature's
    /// signed-headers list wants them.
    pub fn signed_header_names(&self) -> Vec<&str> {
        let mut names = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        names.sort_unstable();

        names
    }

    /// Headers whose lowercased name starts with `prefix`.
    pub fn headers_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter(|(k, _)| k.as_str().starts_with(prefix))
            .map(|(k, v)| {
                (
                    k.as_str().to_lowercase(),
                    v.to_str().expect("must be valid header").to_string(),
                )
            })
            .collect()
    }

    /// Sort `name:value` pairs by name and join them into one block:
    /// `[(a, b), (c, d)]` becomes `"a:b\nc:d"` for `sep: ":"`, `join: "\n"`.
    pub fn sorted_header_lines(
        mut headers: Vec<(String, String)>,
        sep: &str,
        join: &str,
    ) -> String {
        headers.sort();

        let lines = headers
            .into_iter()
            .map(|(k, v)| format!("{k}{sep}{v}"))
            .collect::<Vec<_>>();

        lines.join(join)
    }
}

/// How a signature is attached to the request.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signature goes into the `Authorization` header.
    Header,
    /// Signature goes into the query, expiring after the given lifetime.
    Query(Duration),
}
