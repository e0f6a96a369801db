use crate::constants::*;
use crate::credential::Credential;
use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use http::{HeaderMap, HeaderName, HeaderValue};
use log::debug;
use ossign_core::hash::base64_hmac_sha1;
use ossign_core::time::{format_http_date, now, DateTime};
use ossign_core::{Context, Error, Result, SignRequest};

/// RequestSigner signs requests with the OSS header signature.
///
/// The signature covers the method, `Content-MD5`, `Content-Type`, `Date`,
/// every `x-oss-*` header and the request path:
///
/// ```text
/// METHOD\nContent-MD5\nContent-Type\nDate\n[x-oss-key:value\n...]Path
/// ```
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time used when the request carries no `Date`.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "oss requests can't be sent without credential",
            ));
        };

        if !req.headers.contains_key(DATE) {
            req.headers
                .insert(DATE, format_http_date(self.get_time()).parse()?);
        }
        if let Some(token) = &cred.security_token {
            let mut value: HeaderValue = token.parse()?;
            value.set_sensitive(true);
            req.headers.insert(X_OSS_SECURITY_TOKEN, value);
        }

        let string_to_sign = build_string_to_sign(req)?;
        debug!("calculated string to sign: {string_to_sign:?}");

        let mut value: HeaderValue = authorization(
            &cred.access_key_id,
            &cred.access_key_secret,
            &string_to_sign,
        )
        .parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

fn build_string_to_sign(req: &http::request::Parts) -> Result<String> {
    let headers = canonicalize_headers(&req.headers)?;
    // `Uri::path` is never empty, an authority-only uri yields `/`.
    let path = percent_encoding::percent_decode_str(req.uri.path())
        .decode_utf8()
        .map_err(|e| {
            Error::request_invalid(format!("path {} is not valid utf-8", req.uri.path()))
                .with_source(e)
        })?;

    Ok(string_to_sign(
        req.method.as_str(),
        header_get_or_default(&req.headers, CONTENT_MD5)?,
        header_get_or_default(&req.headers, CONTENT_TYPE.as_str())?,
        header_get_or_default(&req.headers, DATE.as_str())?,
        &canonical_header_block(&headers),
        &path,
    ))
}

fn header_get_or_default<'a>(headers: &'a HeaderMap, key: &str) -> Result<&'a str> {
    match headers.get(key) {
        Some(v) => Ok(v.to_str()?),
        None => Ok(""),
    }
}

/// Collect the `x-oss-*` headers that take part in the signature.
///
/// Names are folded to lowercase and the result is sorted by the bytes of the
/// name. When a header has several values only the first one is used.
pub fn canonicalize_headers(headers: &HeaderMap) -> Result<Vec<(String, String)>> {
    let mut pairs = headers
        .keys()
        .filter(|name| is_oss_header(name))
        .filter_map(|name| headers.get(name).map(|v| (name, v)))
        .map(|(name, value)| -> Result<(String, String)> {
            let value = std::str::from_utf8(value.as_bytes()).map_err(|e| {
                Error::request_invalid(format!("header {name} is not valid utf-8")).with_source(e)
            })?;
            Ok((name.as_str().to_ascii_lowercase(), value.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    // Header names are unique, so the order is total.
    pairs.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    Ok(pairs)
}

fn is_oss_header(name: &HeaderName) -> bool {
    name.as_str()
        .get(..X_OSS_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(X_OSS_PREFIX))
}

/// Render canonical headers as `key:value\n` lines.
///
/// ```shell
/// [(x-oss-a, 1), (x-oss-b, 2)] => "x-oss-a:1\nx-oss-b:2\n"
/// ```
///
/// No header renders as the empty string.
pub fn canonical_header_block(headers: &[(String, String)]) -> String {
    let size = headers.iter().map(|(k, v)| k.len() + v.len() + 2).sum();
    let mut s = String::with_capacity(size);
    for (k, v) in headers {
        s.push_str(k);
        s.push(':');
        s.push_str(v);
        s.push('\n');
    }
    s
}

/// Build the string to sign.
///
/// `canonical_headers` must come from [`canonical_header_block`], it already
/// carries its trailing newlines and sits right before `path`.
pub fn string_to_sign(
    method: &str,
    content_md5: &str,
    content_type: &str,
    date: &str,
    canonical_headers: &str,
    path: &str,
) -> String {
    format!("{method}\n{content_md5}\n{content_type}\n{date}\n{canonical_headers}{path}")
}

/// Compute the `Authorization` header value:
/// `OSS <access_key_id>:<base64(hmac-sha1(access_key_secret, string_to_sign))>`
pub fn authorization(access_key_id: &str, access_key_secret: &str, string_to_sign: &str) -> String {
    let signature = base64_hmac_sha1(access_key_secret.as_bytes(), string_to_sign.as_bytes());
    format!("OSS {access_key_id}:{signature}")
}
