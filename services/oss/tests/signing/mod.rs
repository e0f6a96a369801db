use crate::mock::{client, MockHttpSend, ACCESS_KEY_ID, ACCESS_KEY_SECRET, ENDPOINT};
use http::header::{AUTHORIZATION, DATE, HOST};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, StatusCode};
use ossign_core::time::parse_http_date;
use ossign_core::{Error, ErrorKind, Result};
use ossign_oss::{authorization, canonical_header_block, canonicalize_headers, string_to_sign};
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;

/// Recompute the signature of a recorded request from its own headers.
fn expected_authorization<T>(req: &Request<T>) -> Result<String> {
    let date = req.headers()[DATE].to_str()?;
    let headers = canonicalize_headers(req.headers())?;
    let path = percent_decode_str(req.uri().path())
        .decode_utf8()
        .map_err(|e| Error::request_invalid("path is not valid utf-8").with_source(e))?;
    let s = string_to_sign(
        req.method().as_str(),
        "",
        "",
        date,
        &canonical_header_block(&headers),
        &path,
    );
    Ok(authorization(ACCESS_KEY_ID, ACCESS_KEY_SECRET, &s))
}

#[tokio::test]
async fn test_send_sets_date_host_and_authorization() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    client.send(Method::GET, "/", None).await?;

    let reqs = http.requests();
    assert_eq!(reqs.len(), 1);
    let req = &reqs[0];
    assert_eq!(req.method(), Method::GET);
    assert_eq!(req.uri().to_string(), format!("http://{ENDPOINT}/"));
    assert_eq!(req.headers()[HOST], ENDPOINT);
    parse_http_date(req.headers()[DATE].to_str()?)?;
    assert_eq!(
        req.headers()[AUTHORIZATION].to_str()?,
        expected_authorization(req)?
    );
    assert!(req.headers()[AUTHORIZATION]
        .to_str()?
        .starts_with("OSS AKID:"));
    Ok(())
}

#[tokio::test]
async fn test_send_merges_vendor_headers() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_bytes(b"X-OSS-Meta-Owner")?,
        HeaderValue::from_static("ops"),
    );
    headers.insert("x-oss-acl", HeaderValue::from_static("public-read"));
    headers.insert("cache-control", HeaderValue::from_static("no-cache"));
    client
        .send(Method::PUT, "/my-bucket", Some(headers))
        .await?;

    let req = &http.requests()[0];
    assert_eq!(req.headers()["x-oss-acl"], "public-read");
    assert_eq!(req.headers()["cache-control"], "no-cache");
    assert_eq!(
        canonical_header_block(&canonicalize_headers(req.headers())?),
        "x-oss-acl:public-read\nx-oss-meta-owner:ops\n"
    );
    assert_eq!(
        req.headers()[AUTHORIZATION].to_str()?,
        expected_authorization(req)?
    );
    Ok(())
}

#[tokio::test]
async fn test_send_signs_path_without_query() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    client.send(Method::GET, "/my-bucket?acl", None).await?;

    let req = &http.requests()[0];
    assert_eq!(req.uri().path(), "/my-bucket");
    assert_eq!(req.uri().query(), Some("acl"));
    assert_eq!(
        req.headers()[AUTHORIZATION].to_str()?,
        expected_authorization(req)?
    );
    Ok(())
}

#[tokio::test]
async fn test_send_signs_decoded_path() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    client.send(Method::GET, "/my%20bucket", None).await?;

    let req = &http.requests()[0];
    assert_eq!(req.uri().path(), "/my%20bucket");
    assert_eq!(
        req.headers()[AUTHORIZATION].to_str()?,
        expected_authorization(req)?
    );

    let raw = string_to_sign(
        "GET",
        "",
        "",
        req.headers()[DATE].to_str()?,
        "",
        req.uri().path(),
    );
    assert_ne!(
        req.headers()[AUTHORIZATION].to_str()?,
        authorization(ACCESS_KEY_ID, ACCESS_KEY_SECRET, &raw)
    );
    Ok(())
}

#[tokio::test]
async fn test_send_rejects_undecodable_path() {
    let http = MockHttpSend::default();
    let client = client(http.clone());

    let err = client
        .send(Method::GET, "/a%FFb", None)
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
}
