use crate::constants::X_OSS_ACL;
use crate::error::parse_error;
use crate::{Acl, Client};
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method, Response, StatusCode};
use log::warn;
use ossign_core::{Error, Result};
use serde::Deserialize;

impl Client {
    /// List all buckets owned by the credential.
    ///
    /// Returns the raw response body, see [`parse_list_buckets`] to decode it.
    pub async fn list_buckets(&self) -> Result<Bytes> {
        let resp = self.send(Method::GET, "/", None).await?;
        let resp = expect_status(resp, StatusCode::OK, "list buckets")?;
        Ok(resp.into_body())
    }

    /// Create bucket `name`.
    pub async fn create_bucket(&self, name: &str) -> Result<()> {
        let path = bucket_path(name)?;
        let resp = self.send(Method::PUT, &path, None).await?;
        expect_status(resp, StatusCode::OK, "create bucket")?;
        Ok(())
    }

    /// Set the access level of bucket `name`.
    pub async fn put_bucket_acl(&self, name: &str, acl: Acl) -> Result<()> {
        let path = bucket_path(name)?;
        let mut headers = HeaderMap::new();
        headers.insert(X_OSS_ACL, HeaderValue::from_static(acl.as_str()));

        let resp = self.send(Method::PUT, &path, Some(headers)).await?;
        expect_status(resp, StatusCode::OK, "put bucket acl")?;
        Ok(())
    }

    /// Delete bucket `name`.
    pub async fn delete_bucket(&self, name: &str) -> Result<()> {
        let path = bucket_path(name)?;
        let resp = self.send(Method::DELETE, &path, None).await?;
        expect_status(resp, StatusCode::NO_CONTENT, "delete bucket")?;
        Ok(())
    }
}

fn bucket_path(name: &str) -> Result<String> {
    if name.is_empty() || name.contains(['/', '?', '#']) {
        return Err(Error::request_invalid(format!(
            "invalid bucket name: {name:?}"
        )));
    }
    Ok(format!("/{name}"))
}

fn expect_status(resp: Response<Bytes>, expected: StatusCode, op: &str) -> Result<Response<Bytes>> {
    if resp.status() == expected {
        return Ok(resp);
    }

    let err = parse_error(resp);
    warn!("{op} failed: {err}");
    Err(err)
}

/// Bucket is one entry of the bucket listing.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Bucket {
    /// Bucket name.
    pub name: String,
    /// Creation time as sent by the service, like `2014-02-17T18:12:43.000Z`.
    pub creation_date: String,
    /// Region the bucket lives in, like `oss-cn-hangzhou`.
    pub location: Option<String>,
    /// Storage class, like `Standard`.
    pub storage_class: Option<String>,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ListAllMyBucketsResult {
    buckets: Buckets,
}

#[derive(Default, Debug, Deserialize)]
#[serde(default)]
struct Buckets {
    #[serde(rename = "Bucket")]
    bucket: Vec<Bucket>,
}

/// Decode the body returned by [`Client::list_buckets`].
pub fn parse_list_buckets(bs: &[u8]) -> Result<Vec<Bucket>> {
    let out: ListAllMyBucketsResult = quick_xml::de::from_reader(bs)
        .map_err(|e| Error::unexpected("failed to decode bucket list").with_source(e))?;
    Ok(out.buckets.bucket)
}
