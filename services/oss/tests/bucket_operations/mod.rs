use crate::mock::{client, MockHttpSend};
use http::header::AUTHORIZATION;
use http::{Method, StatusCode};
use ossign_core::{ErrorKind, Result};
use ossign_oss::{parse_list_buckets, Acl};
use pretty_assertions::assert_eq;
use test_case::test_case;

const LIST_BUCKETS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ListAllMyBucketsResult>
  <Buckets>
    <Bucket>
      <CreationDate>2021-01-01T00:00:00.000Z</CreationDate>
      <Location>oss-cn-hangzhou</Location>
      <Name>my-bucket</Name>
    </Bucket>
  </Buckets>
</ListAllMyBucketsResult>"#;

const ACCESS_DENIED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error>
  <Code>AccessDenied</Code>
  <Message>The bucket you access does not belong to you.</Message>
  <RequestId>5C3D9175B6FC201293AD****</RequestId>
  <HostId>my-bucket.oss-cn-hangzhou.aliyuncs.com</HostId>
</Error>"#;

#[tokio::test]
async fn test_list_buckets() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, LIST_BUCKETS);
    let client = client(http.clone());

    let body = client.list_buckets().await?;
    assert_eq!(body, LIST_BUCKETS.as_bytes());

    let buckets = parse_list_buckets(&body)?;
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].name, "my-bucket");

    let req = &http.requests()[0];
    assert_eq!(req.method(), Method::GET);
    assert_eq!(req.uri().path(), "/");
    Ok(())
}

#[tokio::test]
async fn test_create_bucket() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    client.create_bucket("my-bucket").await?;

    let req = &http.requests()[0];
    assert_eq!(req.method(), Method::PUT);
    assert_eq!(req.uri().path(), "/my-bucket");
    assert!(req.headers().contains_key(AUTHORIZATION));
    assert!(!req.headers().contains_key("x-oss-acl"));
    Ok(())
}

#[test_case(Acl::PublicReadWrite, "public-read-write")]
#[test_case(Acl::PublicRead, "public-read")]
#[test_case(Acl::Private, "private")]
#[tokio::test]
async fn test_put_bucket_acl(acl: Acl, token: &str) {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    client
        .put_bucket_acl("my-bucket", acl)
        .await
        .expect("put bucket acl must succeed");

    let req = &http.requests()[0];
    assert_eq!(req.method(), Method::PUT);
    assert_eq!(req.uri().path(), "/my-bucket");
    assert_eq!(req.headers()["x-oss-acl"], token);
}

#[tokio::test]
async fn test_delete_bucket() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::NO_CONTENT, "");
    let client = client(http.clone());

    client.delete_bucket("my-bucket").await?;

    let req = &http.requests()[0];
    assert_eq!(req.method(), Method::DELETE);
    assert_eq!(req.uri().path(), "/my-bucket");
    Ok(())
}

#[test_case(StatusCode::NO_CONTENT, "204 No Content"; "success code of another operation")]
#[test_case(StatusCode::CONFLICT, "409 Conflict"; "conflict")]
#[test_case(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error"; "server error")]
#[tokio::test]
async fn test_create_bucket_unexpected_status(status: StatusCode, phrase: &str) {
    let http = MockHttpSend::default().respond(status, "");
    let client = client(http.clone());

    let err = client
        .create_bucket("my-bucket")
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert_eq!(err.status(), Some(status));
    assert!(err.to_string().contains(phrase), "{err}");
}

#[tokio::test]
async fn test_delete_bucket_expects_no_content() {
    let http = MockHttpSend::default().respond(StatusCode::OK, "");
    let client = client(http.clone());

    let err = client
        .delete_bucket("my-bucket")
        .await
        .expect_err("200 is not a success for delete");
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert!(err.to_string().contains("200 OK"), "{err}");
}

#[tokio::test]
async fn test_put_bucket_acl_error_carries_body() {
    let http = MockHttpSend::default().respond(StatusCode::FORBIDDEN, ACCESS_DENIED);
    let client = client(http.clone());

    let err = client
        .put_bucket_acl("my-bucket", Acl::Private)
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert_eq!(
        err.to_string(),
        "403 Forbidden: AccessDenied: The bucket you access does not belong to you. (request id: 5C3D9175B6FC201293AD****, host id: my-bucket.oss-cn-hangzhou.aliyuncs.com)"
    );
}

#[tokio::test]
async fn test_list_buckets_unexpected_status() {
    let http = MockHttpSend::default().respond(StatusCode::FORBIDDEN, ACCESS_DENIED);
    let client = client(http.clone());

    let err = client.list_buckets().await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
    assert!(err.to_string().starts_with("403 Forbidden"));
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let http = MockHttpSend::default().fail();
    let client = client(http.clone());

    let err = client
        .delete_bucket("my-bucket")
        .await
        .expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.to_string(), "connection reset by peer");
    assert_eq!(http.requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_bucket_name_is_not_sent() {
    let http = MockHttpSend::default();
    let client = client(http.clone());

    let err = client.create_bucket("").await.expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.requests().is_empty());
}
