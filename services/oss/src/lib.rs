//! OSS request signing and bucket operations for ossign.
//!
//! ## Overview
//!
//! OSS authenticates requests with an HMAC-SHA1 signature over a canonical
//! string built from the method, content headers, date, `x-oss-*` headers and
//! path. [`RequestSigner`] builds that string and sets the `Authorization`
//! header, [`Client`] stamps `Date` and `Host`, signs, and hands the request to
//! the transport configured on the [`ossign_core::Context`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use ossign_core::{Context, OsEnv, Result};
//! use ossign_http_send_reqwest::ReqwestHttpSend;
//! use ossign_oss::{Acl, Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let config = Config::default()
//!         .with_endpoint("oss-cn-hangzhou.aliyuncs.com")
//!         .from_env(&ctx);
//!     let client = Client::from_config(ctx, &config)?;
//!
//!     client.create_bucket("my-bucket").await?;
//!     client.put_bucket_acl("my-bucket", Acl::Private).await?;
//!     let body = client.list_buckets().await?;
//!     for bucket in ossign_oss::parse_list_buckets(&body)? {
//!         println!("{} {}", bucket.name, bucket.creation_date);
//!     }
//!     client.delete_bucket("my-bucket").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Credential Sources
//!
//! ```bash
//! export ALIBABA_CLOUD_OSS_ENDPOINT=oss-cn-hangzhou.aliyuncs.com
//! export ALIBABA_CLOUD_ACCESS_KEY_ID=your-access-key-id
//! export ALIBABA_CLOUD_ACCESS_KEY_SECRET=your-access-key-secret
//! export ALIBABA_CLOUD_SECURITY_TOKEN=your-sts-token  # Optional, for STS
//! ```
//!
//! Any [`ossign_core::ProvideCredential`] can be plugged in through
//! [`ossign_core::Signer`] and [`Client::new`].
//!
//! ## Signing only
//!
//! The signing helpers are public for callers that build requests on their own:
//!
//! ```
//! use ossign_oss::{authorization, canonical_header_block, string_to_sign};
//!
//! let headers = canonical_header_block(&[("x-oss-acl".to_string(), "private".to_string())]);
//! let s = string_to_sign("PUT", "", "", "Fri, 01 Jan 2021 00:00:00 GMT", &headers, "/my-bucket");
//! assert_eq!(authorization("AKID", "secret", &s), "OSS AKID:3KWpssKCX8KG2Ld9XxfSUPFi6cI=");
//! ```

mod constants;

mod acl;
pub use acl::Acl;

mod bucket;
pub use bucket::{parse_list_buckets, Bucket};

mod client;
pub use client::Client;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod error;

mod sign_request;
pub use sign_request::{
    authorization, canonical_header_block, canonicalize_headers, string_to_sign, RequestSigner,
};

mod provide_credential;
pub use provide_credential::*;
