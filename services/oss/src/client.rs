use crate::provide_credential::DefaultCredentialProvider;
use crate::{Config, Credential, RequestSigner};
use bytes::Bytes;
use http::header::{DATE, HOST};
use http::{HeaderMap, Method, Request, Response};
use log::debug;
use ossign_core::time::{format_http_date, now};
use ossign_core::{Context, Error, Result, Signer};
use std::fmt::{Debug, Formatter};

/// Client sends signed requests to an oss endpoint.
///
/// Every call is one request and one response, there is no retry. The
/// transport is the [`ossign_core::HttpSend`] configured on the [`Context`].
#[derive(Clone)]
pub struct Client {
    ctx: Context,
    scheme: String,
    endpoint: String,
    signer: Signer<Credential>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("scheme", &self.scheme)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for `endpoint` that signs with `signer`.
    pub fn new(ctx: Context, endpoint: &str, signer: Signer<Credential>) -> Result<Self> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::config_invalid("endpoint is required"));
        }
        if endpoint.contains("://") {
            return Err(Error::config_invalid(format!(
                "endpoint must be a host without scheme: {endpoint}"
            )));
        }

        Ok(Self {
            ctx,
            scheme: "http".to_string(),
            endpoint: endpoint.to_string(),
            signer,
        })
    }

    /// Create a client from config.
    ///
    /// Fails with a config error if the endpoint or any half of the access
    /// key pair is missing, before anything is sent.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let endpoint = config.require_endpoint()?;
        config.require_access_key()?;

        let signer = Signer::new(
            ctx.clone(),
            DefaultCredentialProvider::from_config(config),
            RequestSigner::new(),
        );
        Self::new(ctx, endpoint, signer)
    }

    /// Use another scheme than `http`, like `https`.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// The host requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a signed request without body.
    ///
    /// `Date` and `Host` are set by the client, `headers` are then set
    /// verbatim and replace any existing value. Transport errors are returned
    /// as is, the status of the response is not checked.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        headers: Option<HeaderMap>,
    ) -> Result<Response<Bytes>> {
        if !path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "path must start with '/': {path}"
            )));
        }

        let url = format!("{}://{}{}", self.scheme, self.endpoint, path);
        let (mut parts, body) = Request::builder()
            .method(method)
            .uri(&url)
            .body(Bytes::new())?
            .into_parts();

        parts
            .headers
            .insert(DATE, format_http_date(now()).parse()?);
        parts.headers.insert(HOST, self.endpoint.parse()?);
        if let Some(headers) = headers {
            parts.headers.extend(headers);
        }

        self.signer.sign(&mut parts).await?;

        debug!("sending request: {} {}", parts.method, url);
        self.ctx.http_send(Request::from_parts(parts, body)).await
    }
}
