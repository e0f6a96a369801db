use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use ossign_core::{Context, Error, HttpSend, Result, Signer};
use ossign_oss::{Client, RequestSigner, StaticCredentialProvider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const ENDPOINT: &str = "oss-cn-hangzhou.aliyuncs.com";
pub const ACCESS_KEY_ID: &str = "AKID";
pub const ACCESS_KEY_SECRET: &str = "secret";

/// MockHttpSend records every request and replays canned responses in order.
#[derive(Debug, Clone, Default)]
pub struct MockHttpSend {
    requests: Arc<Mutex<Vec<Request<Bytes>>>>,
    responses: Arc<Mutex<VecDeque<Option<(StatusCode, &'static str)>>>>,
}

impl MockHttpSend {
    /// Queue a response.
    pub fn respond(self, status: StatusCode, body: &'static str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Some((status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self) -> Self {
        self.responses.lock().unwrap().push_back(None);
        self
    }

    pub fn requests(&self) -> Vec<Request<Bytes>> {
        self.requests.lock().unwrap().drain(..).collect()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: Request<Bytes>) -> Result<Response<Bytes>> {
        self.requests.lock().unwrap().push(req);

        match self.responses.lock().unwrap().pop_front() {
            Some(Some((status, body))) => Ok(Response::builder()
                .status(status)
                .body(Bytes::from_static(body.as_bytes()))?),
            Some(None) => Err(Error::transport("connection reset by peer")),
            None => panic!("no response queued for this request"),
        }
    }
}

pub fn client(http: MockHttpSend) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(http);
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new(ACCESS_KEY_ID, ACCESS_KEY_SECRET),
        RequestSigner::new(),
    );
    Client::new(ctx, ENDPOINT, signer).expect("endpoint is valid")
}
