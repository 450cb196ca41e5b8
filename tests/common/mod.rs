#![allow(dead_code)]

use async_trait::async_trait;
use lc_helper::{
    cookie::Cookie,
    session::{Session, SessionConfig},
    transport::{Request, Response, Transport},
    Result,
};
use reqwest::{header::HeaderValue, StatusCode};
use serde_json::Value;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

type Handler = Box<dyn Fn(&Request) -> Result<Response> + Send + Sync>;

/// In-process stand-in for the platform. Keep-alive pings are answered and
/// counted separately; everything else goes to the handler and is recorded.
pub struct Scripted {
    handler: Handler,
    requests: Mutex<Vec<Request>>,
    pings: AtomicUsize,
}

impl Scripted {
    pub fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    {
        Arc::new(Self {
            handler: Box::new(handler),
            requests: Mutex::new(Vec::new()),
            pings: AtomicUsize::new(0),
        })
    }
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
    pub fn pings(&self) -> usize {
        self.pings.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for Scripted {
    async fn send(&self, request: Request) -> Result<Response> {
        if operation(&request).as_deref() == Some("currentTimestamp") {
            self.pings.fetch_add(1, Ordering::SeqCst);
            return Ok(json(
                200,
                serde_json::json!({"data": {"currentTimestamp": 1700000000.5}}),
            ));
        }
        self.requests.lock().unwrap().push(request.clone());
        (self.handler)(&request)
    }
}

pub fn json(status: u16, body: Value) -> Response {
    Response::new(
        StatusCode::from_u16(status).unwrap(),
        serde_json::to_vec(&body).unwrap(),
    )
}

pub fn with_set_cookie(mut response: Response, cookies: &[&str]) -> Response {
    for c in cookies {
        response
            .headers
            .append(reqwest::header::SET_COOKIE, HeaderValue::from_str(c).unwrap());
    }
    response
}

pub fn body(request: &Request) -> Value {
    serde_json::from_slice(request.body.as_deref().unwrap_or(b"null")).unwrap()
}

/// GraphQL operation name of a request, if it is one.
pub fn operation(request: &Request) -> Option<String> {
    if !request.url.ends_with("/graphql") {
        return None;
    }
    body(request)
        .get("operationName")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Session on `https://leetcode.com` that already holds a CSRF token.
pub fn session(transport: Arc<Scripted>) -> Session {
    let session = Session::with_transport(SessionConfig::default(), transport).unwrap();
    session.set_cookie(Cookie::new("csrftoken", "csrf-value"));
    session
}
