extern crate async_trait;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

use crate::{
    config::session::VERBOSE,
    error::{json_error, network_error, Error, Kind, Result},
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, SET_COOKIE},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
    /// Turns a non-2xx status into [`Kind::Status`] naming `path`.
    pub fn ensure_success(self, path: &str, operation: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::with_description(
                Kind::Status {
                    path: path.to_owned(),
                    status: self.status,
                },
                format!("failed to {}", operation),
            ))
        }
    }
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| json_error(e, std::any::type_name::<T>()))
    }
    pub fn set_cookies(&self) -> impl Iterator<Item = &str> {
        self.headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
    }
}

/// The only seam through which the crate talks to the network.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response>;
}

pub struct ReqwestTransport {
    client: Client,
}
impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .connection_verbose(VERBOSE)
                .build()
                .map_err(|e| Error::with_kind(Kind::Builder(e)))?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(network_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(network_error)?.to_vec();
        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
