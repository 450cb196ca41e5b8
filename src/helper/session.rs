extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate tokio;

use crate::{
    config::session::{BASE_URL, CN_BASE_URL, CSRF_COOKIE, KEEP_ALIVE_INTERVAL},
    cookie::{storage::StorageError, Cookie, CookieJar},
    error::{json_error, Error, Kind, Result},
    graphql::{self, Envelope, GraphQl},
    transport::{ReqwestTransport, Request, Response, Transport},
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, ORIGIN, REFERER},
    Method,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tokio::task::JoinHandle;

mod keep_alive;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CookieSource {
    Header(String),
    List(Vec<Cookie>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_cn_base_url")]
    pub cn_base_url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub cookies: Option<CookieSource>,
    #[serde(default)]
    pub cookie_file: Option<PathBuf>,
    /// Keep-alive period in seconds.
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,
}
fn default_base_url() -> String {
    BASE_URL.to_owned()
}
fn default_cn_base_url() -> String {
    CN_BASE_URL.to_owned()
}
fn default_keep_alive() -> u64 {
    KEEP_ALIVE_INTERVAL.as_secs()
}
impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            cn_base_url: default_cn_base_url(),
            headers: BTreeMap::new(),
            cookies: None,
            cookie_file: None,
            keep_alive: default_keep_alive(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(HeaderName, String)>,
    pub body: Option<Vec<u8>>,
    /// Skip the jar entirely: no `Cookie` header out, no `Set-Cookie` in.
    pub anonymous: bool,
}
impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}
impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: Vec::new(),
            body: None,
            anonymous: false,
        }
    }
    pub fn get() -> Self {
        Self::new(Method::GET)
    }
    pub fn post() -> Self {
        Self::new(Method::POST)
    }
    pub fn header<V: Into<String>>(mut self, name: HeaderName, value: V) -> Self {
        self.headers.push((name, value.into()));
        self
    }
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body).map_err(|e| json_error(e, "request body"))?);
        Ok(self.header(CONTENT_TYPE, "application/json"))
    }
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| Error::with_description(Kind::Header, format!("bad value {:?}", value)))
}

pub(crate) struct Inner {
    base_url: String,
    cn_base_url: String,
    headers: HeaderMap,
    jar: Mutex<CookieJar>,
    cookie_file: Option<PathBuf>,
    transport: Arc<dyn Transport>,
    keep_alive: Duration,
}

impl Inner {
    fn jar(&self) -> MutexGuard<'_, CookieJar> {
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn request(&self, path: &str, options: RequestOptions) -> Result<Response> {
        let mut headers = self.headers.clone();
        if !options.anonymous {
            let cookie = self.jar().header_value();
            if !cookie.is_empty() {
                headers.insert(COOKIE, header_value(&cookie)?);
            }
        }
        for (name, value) in options.headers {
            headers.insert(name, header_value(&value)?);
        }
        let response = self
            .transport
            .send(Request {
                method: options.method,
                url: self.resolve(path),
                headers,
                body: options.body,
            })
            .await?;
        // Cookies may rotate on error statuses too, so update before any check.
        if !options.anonymous {
            self.jar().update(response.set_cookies());
        }
        Ok(response)
    }

    async fn graphql(&self, query: &GraphQl) -> Result<Envelope> {
        self.request(graphql::PATH, RequestOptions::post().json(query)?)
            .await?
            .ensure_success(graphql::PATH, query.operation_name)?
            .json()
    }
}

/// An authenticated session whose cookies survive restarts through an
/// optional cookie file.
///
/// Constructing a session spawns its keep-alive task, so it must happen
/// inside a tokio runtime.
pub struct Session {
    inner: Arc<Inner>,
    keep_alive: Mutex<Option<JoinHandle<()>>>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()?))
    }
    pub fn with_transport(config: SessionConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, header_value(&base_url)?);
        headers.insert(REFERER, header_value(&format!("{}/", base_url))?);
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::with_description(Kind::Header, format!("bad name {:?}", name)))?;
            headers.insert(name, header_value(value)?);
        }
        let mut jar = CookieJar::new();
        match config.cookies {
            Some(CookieSource::Header(s)) => jar = CookieJar::parse_header(&s),
            Some(CookieSource::List(l)) => jar.extend(l),
            None => {
                if let Some(path) = &config.cookie_file {
                    if let Err(e) = jar.load_from(path) {
                        log::error!("Error loading cookies from {}: {}", path.display(), e);
                    }
                }
            }
        }
        let inner = Arc::new(Inner {
            base_url,
            cn_base_url: config.cn_base_url.trim_end_matches('/').to_owned(),
            headers,
            jar: Mutex::new(jar),
            cookie_file: config.cookie_file,
            transport,
            keep_alive: Duration::from_secs(config.keep_alive.max(1)),
        });
        let ret = Self {
            keep_alive: Mutex::new(Some(keep_alive::spawn(inner.clone()))),
            inner,
        };
        Ok(ret)
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }
    /// Host serving raw submissions for a contestant's data region.
    pub fn region_url(&self, region: Option<&str>) -> &str {
        match region {
            Some("CN") => &self.inner.cn_base_url,
            _ => &self.inner.base_url,
        }
    }

    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Response> {
        self.inner.request(path, options).await
    }
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(path, RequestOptions::get()).await
    }
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        self.request(path, RequestOptions::post().json(body)?).await
    }
    pub async fn graphql(&self, query: &GraphQl) -> Result<Envelope> {
        self.inner.graphql(query).await
    }
    /// Issues the keep-alive ping once and returns the server timestamp.
    pub async fn ping(&self) -> Result<f64> {
        keep_alive::ping(&self.inner).await
    }

    /// Required before any state-mutating call.
    pub fn csrf_token(&self) -> Result<String> {
        self.cookie(CSRF_COOKIE)
            .map(|c| c.value)
            .ok_or_else(|| Error::with_kind(Kind::Csrf))
    }
    pub fn cookie(&self, name: &str) -> Option<Cookie> {
        self.inner.jar().get(name).cloned()
    }
    pub fn cookies(&self) -> Vec<Cookie> {
        self.inner.jar().all().cloned().collect()
    }
    pub fn set_cookie(&self, cookie: Cookie) {
        self.inner.jar().set(cookie);
    }
    /// Writes the jar to the cookie file, if one is configured. Failures are
    /// logged and handed back but never fatal.
    pub fn save_cookies(&self) -> std::result::Result<(), StorageError> {
        let path = match &self.inner.cookie_file {
            Some(p) => p,
            None => return Ok(()),
        };
        let jar = self.inner.jar().clone();
        jar.save_to(path).map_err(|e| {
            log::error!("Error saving cookies to {}: {}", path.display(), e);
            e
        })
    }

    /// (Re)starts the keep-alive task. Any running task is stopped first.
    pub async fn start_keep_alive(&self) {
        self.stop_keep_alive().await;
        let handle = keep_alive::spawn(self.inner.clone());
        if let Some(old) = self.keep_alive_handle().replace(handle) {
            old.abort();
        }
    }
    pub async fn stop_keep_alive(&self) {
        let handle = self.keep_alive_handle().take();
        if let Some(h) = handle {
            h.abort();
            // Wait for the abort to land so no ping touches the jar afterwards.
            let _ = h.await;
        }
    }
    pub fn is_keep_alive_running(&self) -> bool {
        self.keep_alive_handle()
            .as_ref()
            .map_or(false, |h| !h.is_finished())
    }
    pub async fn close(&self) -> std::result::Result<(), StorageError> {
        self.stop_keep_alive().await;
        self.save_cookies()
    }

    fn keep_alive_handle(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.keep_alive.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(h) = self.keep_alive_handle().take() {
            h.abort();
        }
    }
}
