extern crate handlebars;
extern crate reqwest;
extern crate serde_json;

use reqwest::StatusCode;
use std::{error::Error as StdError, fmt, result::Result as StdResult};

pub struct Error(Box<Inner>);

#[derive(Debug)]
pub enum Kind {
    Builder(reqwest::Error),
    Network(reqwest::Error),
    /// Failure reported by a non-reqwest [`crate::transport::Transport`].
    Transport(Box<dyn StdError + Send + Sync>),
    Status {
        path: String,
        status: StatusCode,
    },
    Header,
    Protocol,
    Json(serde_json::Error),
    Csrf,
    Api,
    UnexpectedState(String),
    Timeout,
    RuntimeExhausted(u32),
    Template(handlebars::TemplateRenderError),
}

#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    pub fn transport<E: Into<Box<dyn StdError + Send + Sync>>>(err: E) -> Self {
        Self::with_kind(Kind::Transport(err.into()))
    }
    pub fn kind(&self) -> &Kind {
        &self.0.kind
    }
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }
    pub fn is_timeout(&self) -> bool {
        matches!(self.0.kind, Kind::Timeout)
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.0.kind)
            .field("description", &self.0.description)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Builder(err) => write!(f, "Error building client: {}", err),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Transport(err) => write!(f, "Error sending request: {}", err),
            Kind::Status { path, status } => {
                write!(
                    f,
                    "Request to {} failed with {} {}",
                    path,
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )?;
                self.write_description(f)
            }
            Kind::Header => {
                write!(f, "Invalid header")?;
                self.write_description(f)
            }
            Kind::Protocol => {
                write!(f, "Unexpected response")?;
                self.write_description(f)
            }
            Kind::Json(err) => {
                write!(f, "Error decoding response")?;
                self.write_description(f)?;
                write!(f, " ({})", err)
            }
            Kind::Csrf => write!(f, "No CSRF token found"),
            Kind::Api => {
                write!(f, "API request failed")?;
                self.write_description(f)
            }
            Kind::UnexpectedState(state) => {
                write!(f, "Submission failed with state: {}", state)
            }
            Kind::Timeout => {
                write!(f, "Submission timed out")?;
                self.write_description(f)
            }
            Kind::RuntimeExhausted(max) => write!(
                f,
                "Exceeded maximum runtime of {}ms without finding a submission",
                max
            ),
            Kind::Template(err) => write!(f, "Error rendering report description: {}", err),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(x) | Kind::Network(x) => Some(x),
            Kind::Transport(x) => Some(x.as_ref()),
            Kind::Json(x) => Some(x),
            Kind::Template(x) => Some(x),
            Kind::Status { .. }
            | Kind::Header
            | Kind::Protocol
            | Kind::Csrf
            | Kind::Api
            | Kind::UnexpectedState(_)
            | Kind::Timeout
            | Kind::RuntimeExhausted(_) => None,
        }
    }
}

pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn protocol_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Protocol, description)
}
pub(crate) fn json_error<T: Into<String>>(err: serde_json::Error, description: T) -> Error {
    Error::with_description(Kind::Json(err), description)
}
