pub mod api;
pub mod config;
pub mod cookie;
pub mod error;
pub mod graphql;
pub mod poll;
pub mod search;
pub mod scan;
pub mod session;
pub mod transport;
pub mod types;

pub use error::{Error, Kind, Result};
pub use session::{Session, SessionConfig};
