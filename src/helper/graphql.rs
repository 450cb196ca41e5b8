extern crate serde;
extern crate serde_json;

use crate::error::{protocol_error, Error, Kind, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PATH: &str = "/graphql";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQl {
    pub query: &'static str,
    pub variables: Value,
    pub operation_name: &'static str,
}
impl GraphQl {
    pub fn new(operation_name: &'static str, query: &'static str) -> Self {
        Self {
            query,
            variables: Value::Object(Map::new()),
            operation_name,
        }
    }
    pub fn variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl Envelope {
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_ref()
            .map(|e| e.first().and_then(|x| x.message.as_deref()).unwrap_or(""))
    }
    /// Fails with [`Kind::Api`] when the server reported errors.
    pub fn check(self) -> Result<Self> {
        match self.first_error() {
            Some("") => Err(Error::with_description(Kind::Api, "Unknown GraphQL error")),
            Some(msg) => Err(Error::with_description(Kind::Api, msg)),
            None => Ok(self),
        }
    }
    /// The raw `data.{field}` value, `Value::Null` when absent.
    pub fn field(&mut self, field: &str) -> Result<Value> {
        let data = self
            .data
            .as_mut()
            .ok_or_else(|| protocol_error("response carries no data"))?;
        Ok(data.remove(field).unwrap_or(Value::Null))
    }
    pub fn take<T: serde::de::DeserializeOwned>(mut self, field: &str) -> Result<T> {
        let value = self.check()?.field(field)?;
        if value.is_null() {
            return Err(protocol_error(format!("missing data.{}", field)));
        }
        serde_json::from_value(value).map_err(|e| crate::error::json_error(e, field))
    }
}
