extern crate serde;
extern crate serde_json;

use super::null_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    #[serde(default)]
    pub user_id: Option<u64>,
    pub is_signed_in: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_default")]
    pub checked_in_today: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
