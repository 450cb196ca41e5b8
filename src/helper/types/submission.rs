extern crate serde;
extern crate serde_json;

use super::null_default;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeWithRuntime {
    pub code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub has_previous: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub has_next: bool,
}

// The platform sends ids as numbers in some payloads and strings in others.
fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// The verdict returned by the check endpoint once judging succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(deserialize_with = "id_string")]
    pub submission_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub status_code: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub status_msg: String,
    #[serde(default, deserialize_with = "null_default")]
    pub lang: String,
    #[serde(default, deserialize_with = "null_default")]
    pub run_success: bool,
    #[serde(default)]
    pub total_correct: Option<i64>,
    #[serde(default)]
    pub total_testcases: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One raw observation of the check endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckResult {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetails {
    #[serde(default, deserialize_with = "null_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub status_code: i64,
    #[serde(default)]
    pub runtime_display: Option<String>,
    #[serde(default)]
    pub memory_display: Option<String>,
    #[serde(default)]
    pub total_correct: Option<i64>,
    #[serde(default)]
    pub total_testcases: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
