extern crate serde;
extern crate serde_json;

use super::null_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{collections::HashMap, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestType {
    Weekly,
    Biweekly,
}
impl fmt::Display for ContestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => f.write_str("weekly"),
            Self::Biweekly => f.write_str("biweekly"),
        }
    }
}
impl FromStr for ContestType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            _ => Err(format!("unknown contest type {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestQuestion {
    pub question_id: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title_slug: String,
    #[serde(default, deserialize_with = "null_default")]
    pub credit: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestInfo {
    #[serde(default)]
    pub contest: Value,
    pub questions: Vec<ContestQuestion>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSubmission {
    pub submission_id: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub lang: String,
    #[serde(default, deserialize_with = "null_default")]
    pub fail_count: u32,
    #[serde(default, deserialize_with = "null_default")]
    pub date: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedUser {
    pub username: String,
    #[serde(default)]
    pub rank: Option<u64>,
    #[serde(default)]
    pub data_region: Option<String>,
    /// Keyed by question id.
    #[serde(default, deserialize_with = "null_default")]
    pub submissions: HashMap<String, RankedSubmission>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestRanking {
    #[serde(default, deserialize_with = "null_default")]
    pub user_num: u64,
    pub total_rank: Vec<RankedUser>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestSubmission {
    pub id: u64,
    pub code: String,
    #[serde(default, deserialize_with = "null_default")]
    pub lang: String,
    pub contest_submission: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResult {
    #[serde(default, deserialize_with = "null_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub submission: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub reported_user: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
