extern crate serde;
extern crate serde_json;

use super::null_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub title_slug: String,
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    pub question_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub frontend_question_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub difficulty: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestion {
    pub date: String,
    #[serde(default, deserialize_with = "null_default")]
    pub user_status: String,
    #[serde(default, deserialize_with = "null_default")]
    pub link: String,
    pub question: Question,
}
