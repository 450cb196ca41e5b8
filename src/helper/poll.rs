extern crate serde_json;
extern crate tokio;

use crate::{
    config::submit::CHECK_DELAY,
    error::{json_error, protocol_error, Error, Kind, Result},
    session::Session,
    types::{CheckResult, SubmissionResult},
};
use serde_json::Value;
use std::{future::Future, time::Duration};
use tokio::time::sleep;

/// What a single check of the judge reported.
#[derive(Debug)]
pub enum Observation {
    Pending,
    Started,
    Success(SubmissionResult),
    /// Any state outside the normal lifecycle, e.g. `FAILURE` or `CANCELLED`.
    Other(String),
}

impl Observation {
    pub fn from_check(check: CheckResult) -> Result<Self> {
        let state = check
            .state
            .ok_or_else(|| protocol_error("submission check carries no state"))?;
        Ok(match state.as_str() {
            "PENDING" => Self::Pending,
            "STARTED" => Self::Started,
            "SUCCESS" => {
                let mut body = check.rest;
                body.insert("state".to_owned(), Value::String(state));
                Self::Success(
                    serde_json::from_value(Value::Object(body))
                        .map_err(|e| json_error(e, "submission result"))?,
                )
            }
            _ => Self::Other(state),
        })
    }
}

/// Drives `check` until a terminal state or until `budget` runs out.
///
/// Every PENDING/STARTED observation costs one `interval` of the budget.
pub async fn drive<F, Fut>(mut check: F, interval: Duration, budget: Duration) -> Result<SubmissionResult>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<CheckResult>>,
{
    let mut remaining = budget;
    while !remaining.is_zero() {
        match Observation::from_check(check().await?)? {
            Observation::Success(v) => return Ok(v),
            Observation::Other(state) => {
                return Err(Error::with_kind(Kind::UnexpectedState(state)))
            }
            obs => {
                log::debug!("Submission {:?}, {:?} left", obs, remaining);
                sleep(interval).await;
                remaining = remaining.saturating_sub(interval);
            }
        }
    }
    Err(Error::with_description(
        Kind::Timeout,
        format!("still judging after {:?}", budget),
    ))
}

pub struct Poller<'a> {
    session: &'a Session,
    interval: Duration,
}

impl<'a> Poller<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            interval: CHECK_DELAY,
        }
    }
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
    pub async fn poll(&self, submission_id: &str, budget: Duration) -> Result<SubmissionResult> {
        drive(
            || self.session.check_submission(submission_id),
            self.interval,
            budget,
        )
        .await
    }
}
