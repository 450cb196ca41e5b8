extern crate serde_json;

use crate::{
    config::runtime::{MAX_RUNTIME, NOT_FOUND_MESSAGE},
    error::{json_error, Error, Kind, Result},
    graphql::{Envelope, GraphQl},
    session::Session,
    types::{CodeWithRuntime, Lang},
};
use serde_json::json;
use std::future::Future;

const QUERY: &str = "
    query codeWithRuntime($questionId: Int!, $lang: String!, $runtime: Int!, $skip: Int!) {
      codeWithRuntime(
        questionId: $questionId
        lang: $lang
        runtime: $runtime
        skip: $skip
      ) {
        code
        hasPrevious
        hasNext
      }
    }
";

/// Result of asking for the accepted code at one runtime.
#[derive(Debug)]
pub enum Lookup {
    Found(CodeWithRuntime),
    /// Nothing at this runtime, keep searching.
    Empty,
}

impl Lookup {
    /// Folds both of the platform's "nothing here" signals into [`Lookup::Empty`].
    pub fn from_envelope(envelope: Envelope) -> Result<Self> {
        if envelope.first_error() == Some(NOT_FOUND_MESSAGE) {
            return Ok(Self::Empty);
        }
        let value = envelope.check()?.field("codeWithRuntime")?;
        if value.is_null() {
            return Ok(Self::Empty);
        }
        serde_json::from_value(value)
            .map(Self::Found)
            .map_err(|e| json_error(e, "codeWithRuntime"))
    }
}

/// Ascending scan over `0..=max_runtime`.
///
/// The "has code at runtime r" predicate is not monotonic, so bisecting is
/// unsound; the first hit in ascending order wins.
pub async fn search<F, Fut>(max_runtime: u32, mut query: F) -> Result<CodeWithRuntime>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Lookup>>,
{
    for runtime in 0..=max_runtime {
        match query(runtime).await? {
            Lookup::Found(code) => {
                log::debug!("Found accepted code at runtime {}", runtime);
                return Ok(code);
            }
            Lookup::Empty => log::trace!("No code at runtime {}", runtime),
        }
    }
    Err(Error::with_kind(Kind::RuntimeExhausted(max_runtime)))
}

#[derive(Debug, Clone)]
pub struct RuntimeSearch {
    pub question_id: u64,
    pub lang: Lang,
    pub skip: u32,
    pub max_runtime: u32,
}

impl RuntimeSearch {
    pub fn new(question_id: u64, lang: Lang) -> Self {
        Self {
            question_id,
            lang,
            skip: 0,
            max_runtime: MAX_RUNTIME,
        }
    }
    pub async fn lookup(&self, session: &Session, runtime: u32) -> Result<Lookup> {
        let query = GraphQl::new("codeWithRuntime", QUERY).variables(json!({
            "questionId": self.question_id,
            "lang": self.lang,
            "skip": self.skip,
            "runtime": runtime,
        }));
        Lookup::from_envelope(session.graphql(&query).await?)
    }
    pub async fn run(&self, session: &Session) -> Result<CodeWithRuntime> {
        search(self.max_runtime, |runtime| self.lookup(session, runtime)).await
    }
}
