extern crate reqwest;
extern crate serde;
extern crate serde_json;

use super::user::csrf_header;
use crate::{
    error::{protocol_error, Result},
    graphql::GraphQl,
    poll::Poller,
    session::{RequestOptions, Session},
    types::{CheckResult, Lang, Question, SubmissionDetails, SubmissionResult},
};
use reqwest::header::REFERER;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

const SUBMISSION_DETAILS: &str = "
    query submissionDetails($submissionId: Int!) {
      submissionDetails(submissionId: $submissionId) {
        runtime
        runtimeDisplay
        runtimePercentile
        runtimeDistribution
        memory
        memoryDisplay
        memoryPercentile
        memoryDistribution
        code
        timestamp
        statusCode
        user {
          username
          profile {
            realName
            userAvatar
          }
        }
        lang {
          name
          verboseName
        }
        question {
          questionId
          titleSlug
          hasFrontendPreview
        }
        notes
        flagType
        topicTags {
          tagId
          slug
          name
        }
        runtimeError
        compileError
        lastTestcase
        codeOutput
        expectedOutput
        totalCorrect
        totalTestcases
        fullCodeOutput
        testDescriptions
        testBodies
        testInfo
        stdOutput
      }
    }
";

#[derive(Serialize)]
struct SubmitBody<'a> {
    lang: Lang,
    question_id: &'a str,
    typed_code: &'a str,
}
#[derive(Deserialize)]
struct Submitted {
    submission_id: Value,
}

impl Session {
    /// Submits `code` and waits at most `time_limit` for the verdict.
    pub async fn submit_code(
        &self,
        question: &Question,
        lang: Lang,
        code: &str,
        time_limit: Duration,
    ) -> Result<SubmissionResult> {
        let csrf = self.csrf_token()?;
        let path = format!("/problems/{}/submit/", question.title_slug);
        let submitted: Submitted = self
            .request(
                &path,
                RequestOptions::post()
                    .json(&SubmitBody {
                        lang,
                        question_id: &question.question_id,
                        typed_code: code,
                    })?
                    .header(
                        REFERER,
                        format!("{}/problems/{}/", self.base_url(), question.title_slug),
                    )
                    .header(csrf_header(), csrf),
            )
            .await?
            .ensure_success(&path, "submit code")?
            .json()?;
        let id = match submitted.submission_id {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            other => return Err(protocol_error(format!("bad submission_id {}", other))),
        };
        log::info!("Submitted {} as {}", question.title_slug, id);
        Poller::new(self).poll(&id, time_limit).await
    }

    pub async fn check_submission(&self, submission_id: &str) -> Result<CheckResult> {
        let path = format!("/submissions/detail/{}/check/", submission_id);
        self.get(&path)
            .await?
            .ensure_success(&path, "check submission")?
            .json()
    }

    pub async fn submission_details(&self, submission_id: &str) -> Result<SubmissionDetails> {
        let id = submission_id
            .parse::<u64>()
            .map_err(|_| protocol_error(format!("submission id {:?} is not numeric", submission_id)))?;
        self.graphql(
            &GraphQl::new("submissionDetails", SUBMISSION_DETAILS)
                .variables(json!({ "submissionId": id })),
        )
        .await?
        .take("submissionDetails")
    }
}
