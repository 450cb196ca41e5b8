use crate::{
    config::submit::TIME_LIMIT,
    error::{protocol_error, Result},
    graphql::GraphQl,
    search::RuntimeSearch,
    session::Session,
    types::{CodeWithRuntime, DailyQuestion, Lang, SubmissionDetails},
};

const QUESTION_OF_TODAY: &str = "
    query questionOfToday {
      activeDailyCodingChallengeQuestion {
        date
        userStatus
        link
        question {
          titleSlug
          title
          translatedTitle
          acRate
          difficulty
          freqBar
          frontendQuestionId: questionFrontendId
          isFavor
          paidOnly: isPaidOnly
          status
          hasVideoSolution
          hasSolution
          questionId
          topicTags {
            name
            id
            slug
          }
        }
      }
    }
";

impl Session {
    pub async fn daily_question(&self) -> Result<DailyQuestion> {
        self.graphql(&GraphQl::new("questionOfToday", QUESTION_OF_TODAY))
            .await?
            .take("activeDailyCodingChallengeQuestion")
    }

    pub async fn code_with_runtime(
        &self,
        question_id: u64,
        lang: Lang,
        skip: u32,
        max_runtime: u32,
    ) -> Result<CodeWithRuntime> {
        RuntimeSearch {
            question_id,
            lang,
            skip,
            max_runtime,
        }
        .run(self)
        .await
    }

    /// Resubmits a previously accepted solution to today's question.
    pub async fn solve_daily_question(&self, lang: Lang) -> Result<SubmissionDetails> {
        let question = self.daily_question().await?.question;
        let question_id = question.question_id.parse::<u64>().map_err(|_| {
            protocol_error(format!("question id {:?} is not numeric", question.question_id))
        })?;
        log::info!("Solving daily question {} ({})", question.title_slug, question_id);
        let code = RuntimeSearch::new(question_id, lang).run(self).await?;
        let result = self
            .submit_code(&question, lang, &code.code, TIME_LIMIT)
            .await?;
        log::info!("Daily question judged: {}", result.status_msg);
        self.submission_details(&result.submission_id).await
    }
}
