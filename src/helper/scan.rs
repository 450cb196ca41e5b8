extern crate futures;
extern crate handlebars;
extern crate serde_json;

use crate::{
    config::scan::{CONCURRENCY, DESCRIPTION},
    error::{Error, Kind, Result},
    session::Session,
    types::{ContestType, RankedUser, ReportResult},
};
use futures::stream::{self, StreamExt};
use handlebars::{no_escape, Handlebars};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Contestants inspected at once within a page. Output order is kept.
    pub concurrency: usize,
    /// Handlebars template for the report text, rendered with `marker`.
    pub description: String,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            concurrency: CONCURRENCY,
            description: DESCRIPTION.to_owned(),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// No submission for the target question.
    Skipped,
    Clean,
    Reported(ReportResult),
    Failed(Error),
}

#[derive(Debug)]
pub struct Contestant {
    pub page: u32,
    pub username: String,
    pub outcome: Outcome,
}

#[derive(Debug, Default)]
pub struct ScanSummary {
    pub pages: u32,
    pub outcomes: Vec<Contestant>,
}
impl ScanSummary {
    pub fn reports(&self) -> impl Iterator<Item = &ReportResult> {
        self.outcomes.iter().filter_map(|c| match &c.outcome {
            Outcome::Reported(r) => Some(r),
            _ => None,
        })
    }
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes.iter().filter_map(|c| match &c.outcome {
            Outcome::Failed(e) => Some((c.username.as_str(), e)),
            _ => None,
        })
    }
    pub fn into_reports(self) -> Vec<ReportResult> {
        self.outcomes
            .into_iter()
            .filter_map(|c| match c.outcome {
                Outcome::Reported(r) => Some(r),
                _ => None,
            })
            .collect()
    }
}

pub struct Scanner<'a> {
    session: &'a Session,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(session: &'a Session, options: ScanOptions) -> Self {
        Self { session, options }
    }

    pub fn description(&self, marker: &str) -> Result<String> {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(no_escape);
        registry
            .render_template(&self.options.description, &json!({ "marker": marker }))
            .map_err(|e| Error::with_kind(Kind::Template(e)))
    }

    /// Walks ranking pages `1..=max_page` and reports every submission for
    /// `question_id` whose code contains `marker`.
    ///
    /// A failing ranking page aborts the scan; a failing contestant does not.
    pub async fn run(
        &self,
        kind: ContestType,
        week: u32,
        question_id: u64,
        marker: &str,
        max_page: u32,
    ) -> Result<ScanSummary> {
        let description = self.description(marker)?;
        let key = question_id.to_string();
        let mut summary = ScanSummary::default();
        for page in 1..=max_page {
            let ranking = self.session.contest_ranking(kind, week, page).await?;
            summary.pages += 1;
            let outcomes: Vec<Contestant> = stream::iter(ranking.total_rank.iter())
                .map(|user| self.visit(page, user, &key, marker, &description))
                .buffered(self.options.concurrency.max(1))
                .collect()
                .await;
            summary.outcomes.extend(outcomes);
        }
        Ok(summary)
    }

    async fn visit(
        &self,
        page: u32,
        user: &RankedUser,
        key: &str,
        marker: &str,
        description: &str,
    ) -> Contestant {
        let outcome = match user.submissions.get(key) {
            None => Outcome::Skipped,
            Some(s) => match self
                .inspect(user, s.submission_id, marker, description)
                .await
            {
                Ok(Some(r)) => Outcome::Reported(r),
                Ok(None) => Outcome::Clean,
                Err(e) => {
                    log::warn!("Failed to check {} (page {}): {}", user.username, page, e);
                    Outcome::Failed(e)
                }
            },
        };
        Contestant {
            page,
            username: user.username.clone(),
            outcome,
        }
    }

    async fn inspect(
        &self,
        user: &RankedUser,
        submission_id: u64,
        marker: &str,
        description: &str,
    ) -> Result<Option<ReportResult>> {
        let submission = self
            .session
            .contest_submission(submission_id, user.data_region.as_deref())
            .await?;
        if !submission.code.contains(marker) {
            return Ok(None);
        }
        log::info!(
            "Found marker: {} - {} - rank: {}",
            user.username,
            submission.lang,
            user.rank.map_or_else(|| "-".to_owned(), |r| r.to_string())
        );
        self.session
            .report_submission(description, submission.contest_submission)
            .await
            .map(Some)
    }
}

impl Session {
    pub async fn scan_contest(
        &self,
        kind: ContestType,
        week: u32,
        question_id: u64,
        marker: &str,
        max_page: u32,
    ) -> Result<Vec<ReportResult>> {
        Scanner::new(self, ScanOptions::default())
            .run(kind, week, question_id, marker, max_page)
            .await
            .map(ScanSummary::into_reports)
    }
}
