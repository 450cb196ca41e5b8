extern crate serde;

use super::user::csrf_header;
use crate::{
    error::Result,
    session::{RequestOptions, Session},
    types::{ContestInfo, ContestRanking, ContestSubmission, ContestType, ReportResult},
};
use serde::Serialize;

#[derive(Serialize)]
struct ReportBody<'a> {
    description: &'a str,
    submission: u64,
}

impl Session {
    pub async fn contest(&self, kind: ContestType, week: u32) -> Result<ContestInfo> {
        let csrf = self.csrf_token()?;
        let path = format!("/contest/api/info/{}-contest-{}/", kind, week);
        self.request(&path, RequestOptions::get().header(csrf_header(), csrf))
            .await?
            .ensure_success(&path, &format!("get {} contest", kind))?
            .json()
    }

    pub async fn contest_ranking(
        &self,
        kind: ContestType,
        week: u32,
        page: u32,
    ) -> Result<ContestRanking> {
        let csrf = self.csrf_token()?;
        let path = format!(
            "/contest/api/ranking/{}-contest-{}/?pagination={}&region=global_v2",
            kind, week, page
        );
        self.request(&path, RequestOptions::get().header(csrf_header(), csrf))
            .await?
            .ensure_success(&path, &format!("get {} contest ranking", kind))?
            .json()
    }

    /// Raw contest submission, fetched without cookies from the host serving
    /// the contestant's data region.
    pub async fn contest_submission(
        &self,
        submission_id: u64,
        region: Option<&str>,
    ) -> Result<ContestSubmission> {
        let url = format!("{}/api/submissions/{}/", self.region_url(region), submission_id);
        self.request(&url, RequestOptions::get().anonymous())
            .await?
            .ensure_success(&url, "get contest submission")?
            .json()
    }

    pub async fn report_submission(
        &self,
        description: &str,
        contest_submission: u64,
    ) -> Result<ReportResult> {
        let csrf = self.csrf_token()?;
        const PATH: &str = "/contest/api/reports/";
        self.request(
            PATH,
            RequestOptions::post()
                .json(&ReportBody {
                    description,
                    submission: contest_submission,
                })?
                .header(csrf_header(), csrf),
        )
        .await?
        .ensure_success(PATH, "report submission")?
        .json()
    }
}
