extern crate reqwest;

use crate::{
    error::Result,
    graphql::{self, GraphQl},
    session::{RequestOptions, Session},
    types::UserStatus,
};
use reqwest::header::HeaderName;

const GLOBAL_DATA: &str = "
    query globalData {
      userStatus {
        userId
        isSignedIn
        isMockUser
        isPremium
        isVerified
        username
        realName
        avatar
        isAdmin
        isSuperuser
        permissions
        isTranslator
        activeSessionId
        checkedInToday
        completedFeatureGuides
        notificationStatus {
          lastModified
          numUnread
        }
      }
    }
";
const CHECK_IN: &str = "
    mutation checkin {
      checkin {
        checkedIn
        ok
        error
        __typename
      }
    }
";
const EASTER_EGG: &str = "
    mutation collectContestEasterEgg {
      collectContestEasterEgg {
        ok
      }
    }
";

pub(super) fn csrf_header() -> HeaderName {
    HeaderName::from_static("x-csrftoken")
}

impl Session {
    /// A GraphQL mutation carrying the CSRF header; fails before sending if
    /// there is no token.
    pub(super) async fn mutate(&self, query: &GraphQl) -> Result<graphql::Envelope> {
        let csrf = self.csrf_token()?;
        self.request(
            graphql::PATH,
            RequestOptions::post().json(query)?.header(csrf_header(), csrf),
        )
        .await?
        .ensure_success(graphql::PATH, query.operation_name)?
        .json()
    }

    pub async fn user_status(&self) -> Result<UserStatus> {
        self.graphql(&GraphQl::new("globalData", GLOBAL_DATA))
            .await?
            .take("userStatus")
    }
    pub async fn check_in(&self) -> Result<bool> {
        let mut envelope = self.mutate(&GraphQl::new("checkin", CHECK_IN)).await?.check()?;
        let result = envelope.field("checkin")?;
        Ok(result.get("ok").and_then(|v| v.as_bool()).unwrap_or(false))
    }
    pub async fn collect_contest_easter_egg(&self) -> Result<bool> {
        let mut envelope = self
            .mutate(&GraphQl::new("collectContestEasterEgg", EASTER_EGG))
            .await?
            .check()?;
        let result = envelope.field("collectContestEasterEgg")?;
        Ok(result.get("ok").and_then(|v| v.as_bool()).unwrap_or(false))
    }
}
