//! Payloads exchanged with the platform.
//!
//! Only the fields this crate reads are typed; everything else is kept in an
//! `extra` map and passed through untouched.
extern crate serde;

use serde::{Deserialize, Deserializer};

pub mod contest;
pub mod lang;
pub mod question;
pub mod submission;
pub mod user;

pub use contest::{
    ContestInfo, ContestRanking, ContestSubmission, ContestType, RankedUser, RankedSubmission,
    ReportResult,
};
pub use lang::Lang;
pub use question::{DailyQuestion, Question};
pub use submission::{CheckResult, CodeWithRuntime, SubmissionDetails, SubmissionResult};
pub use user::UserStatus;

// The platform sends `null` for fields it has no value for; read those as
// the type's default like a missing field.
fn null_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
