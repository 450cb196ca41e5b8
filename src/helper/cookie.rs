extern crate chrono;
extern crate cookie;
extern crate serde;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

mod jar;
pub mod storage;

pub use jar::CookieJar;

// Max-Age beyond this is treated as "far future" instead of overflowing.
const MAX_AGE_CAP: i64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_only: Option<bool>,
}

impl Cookie {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
            expires: None,
            secure: None,
            http_only: None,
        }
    }

    /// Parses one `Set-Cookie` header value.
    ///
    /// Returns `None` when the leading `name=value` pair is missing or has an
    /// empty name. Unknown attributes are ignored.
    pub fn parse_set_cookie(header: &str) -> Option<Self> {
        cookie::Cookie::parse(header).ok().map(Self::from)
    }
}

// Non-positive Max-Age means "expire now".
fn expiry_after(max_age: i64) -> Option<DateTime<Utc>> {
    let now = Utc::now();
    now.checked_add_signed(Duration::seconds(max_age.clamp(0, MAX_AGE_CAP)))
        .or(Some(now))
}

impl<'c> From<cookie::Cookie<'c>> for Cookie {
    fn from(c: cookie::Cookie<'c>) -> Self {
        let expires = match c.max_age() {
            Some(age) => expiry_after(age.whole_seconds()),
            None => c
                .expires_datetime()
                .and_then(|t| Utc.timestamp_opt(t.unix_timestamp(), t.nanosecond()).single()),
        };
        Self {
            name: c.name().to_owned(),
            value: c.value().to_owned(),
            domain: c.domain().map(|d| d.trim_start_matches('.').to_owned()),
            path: c.path().map(str::to_owned),
            expires,
            secure: c.secure(),
            http_only: c.http_only(),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_set_cookie_attributes() {
        let cookie = Cookie::parse_set_cookie(
            "csrftoken=abc123; expires=Wed, 21 Oct 2026 07:28:00 GMT; Max-Age=31449600; Path=/; SameSite=Lax; Secure",
        )
        .unwrap();
        assert_eq!(cookie.name, "csrftoken");
        assert_eq!(cookie.value, "abc123");
        assert_eq!(cookie.path.as_deref(), Some("/"));
        assert_eq!(cookie.secure, Some(true));
        assert_eq!(cookie.http_only, None);
        // Max-Age wins over Expires
        assert!(cookie.expires.unwrap() > Utc::now() + Duration::days(300));
    }

    #[test]
    fn test_parse_set_cookie_expires() {
        let cookie =
            Cookie::parse_set_cookie("LEETCODE_SESSION=x.y=z; Domain=.leetcode.com; HttpOnly; expires=Wed, 21-Oct-2015 07:28:00 GMT")
                .unwrap();
        assert_eq!(cookie.value, "x.y=z");
        assert_eq!(cookie.domain.as_deref(), Some("leetcode.com"));
        assert_eq!(cookie.http_only, Some(true));
        let expires = cookie.expires.unwrap();
        assert_eq!((expires.year(), expires.month(), expires.day()), (2015, 10, 21));
        assert_eq!(expires.hour(), 7);
    }

    #[test]
    fn test_parse_set_cookie_max_age_bounds() {
        let before = Utc::now();
        for header in [
            "a=b; Max-Age=-99999999999999",
            "a=b; Max-Age=-9223372036854775808",
            "a=b; Max-Age=0",
        ] {
            let expires = Cookie::parse_set_cookie(header).unwrap().expires.unwrap();
            assert!(expires >= before && expires <= Utc::now(), "{}", header);
        }
        let far = Cookie::parse_set_cookie("a=b; Max-Age=9223372036854775807")
            .unwrap()
            .expires
            .unwrap();
        assert!(far > Utc::now() + Duration::days(3000));
        assert!(far < Utc::now() + Duration::days(3660));
        assert!(Cookie::parse_set_cookie("a=b; Max-Age=soon")
            .unwrap()
            .expires
            .is_none());
    }

    #[test]
    fn test_parse_set_cookie_invalid() {
        assert!(Cookie::parse_set_cookie("no-pair-here; Path=/").is_none());
        assert!(Cookie::parse_set_cookie("=value").is_none());
        assert_eq!(
            Cookie::parse_set_cookie("empty=").unwrap(),
            Cookie::new("empty", "")
        );
    }
}
