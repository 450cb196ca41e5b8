extern crate cookie;

use super::Cookie;
use std::slice::Iter;

/// Cookies of a single origin, keyed by name and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CookieJar {
    cookies: Vec<Cookie>,
}

impl CookieJar {
    pub fn new() -> Self {
        Self::default()
    }
    /// Builds a jar from a `Cookie` header style string such as `a=1; b=2`.
    pub fn parse_header(header: &str) -> Self {
        let mut ret = Self::new();
        cookie::Cookie::split_parse(header)
            .filter_map(Result::ok)
            .for_each(|c| ret.set(Cookie::new(c.name(), c.value())));
        ret
    }

    pub fn set(&mut self, cookie: Cookie) {
        match self.cookies.iter_mut().find(|c| c.name == cookie.name) {
            Some(old) => *old = cookie,
            None => self.cookies.push(cookie),
        }
    }
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name == name)
    }
    pub fn all(&self) -> Iter<'_, Cookie> {
        self.cookies.iter()
    }
    pub fn len(&self) -> usize {
        self.cookies.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
    pub fn clear(&mut self) {
        self.cookies.clear();
    }

    /// Applies every `Set-Cookie` directive, skipping malformed ones.
    pub fn update<'a, I: IntoIterator<Item = &'a str>>(&mut self, directives: I) {
        for header in directives {
            match Cookie::parse_set_cookie(header) {
                Some(c) => self.set(c),
                None => log::debug!("Ignoring malformed Set-Cookie: {}", header),
            }
        }
    }

    pub fn header_value(&self) -> String {
        self.cookies
            .iter()
            .map(Cookie::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Extend<Cookie> for CookieJar {
    fn extend<T: IntoIterator<Item = Cookie>>(&mut self, iter: T) {
        iter.into_iter().for_each(|c| self.set(c));
    }
}

impl std::iter::FromIterator<Cookie> for CookieJar {
    fn from_iter<T: IntoIterator<Item = Cookie>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_by_name() {
        let mut jar = CookieJar::new();
        jar.set(Cookie::new("a", "1"));
        jar.set(Cookie::new("b", "2"));
        jar.set(Cookie::new("a", "3"));
        assert_eq!(jar.len(), 2);
        assert_eq!(jar.get("a").unwrap().value, "3");
        assert!(jar.get("c").is_none());
        // Overwrite keeps the original position
        assert_eq!(jar.header_value(), "a=3; b=2");
    }

    #[test]
    fn test_header_value() {
        assert_eq!(CookieJar::new().header_value(), "");
        let jar: CookieJar = vec![Cookie::new("name1", "value1"), Cookie::new("name2", "value2")]
            .into_iter()
            .collect();
        assert_eq!(jar.header_value(), "name1=value1; name2=value2");
    }

    #[test]
    fn test_parse_header() {
        let jar = CookieJar::parse_header("csrftoken=abc; LEETCODE_SESSION=x=y;; ;bad");
        assert_eq!(jar.len(), 2);
        assert_eq!(jar.get("csrftoken").unwrap().value, "abc");
        assert_eq!(jar.get("LEETCODE_SESSION").unwrap().value, "x=y");
    }

    #[test]
    fn test_update_from_set_cookie() {
        let mut jar = CookieJar::parse_header("csrftoken=old");
        jar.update(vec!["csrftoken=new; Path=/", "garbage", "session=s; HttpOnly"]);
        assert_eq!(jar.header_value(), "csrftoken=new; session=s");
        assert_eq!(jar.get("session").unwrap().http_only, Some(true));
    }
}
