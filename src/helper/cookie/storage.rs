extern crate serde_json;

use super::{Cookie, CookieJar};
use std::{
    error::Error as StdError,
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Json(serde_json::Error),
}
impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Error accessing cookie file: {}", e),
            Self::Json(e) => write!(f, "Error processing cookie file: {}", e),
        }
    }
}
impl StdError for StorageError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
        }
    }
}

impl CookieJar {
    /// Restores cookies stored by [`CookieJar::save_to`].
    ///
    /// A missing file is not an error. On a malformed file the jar is left
    /// untouched.
    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<(), StorageError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(());
        }
        let file = File::open(path).map_err(StorageError::Io)?;
        let stored: Vec<Cookie> =
            serde_json::from_reader(BufReader::new(file)).map_err(StorageError::Json)?;
        self.extend(stored);
        Ok(())
    }
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        let mut writer = BufWriter::new(File::create(path).map_err(StorageError::Io)?);
        serde_json::to_writer_pretty(&mut writer, &self.all().collect::<Vec<_>>())
            .map_err(StorageError::Json)?;
        writer.flush().map_err(StorageError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn pairs(jar: &CookieJar) -> HashSet<(String, String)> {
        jar.all()
            .map(|c| (c.name.clone(), c.value.clone()))
            .collect()
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        let mut jar = CookieJar::parse_header("csrftoken=abc; LEETCODE_SESSION=def");
        let mut expiring = Cookie::new("ip_check", "1");
        expiring.expires = Some(Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap());
        expiring.http_only = Some(true);
        jar.set(expiring.clone());
        jar.save_to(&path).unwrap();

        let mut loaded = CookieJar::new();
        loaded.load_from(&path).unwrap();
        assert_eq!(pairs(&loaded), pairs(&jar));
        assert_eq!(loaded.get("ip_check"), Some(&expiring));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut jar = CookieJar::parse_header("a=1");
        jar.load_from(dir.path().join("absent.json")).unwrap();
        assert_eq!(jar.header_value(), "a=1");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        std::fs::write(&path, "{ not json").unwrap();
        let mut jar = CookieJar::parse_header("a=1");
        assert!(matches!(jar.load_from(&path), Err(StorageError::Json(_))));
        assert_eq!(jar.header_value(), "a=1");
    }

    #[test]
    fn test_load_stored_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.json");
        std::fs::write(
            &path,
            r#"[{"name":"csrftoken","value":"t","expires":"2026-03-01T12:00:00.000Z","secure":true,"httpOnly":false}]"#,
        )
        .unwrap();
        let mut jar = CookieJar::new();
        jar.load_from(&path).unwrap();
        let cookie = jar.get("csrftoken").unwrap();
        assert_eq!(cookie.expires, Some(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()));
        assert_eq!(cookie.http_only, Some(false));
    }
}
