extern crate termcolor;

use crate::write::write_result;
use lc_helper::Session;
use std::io::Write;
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub async fn status(stdout: &mut StandardStream, session: &Session) {
    match session.user_status().await {
        Ok(v) if v.is_signed_in => write_ok!(
            stdout,
            "Status",
            "Signed in as {}, {}checked in today",
            v.username,
            if v.checked_in_today { "" } else { "not " }
        ),
        Ok(_) => write_error!(stdout, "Status", "Not signed in, check the session cookies"),
        Err(e) => write_error!(stdout, "Error", "status: {}", e),
    }
}

#[allow(unused_must_use)]
pub async fn check_in(stdout: &mut StandardStream, session: &Session) {
    write_info!(stdout, "Info", "Checking in...");
    match session.check_in().await {
        Ok(true) => write_ok!(stdout, "Success", "Checked in"),
        Ok(false) => write_info!(stdout, "Info", "Already checked in today"),
        Err(e) => write_error!(stdout, "Error", "check in: {}", e),
    }
}

#[allow(unused_must_use)]
pub async fn easter_egg(stdout: &mut StandardStream, session: &Session) {
    match session.collect_contest_easter_egg().await {
        Ok(true) => write_ok!(stdout, "Success", "Collected contest easter egg"),
        Ok(false) => write_info!(stdout, "Info", "Nothing to collect"),
        Err(e) => write_error!(stdout, "Error", "easter egg: {}", e),
    }
}

#[allow(unused_must_use)]
pub fn cookies(stdout: &mut StandardStream, session: &Session) {
    let cookies = session.cookies();
    if cookies.is_empty() {
        write_error!(stdout, "Error", "Cookie jar is empty");
        return;
    }
    for c in cookies {
        match c.expires {
            Some(t) => write_info!(stdout, "Cookie", "{} (expires {})", c.name, t.to_rfc3339()),
            None => write_info!(stdout, "Cookie", "{}", c.name),
        }
    }
}

pub fn save(stdout: &mut StandardStream, session: &Session) {
    write_result(stdout, session.save_cookies(), "Saved cookies");
}

#[allow(unused_must_use)]
pub async fn close(stdout: &mut StandardStream, session: &Session) {
    write_info!(stdout, "Info", "Stopping keep-alive and saving cookies");
    write_result(stdout, session.close().await, "Session closed");
}
