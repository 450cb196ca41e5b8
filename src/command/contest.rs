extern crate termcolor;

use crate::{
    read::{read_contest_type, read_line, read_number},
    write::{write_payload, write_result},
};
use lc_helper::{
    config::scan::MAX_PAGE,
    scan::{ScanOptions, Scanner},
    Session,
};
use std::io::Write;
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
pub async fn contest(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let kind = read_contest_type(stdout)?;
    let week = read_number(stdout, b"Contest number: ", 1u32, None)?;
    if let Some(v) = write_result(stdout, session.contest(kind, week).await, "Got contest") {
        for q in v.questions.iter() {
            write_info!(
                stdout,
                "Question",
                "{} {} ({} points)",
                q.question_id,
                q.title,
                q.credit
            );
        }
    }
    Some(())
}

#[allow(unused_must_use)]
pub async fn ranking(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let kind = read_contest_type(stdout)?;
    let week = read_number(stdout, b"Contest number: ", 1u32, None)?;
    let page = read_number(stdout, b"Page [1]: ", 1u32, Some(1))?;
    if let Some(v) = write_result(
        stdout,
        session.contest_ranking(kind, week, page).await,
        "Got ranking",
    ) {
        write_info!(stdout, "Info", "{} contestants", v.user_num);
        for u in v.total_rank.iter() {
            writeln!(
                stdout,
                "{:>6} {} {}",
                u.rank.map_or_else(|| "-".to_owned(), |r| r.to_string()),
                u.username,
                u.data_region.as_deref().unwrap_or("-")
            );
        }
    }
    Some(())
}

#[allow(unused_must_use)]
pub async fn scan(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let kind = read_contest_type(stdout)?;
    let week = read_number(stdout, b"Contest number: ", 1u32, None)?;
    let question = read_number(stdout, b"Question id: ", 1u64, None)?;
    let marker = read_line(stdout, b"Marker: ")?;
    if marker.is_empty() {
        write_error!(stdout, "Error", "Marker can't be empty");
        return Some(());
    }
    let max_page = read_number(stdout, b"Max page: ", 1u32, Some(MAX_PAGE))?;
    write_info!(
        stdout,
        "Info",
        "Scanning {}-contest-{} pages 1..={}",
        kind,
        week,
        max_page
    );
    let scanner = Scanner::new(session, ScanOptions::default());
    if let Some(summary) = write_result(
        stdout,
        scanner.run(kind, week, question, &marker, max_page).await,
        "Scan finished",
    ) {
        for (name, e) in summary.failures() {
            write_warn!(stdout, "Skipped", "{}: {}", name, e);
        }
        let reports: Vec<_> = summary.reports().collect();
        write_info!(
            stdout,
            "Info",
            "{} pages, {} contestants, {} reported",
            summary.pages,
            summary.outcomes.len(),
            reports.len()
        );
        write_payload(stdout, &reports);
    }
    Some(())
}
