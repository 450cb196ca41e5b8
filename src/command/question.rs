extern crate termcolor;

use crate::{
    read::{read_lang, read_line, read_number, read_source},
    write::write_result,
};
use lc_helper::{
    config::{runtime::MAX_RUNTIME, submit::TIME_LIMIT},
    types::{Question, SubmissionDetails},
    Session,
};
use serde_json::Map;
use std::io::Write;
use termcolor::{Color, StandardStream};

#[allow(unused_must_use)]
fn write_details(stdout: &mut StandardStream, details: &SubmissionDetails) {
    write_info!(
        stdout,
        "Detail",
        "status {}, runtime {}, memory {}",
        details.status_code,
        details.runtime_display.as_deref().unwrap_or("-"),
        details.memory_display.as_deref().unwrap_or("-")
    );
}

#[allow(unused_must_use)]
pub async fn daily(stdout: &mut StandardStream, session: &Session) {
    if let Some(v) = write_result(stdout, session.daily_question().await, "Got daily question") {
        write_info!(
            stdout,
            "Daily",
            "{} {}. {} ({}) {}",
            v.date,
            v.question.frontend_question_id,
            v.question.title,
            v.question.difficulty,
            v.link
        );
    }
}

#[allow(unused_must_use)]
pub async fn solve(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let lang = read_lang(stdout)?;
    write_info!(stdout, "Info", "Solving daily question in {}", lang);
    if let Some(v) = write_result(
        stdout,
        session.solve_daily_question(lang).await,
        "Solved daily question",
    ) {
        write_details(stdout, &v);
    }
    Some(())
}

#[allow(unused_must_use)]
pub async fn code(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let id = read_number(stdout, b"Question id: ", 1u64, None)?;
    let lang = read_lang(stdout)?;
    let skip = read_number(stdout, b"Skip [0]: ", 0u32, Some(0))?;
    let max = read_number(stdout, b"Max runtime: ", 0u32, Some(MAX_RUNTIME))?;
    write_info!(stdout, "Info", "Probing runtime 0..={}", max);
    if let Some(v) = write_result(
        stdout,
        session.code_with_runtime(id, lang, skip, max).await,
        "Found accepted code",
    ) {
        writeln!(stdout, "{}", v.code);
    }
    Some(())
}

#[allow(unused_must_use)]
pub async fn submit(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let question = Question {
        title_slug: read_line(stdout, b"Title slug: ")?,
        title: String::new(),
        question_id: read_number(stdout, b"Question id: ", 1u64, None)?.to_string(),
        frontend_question_id: String::new(),
        difficulty: String::new(),
        extra: Map::new(),
    };
    let lang = read_lang(stdout)?;
    let code = read_source(stdout)?;
    write_info!(stdout, "Info", "Submitting {}", question.title_slug);
    if let Some(v) = write_result(
        stdout,
        session.submit_code(&question, lang, &code, TIME_LIMIT).await,
        "Judged",
    ) {
        write_info!(
            stdout,
            "Result",
            "{} {}: {} ({}/{})",
            v.submission_id,
            v.lang,
            v.status_msg,
            v.total_correct.unwrap_or_default(),
            v.total_testcases.unwrap_or_default()
        );
    }
    Some(())
}

#[allow(unused_must_use)]
pub async fn detail(stdout: &mut StandardStream, session: &Session) -> Option<()> {
    let id = read_line(stdout, b"Submission id: ")?;
    if let Some(v) = write_result(
        stdout,
        session.submission_details(&id).await,
        "Got submission details",
    ) {
        write_details(stdout, &v);
        writeln!(stdout, "{}", v.code);
    }
    Some(())
}
