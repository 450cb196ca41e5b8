mod common;

use common::{body, json, operation, session, Scripted};
use lc_helper::{
    config::{runtime::NOT_FOUND_MESSAGE, submit::CHECK_DELAY},
    session::{Session, SessionConfig},
    types::{Lang, Question},
    Kind,
};
use serde_json::json;
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicU32, Ordering},
        Mutex,
    },
    time::Duration,
};
use tokio::time::Instant;

fn question() -> Question {
    serde_json::from_value(json!({
        "titleSlug": "two-sum",
        "title": "Two Sum",
        "questionId": "1",
    }))
    .unwrap()
}

fn judge(states: Vec<serde_json::Value>) -> impl Fn(&lc_helper::transport::Request) -> lc_helper::Result<lc_helper::transport::Response> {
    let states = Mutex::new(states.into_iter().collect::<VecDeque<_>>());
    move |request| {
        if request.url.ends_with("/problems/two-sum/submit/") {
            Ok(json(200, json!({"submission_id": 1234})))
        } else if request.url.ends_with("/submissions/detail/1234/check/") {
            Ok(json(200, states.lock().unwrap().pop_front().unwrap()))
        } else {
            Ok(json(404, json!({})))
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_submit_and_poll_to_success() {
    let transport = Scripted::new(judge(vec![
        json!({"state": "PENDING"}),
        json!({"state": "PENDING"}),
        json!({"state": "STARTED"}),
        json!({"state": "SUCCESS", "submission_id": "1234", "status_code": 10, "status_msg": "Accepted", "lang": "cpp", "run_success": true, "total_correct": 63, "total_testcases": 63}),
    ]));
    let session = session(transport.clone());
    let start = Instant::now();
    let result = session
        .submit_code(&question(), Lang::Cpp, "class Solution {};", Duration::from_secs(30))
        .await
        .unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= 3 * CHECK_DELAY && elapsed < 4 * CHECK_DELAY);
    assert_eq!(result.submission_id, "1234");
    assert_eq!(result.status_msg, "Accepted");
    assert_eq!(result.total_testcases, Some(63));

    let requests = transport.requests();
    assert_eq!(requests.len(), 5);
    let submit = &requests[0];
    assert_eq!(submit.method, reqwest::Method::POST);
    assert_eq!(submit.headers["x-csrftoken"], "csrf-value");
    assert_eq!(
        submit.headers["referer"],
        "https://leetcode.com/problems/two-sum/"
    );
    assert_eq!(
        body(submit),
        json!({"lang": "cpp", "question_id": "1", "typed_code": "class Solution {};"})
    );
    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_submit_times_out() {
    let transport = Scripted::new(judge(vec![json!({"state": "PENDING"}); 10]));
    let session = session(transport.clone());
    let err = session
        .submit_code(&question(), Lang::Python3, "pass", Duration::from_secs(4))
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    // one submit plus one check per second of budget
    assert_eq!(transport.requests().len(), 5);
    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_submit_failure_state() {
    let transport = Scripted::new(judge(vec![
        json!({"state": "STARTED"}),
        json!({"state": "FAILURE"}),
    ]));
    let session = session(transport);
    let err = session
        .submit_code(&question(), Lang::Cpp, "", Duration::from_secs(30))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), Kind::UnexpectedState(s) if s == "FAILURE"));
    assert_eq!(err.to_string(), "Submission failed with state: FAILURE");
    session.close().await.unwrap();
}

#[tokio::test]
async fn test_submit_without_csrf_never_sends() {
    let transport = Scripted::new(judge(vec![]));
    let session = Session::with_transport(SessionConfig::default(), transport.clone()).unwrap();
    let err = session
        .submit_code(&question(), Lang::Cpp, "", Duration::from_secs(30))
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), Kind::Csrf));
    assert!(session.check_in().await.is_err());
    assert!(session.report_submission("x", 1).await.is_err());
    assert!(transport.requests().is_empty());
    session.close().await.unwrap();
}

#[tokio::test]
async fn test_check_submission_status_error() {
    let transport = Scripted::new(|_| Ok(json(502, json!({}))));
    let session = session(transport);
    let err = session.check_submission("77").await.unwrap_err();
    match err.kind() {
        Kind::Status { path, status } => {
            assert_eq!(path, "/submissions/detail/77/check/");
            assert_eq!(status.as_u16(), 502);
        }
        k => panic!("unexpected kind {:?}", k),
    }
    assert!(err.to_string().contains("502 Bad Gateway"));
    session.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_solve_daily_question() {
    let lookups = AtomicU32::new(0);
    let checks = Mutex::new(VecDeque::from(vec![
        json!({"state": "PENDING"}),
        json!({"state": "SUCCESS", "submission_id": 999, "status_msg": "Accepted"}),
    ]));
    let transport = Scripted::new(move |request| {
        match operation(request).as_deref() {
            Some("questionOfToday") => {
                return Ok(json(200, json!({"data": {"activeDailyCodingChallengeQuestion": {
                    "date": "2026-10-17",
                    "userStatus": "NotStart",
                    "link": "/problems/two-sum/",
                    "question": {"titleSlug": "two-sum", "title": "Two Sum", "questionId": "1", "difficulty": "Easy"}
                }}})))
            }
            Some("codeWithRuntime") => {
                lookups.fetch_add(1, Ordering::SeqCst);
                let vars = &body(request)["variables"];
                assert_eq!(vars["questionId"], 1);
                assert_eq!(vars["lang"], "rust");
                let runtime = vars["runtime"].as_u64().unwrap();
                return Ok(json(200, match runtime {
                    7 => json!({"data": {"codeWithRuntime": {"code": "impl Solution {}", "hasPrevious": false, "hasNext": false}}}),
                    // the platform alternates between both empty signals
                    r if r % 2 == 0 => json!({"errors": [{"message": NOT_FOUND_MESSAGE}], "data": {"codeWithRuntime": null}}),
                    _ => json!({"data": {"codeWithRuntime": null}}),
                }));
            }
            Some("submissionDetails") => {
                assert_eq!(body(request)["variables"]["submissionId"], 999);
                return Ok(json(200, json!({"data": {"submissionDetails": {
                    "code": "impl Solution {}", "statusCode": 10, "runtimeDisplay": "0 ms", "memoryDisplay": "2 MB"
                }}})));
            }
            _ => (),
        }
        if request.url.ends_with("/problems/two-sum/submit/") {
            assert_eq!(body(request)["typed_code"], "impl Solution {}");
            assert_eq!(lookups.load(Ordering::SeqCst), 8);
            Ok(json(200, json!({"submission_id": 999})))
        } else if request.url.ends_with("/submissions/detail/999/check/") {
            Ok(json(200, checks.lock().unwrap().pop_front().unwrap()))
        } else {
            Ok(json(404, json!({})))
        }
    });
    let session = session(transport.clone());
    let details = session.solve_daily_question(Lang::Rust).await.unwrap();
    assert_eq!(details.code, "impl Solution {}");
    assert_eq!(details.runtime_display.as_deref(), Some("0 ms"));
    // 1 daily + 8 runtime lookups + 1 submit + 2 checks + 1 details
    assert_eq!(transport.requests().len(), 13);
    session.close().await.unwrap();
}

#[tokio::test]
async fn test_runtime_search_surfaces_other_errors() {
    let transport = Scripted::new(|request| {
        let runtime = body(request)["variables"]["runtime"].as_u64().unwrap();
        Ok(json(200, if runtime < 2 {
            json!({"errors": [{"message": NOT_FOUND_MESSAGE}]})
        } else {
            json!({"errors": [{"message": "You do not have permission"}]})
        }))
    });
    let session = session(transport.clone());
    let err = session
        .code_with_runtime(1, Lang::Cpp, 0, 2000)
        .await
        .unwrap_err();
    assert!(matches!(err.kind(), Kind::Api));
    assert_eq!(err.description(), Some("You do not have permission"));
    assert_eq!(transport.requests().len(), 3);
    session.close().await.unwrap();
}

#[tokio::test]
async fn test_runtime_search_bound() {
    let transport = Scripted::new(|_| Ok(json(200, json!({"data": {"codeWithRuntime": null}}))));
    let session = session(transport.clone());
    let err = session.code_with_runtime(1, Lang::Cpp, 0, 20).await.unwrap_err();
    assert!(matches!(err.kind(), Kind::RuntimeExhausted(20)));
    assert_eq!(transport.requests().len(), 21);
    session.close().await.unwrap();
}
