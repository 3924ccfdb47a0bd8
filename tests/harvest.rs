use lc_downloader::{
    account::Account,
    downloader::Downloader,
    session::{Session, Site},
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIRST_TOKEN: &str = "first-token";
const ROTATED_TOKEN: &str = "rotated-token";

fn account() -> Account {
    Account {
        login: "tester".to_owned(),
        password: "hunter2".to_owned(),
    }
}

fn listing_payload() -> serde_json::Value {
    json!({
        "user_name": "tester",
        "num_total": 2,
        "stat_status_pairs": [
            {
                "stat": {
                    "question_id": 2,
                    "question__title": "Add Two Numbers",
                    "question__title_slug": "add-two-numbers",
                },
                "difficulty": { "level": 2 },
                "paid_only": false,
            },
            {
                "stat": {
                    "question_id": 1,
                    "question__title": "Two Sum",
                    "question__title_slug": "two-sum",
                },
                "difficulty": { "level": 1 },
                "paid_only": false,
            },
        ],
    })
}

fn question_payload(content: &str) -> serde_json::Value {
    json!({
        "data": { "question": {
            "content": content,
            "codeSnippets": [
                {
                    "lang": "Rust",
                    "langSlug": "rust",
                    "code": "impl Solution {}",
                    "__typename": "CodeSnippetNode",
                },
                {
                    "lang": "Python3",
                    "langSlug": "python3",
                    "code": "class Solution:",
                    "__typename": "CodeSnippetNode",
                },
            ],
        }},
    })
}

async fn mount_home(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "set-cookie",
                    format!("csrftoken={}; Path=/", FIRST_TOKEN).as_str(),
                )
                .set_body_string("<html></html>"),
        )
        .mount(server)
        .await;
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/accounts/login"))
        .and(body_string_contains(format!(
            "csrfmiddlewaretoken={}",
            FIRST_TOKEN
        )))
        .and(body_string_contains("login=tester"))
        .and(body_string_contains("password=hunter2"))
        .respond_with(ResponseTemplate::new(200).insert_header(
            "set-cookie",
            format!("csrftoken={}; Path=/", ROTATED_TOKEN).as_str(),
        ))
        .mount(server)
        .await;
}

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/problems/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_payload()))
        .mount(server)
        .await;
}

/// Detail stub for one slug. Only matches when the rotated token and the
/// per-problem referer are carried, so a pipeline that reuses the pre-login
/// token never completes.
async fn mount_question(server: &MockServer, slug: &str, content: &str) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("x-csrftoken", ROTATED_TOKEN))
        .and(header(
            "referer",
            format!("{}/problems/{}", server.uri(), slug).as_str(),
        ))
        .and(body_string_contains(format!(
            "\"titleSlug\":\"{}\"",
            slug
        )))
        .and(body_string_contains("questionData"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_payload(content)))
        .mount(server)
        .await;
}

fn session_for(server: &MockServer) -> Session {
    Session::new(Site::new(&server.uri()).expect("valid base url")).expect("session builds")
}

#[tokio::test]
async fn harvest_returns_a_fully_populated_ascending_catalog() {
    let server = MockServer::start().await;
    mount_home(&server).await;
    mount_login(&server).await;
    mount_listing(&server).await;
    mount_question(&server, "two-sum", "<p>Find <code>two</code> numbers.</p>").await;
    mount_question(&server, "add-two-numbers", "<p>Add them.</p>").await;

    let session = session_for(&server);
    let catalog = Downloader::new(&session, Duration::from_millis(0))
        .get_all_problems(&account())
        .await
        .expect("harvest succeeds");

    assert_eq!(catalog.len(), 2);
    let ids: Vec<u64> = catalog.problems.keys().copied().collect();
    assert_eq!(ids, vec![1, 2]);
    for problem in catalog.problems.values() {
        assert!(problem.content.is_some());
        assert!(problem.snippet("rust").is_some());
        assert!(problem.snippet("python3").is_some());
    }
    assert_eq!(
        catalog.problems[&1].content.as_deref(),
        Some("Find `two` numbers.\n")
    );
    assert_eq!(
        catalog.problems[&1].snippet("rust").unwrap().code,
        "impl Solution {}"
    );
}

#[tokio::test]
async fn failed_login_aborts_before_any_catalog_work() {
    let server = MockServer::start().await;
    mount_home(&server).await;
    Mock::given(method("POST"))
        .and(path("/accounts/login"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad credentials"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/problems/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_payload()))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(question_payload("<p>x</p>")))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let err = Downloader::new(&session, Duration::from_millis(0))
        .get_all_problems(&account())
        .await
        .expect_err("harvest fails");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn missing_anti_forgery_cookie_is_an_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/accounts/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_for(&server);
    let err = Downloader::new(&session, Duration::from_millis(0))
        .get_all_problems(&account())
        .await
        .expect_err("harvest fails");
    assert!(err.is_auth(), "unexpected error: {}", err);
}

#[tokio::test]
async fn detail_failure_aborts_the_harvest_by_default() {
    let server = MockServer::start().await;
    mount_home(&server).await;
    mount_login(&server).await;
    mount_listing(&server).await;
    mount_question(&server, "two-sum", "<p>Find two numbers.</p>").await;
    // no stub for add-two-numbers; wiremock answers 404

    let session = session_for(&server);
    let err = Downloader::new(&session, Duration::from_millis(0))
        .get_all_problems(&account())
        .await
        .expect_err("harvest fails");
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn keep_going_leaves_the_failed_record_unpopulated() {
    let server = MockServer::start().await;
    mount_home(&server).await;
    mount_login(&server).await;
    mount_listing(&server).await;
    mount_question(&server, "two-sum", "<p>Find two numbers.</p>").await;

    let session = session_for(&server);
    let catalog = Downloader::new(&session, Duration::from_millis(0))
        .keep_going(true)
        .get_all_problems(&account())
        .await
        .expect("harvest succeeds");

    assert_eq!(catalog.len(), 2);
    assert!(catalog.problems[&1].content.is_some());
    assert!(catalog.problems[&2].content.is_none());
    assert!(catalog.problems[&2].snippets.is_none());
}
