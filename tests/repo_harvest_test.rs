use commit_mail_finder::{GithubClient, Harvester};
use httpmock::prelude::*;

fn harvester(server: &MockServer, token: Option<&str>) -> Harvester {
    let client = GithubClient::new(&server.base_url(), token.map(str::to_string));
    Harvester::new(client)
}

#[tokio::test]
async fn deduplicates_author_emails() {
    let server = MockServer::start();

    let commits_mock = server.mock(|when, then| {
        when.method(GET).path("/repos/torvalds/linux/commits");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"sha": "a1", "commit": {"author": {"name": "A", "email": "a@x.com"}}},
                {"sha": "a2", "commit": {"author": {"name": "A", "email": "a@x.com"}}},
                {"sha": "b1", "commit": {"author": {"name": "B", "email": "b@y.com"}}}
            ]));
    });

    let emails = harvester(&server, None)
        .harvest_repo("https://github.com/torvalds/linux")
        .await;

    commits_mock.assert();
    assert_eq!(emails.len(), 2);
    assert!(emails.contains("a@x.com"));
    assert!(emails.contains("b@y.com"));
}

#[tokio::test]
async fn rate_limit_yields_empty_set() {
    let server = MockServer::start();

    let commits_mock = server.mock(|when, then| {
        when.method(GET).path("/repos/o/r/commits");
        then.status(403)
            .json_body(serde_json::json!({"message": "API rate limit exceeded"}));
    });

    let emails = harvester(&server, None)
        .harvest_repo("https://github.com/o/r")
        .await;

    commits_mock.assert();
    assert!(emails.is_empty());
}

#[tokio::test]
async fn other_statuses_leave_accumulator_unchanged() {
    let server = MockServer::start();

    for status in [404u16, 500] {
        let repo = format!("missing{}", status);
        let commits_mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/repos/o/{}/commits", repo));
            then.status(status);
        });

        let emails = harvester(&server, None)
            .harvest_repo(&format!("https://github.com/o/{}", repo))
            .await;

        commits_mock.assert();
        assert!(emails.is_empty());
    }
}

#[tokio::test]
async fn skips_commits_without_author_email() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/repos/o/r/commits");
        then.status(200).json_body(serde_json::json!([
            {"sha": "c1", "commit": {"author": null}},
            {"sha": "c2", "commit": {"author": {"name": "NoMail"}}},
            {"sha": "c3", "commit": {}},
            {"sha": "c4", "commit": {"author": {"name": "C", "email": "c@z.com"}}}
        ]));
    });

    let emails = harvester(&server, None)
        .harvest_repo("https://github.com/o/r")
        .await;

    assert_eq!(emails.len(), 1);
    assert!(emails.contains("c@z.com"));
}

#[tokio::test]
async fn malformed_commit_record_is_skipped() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/repos/o/r/commits");
        then.status(200).json_body(serde_json::json!([
            "not-an-object",
            {"sha": "c1", "commit": {"author": {"name": "D", "email": "d@z.com"}}}
        ]));
    });

    let emails = harvester(&server, None)
        .harvest_repo("https://github.com/o/r")
        .await;

    assert_eq!(emails.len(), 1);
    assert!(emails.contains("d@z.com"));
}

#[tokio::test]
async fn token_is_sent_as_authorization_header() {
    let server = MockServer::start();

    let commits_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/repos/o/r/commits")
            .header("Authorization", "token SECRET");
        then.status(200).json_body(serde_json::json!([
            {"sha": "c1", "commit": {"author": {"name": "E", "email": "e@z.com"}}}
        ]));
    });

    let emails = harvester(&server, Some("SECRET"))
        .harvest_repo("https://github.com/o/r")
        .await;

    commits_mock.assert();
    assert!(emails.contains("e@z.com"));
}

#[tokio::test]
async fn invalid_repo_url_makes_no_request() {
    let server = MockServer::start();

    let any_mock = server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(serde_json::json!([]));
    });

    let emails = harvester(&server, None).harvest_repo("not-a-url").await;

    assert!(emails.is_empty());
    assert_eq!(any_mock.hits(), 0);
}
