use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

fn feed_body() -> serde_json::Value {
    serde_json::json!({
        "version": "1.0",
        "answer": {
            "availability": [
                {
                    "reference": "150sk10",
                    "zones": [
                        {"zone": "gra", "availability": "available"},
                        {"zone": "rbx", "availability": "unavailable"}
                    ]
                }
            ]
        }
    })
}

fn checker() -> Command {
    let mut command = Command::cargo_bin("kimsufi-checker").unwrap();
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn test_cli_prints_report_for_available_servers() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(feed_body());
    });

    checker()
        .arg("--endpoint")
        .arg(server.url("/feed"))
        .assert()
        .success()
        .stdout(predicate::str::contains("KS-1"))
        .stdout(predicate::str::contains("Gravelines : available"))
        .stdout(predicate::str::contains("Roubaix : unavailable"))
        .stdout(predicate::str::contains(
            "RESULT : 1 server is available on Kimsufi",
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_silent_when_nothing_available() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "answer": {
                    "availability": [
                        {
                            "reference": "150sk10",
                            "zones": [
                                {"zone": "gra", "availability": "unavailable"},
                                {"zone": "bhs", "availability": "unknown"}
                            ]
                        }
                    ]
                }
            }));
    });

    checker()
        .arg("--endpoint")
        .arg(server.url("/feed"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_model_arguments_restrict_report() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "answer": {
                    "availability": [
                        {
                            "reference": "150sk10",
                            "zones": [{"zone": "gra", "availability": "available"}]
                        },
                        {
                            "reference": "150sk30",
                            "zones": [{"zone": "sbg", "availability": "available"}]
                        }
                    ]
                }
            }));
    });

    checker()
        .arg("KS-3")
        .arg("--endpoint")
        .arg(server.url("/feed"))
        .assert()
        .success()
        .stdout(predicate::str::contains("KS-3"))
        .stdout(predicate::str::contains("Strasbourg : available"))
        .stdout(predicate::str::contains("KS-1").not())
        .stdout(predicate::str::contains(
            "RESULT : 1 server is available on Kimsufi",
        ));
}

#[test]
fn test_cli_mail_failure_still_reports() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(feed_body());
    });

    checker()
        .arg("--endpoint")
        .arg(server.url("/feed"))
        .arg("--mail")
        .arg("--config")
        .arg("/no/such/dir/config.json")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "RESULT : 1 server is available on Kimsufi",
        ))
        .stderr(predicate::str::contains("Mail delivery failed"))
        .stderr(predicate::str::contains("💡"));
}

#[test]
fn test_cli_feed_error_exits_nonzero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(500);
    });

    checker()
        .arg("--endpoint")
        .arg(server.url("/feed"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("❌"));
}

#[test]
fn test_cli_malformed_feed_exits_nonzero() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/feed");
        then.status(200).body("<html>not a feed</html>");
    });

    checker()
        .arg("--endpoint")
        .arg(server.url("/feed"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn test_cli_rejects_non_http_endpoint() {
    checker()
        .arg("--endpoint")
        .arg("ftp://example.com/feed")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Unsupported URL scheme"));
}

#[test]
fn test_cli_unknown_flag_is_usage_error() {
    checker().arg("--bogus").assert().failure().code(2);
}

#[test]
fn test_cli_help() {
    checker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Find the Kimsufi servers availability",
        ))
        .stdout(predicate::str::contains("--mail"));
}

#[test]
fn test_cli_version_flag() {
    checker()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("kimsufi-checker"));
}
