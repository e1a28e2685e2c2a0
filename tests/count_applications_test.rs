use anyhow::Result;
use apim_cli::adapters::console::BufferedConsole;
use apim_cli::core::Credentials;
use apim_cli::{ApimError, CommandRunner, CountApplications, HttpManagementApi, Settings};
use httpmock::prelude::*;
use serde_json::json;

const LOGIN_PATH: &str = "/management/organizations/DEFAULT/user/login";
const APPLICATIONS_PATH: &str =
    "/management/organizations/DEFAULT/environments/DEFAULT/applications/_paged";
// admin:admin
const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

fn settings_for(server: &MockServer, page_size: usize) -> Settings {
    Settings {
        url: server.base_url(),
        organization: "DEFAULT".to_string(),
        environment: "DEFAULT".to_string(),
        timeout_seconds: 5,
        page_size,
        credentials: Credentials::new("admin", "admin"),
    }
}

async fn run_count(settings: &Settings) -> (apim_cli::Result<()>, BufferedConsole) {
    let api = HttpManagementApi::from_config(settings).expect("client should build");
    let runner = CommandRunner::new(CountApplications::new(settings.credentials.clone()));
    let mut console = BufferedConsole::new();
    let result = runner.run(&api, &mut console).await;
    (result, console)
}

#[tokio::test]
async fn test_counts_applications_across_pages() -> Result<()> {
    let server = MockServer::start_async().await;

    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(LOGIN_PATH)
                .header("authorization", ADMIN_BASIC_AUTH);
            then.status(200)
                .json_body(json!({"token": "jwt-token", "token_type": "BEARER"}));
        })
        .await;

    let first_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(APPLICATIONS_PATH)
                .query_param("page", "1")
                .query_param("size", "2")
                .header("authorization", "Bearer jwt-token");
            then.status(200).json_body(json!({
                "data": [{"id": "app-1", "name": "Mobile"}, {"id": "app-2", "name": "Web"}],
                "page": {"current": 1, "size": 2, "per_page": 2, "total_pages": 2, "total_elements": 3}
            }));
        })
        .await;

    let second_page = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(APPLICATIONS_PATH)
                .query_param("page", "2")
                .header("authorization", "Bearer jwt-token");
            then.status(200).json_body(json!({
                "data": [{"id": "app-3", "name": "Partner"}],
                "page": {"current": 2, "size": 1, "per_page": 2, "total_pages": 2, "total_elements": 3}
            }));
        })
        .await;

    let (result, console) = run_count(&settings_for(&server, 2)).await;
    result?;

    login_mock.assert_hits_async(1).await;
    first_page.assert_hits_async(1).await;
    second_page.assert_hits_async(1).await;
    assert_eq!(
        console.lines(),
        ["There are 3 applications in the requested environment"]
    );
    Ok(())
}

#[tokio::test]
async fn test_reports_five_applications_regardless_of_content() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({"token": "jwt-token"}));
        })
        .await;

    let listing = server
        .mock_async(|when, then| {
            when.method(GET).path(APPLICATIONS_PATH);
            then.status(200).json_body(json!({
                "data": [{"id": "a"}, {}, "opaque", 42, {"name": "no id"}],
                "page": {"current": 1, "total_pages": 1}
            }));
        })
        .await;

    let (result, console) = run_count(&settings_for(&server, 100)).await;
    result?;

    listing.assert_hits_async(1).await;
    assert_eq!(
        console.lines(),
        ["There are 5 applications in the requested environment"]
    );
    Ok(())
}

#[tokio::test]
async fn test_reports_zero_applications() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({"token": "jwt-token"}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(APPLICATIONS_PATH);
            then.status(200).json_body(json!({
                "data": [],
                "page": {"current": 0, "total_pages": 0, "total_elements": 0}
            }));
        })
        .await;

    let (result, console) = run_count(&settings_for(&server, 100)).await;
    result?;

    assert_eq!(
        console.lines(),
        ["There are 0 applications in the requested environment"]
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_login_does_not_list_applications() -> Result<()> {
    let server = MockServer::start_async().await;

    let login_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(401)
                .json_body(json!({"message": "Wrong user or password", "http_status": 401}));
        })
        .await;

    let listing = server
        .mock_async(|when, then| {
            when.method(GET).path(APPLICATIONS_PATH);
            then.status(200).json_body(json!([]));
        })
        .await;

    let (result, console) = run_count(&settings_for(&server, 100)).await;

    match result {
        Err(ApimError::AuthenticationError { status, message }) => {
            assert_eq!(status, 401);
            assert!(message.contains("Wrong user or password"));
        }
        other => panic!("expected an authentication error, got {:?}", other),
    }
    login_mock.assert_hits_async(1).await;
    listing.assert_hits_async(0).await;
    assert!(console.lines().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_listing_failure_prints_nothing() -> Result<()> {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path(LOGIN_PATH);
            then.status(200).json_body(json!({"token": "jwt-token"}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(GET).path(APPLICATIONS_PATH);
            then.status(500).body("Internal Server Error");
        })
        .await;

    let (result, console) = run_count(&settings_for(&server, 100)).await;

    match result {
        Err(e @ ApimError::ApiResponseError { status: 500, .. }) => {
            assert_eq!(e.exit_code(), 2);
        }
        other => panic!("expected an API response error, got {:?}", other),
    }
    assert!(console.lines().is_empty());
    Ok(())
}
