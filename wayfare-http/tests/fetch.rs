use std::time::Duration;

use wayfare_http::{BrowserProfile, FetchError, FetchSettings, MarkupSource, PageSession, Politeness, StatusCode};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = "<html><body><h1>Tour</h1></body></html>";

fn quiet_session(check_robots: bool) -> PageSession {
    PageSession::new(
        BrowserProfile::default(),
        FetchSettings {
            check_robots,
            politeness: Politeness::none(),
            page_timeout: Duration::from_secs(2),
            robots_timeout: Duration::from_secs(1),
            ..FetchSettings::default()
        },
    )
    .expect("session builds")
}

#[tokio::test]
async fn fetch_sends_browser_headers() {
    let server = MockServer::start().await;
    let profile = BrowserProfile::default();

    Mock::given(method("GET"))
        .and(path("/t/1842"))
        .and(header("dnt", "1"))
        .and(header("upgrade-insecure-requests", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let html = quiet_session(false)
        .fetch(&format!("{}/t/1842", server.uri()))
        .await
        .expect("page fetched");
    assert_eq!(html, PAGE);

    // Several profile values contain commas, which header matchers split on.
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let sent = |name: &str| {
        requests[0]
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    assert_eq!(sent("user-agent").as_deref(), Some(profile.user_agent.as_str()));
    assert_eq!(sent("accept").as_deref(), Some(profile.accept.as_str()));
    assert_eq!(sent("accept-language").as_deref(), Some(profile.accept_language.as_str()));
    assert_eq!(sent("accept-encoding").as_deref(), Some(profile.accept_encoding.as_str()));
    assert_eq!(sent("connection").as_deref(), Some(profile.connection.as_str()));
}

#[tokio::test]
async fn robots_probe_precedes_page_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /\n"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/t/5578"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let html = quiet_session(true)
        .fetch(&format!("{}/t/5578", server.uri()))
        .await
        .expect("page fetched");
    assert_eq!(html, PAGE);
}

#[tokio::test]
async fn failing_robots_probe_is_ignored() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/t/2156"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let html = quiet_session(true)
        .fetch(&format!("{}/t/2156", server.uri()))
        .await
        .expect("probe failure must not abort the fetch");
    assert_eq!(html, PAGE);
}

#[tokio::test]
async fn slow_robots_probe_times_out_and_proceeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/t/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let html = quiet_session(true)
        .fetch(&format!("{}/t/9", server.uri()))
        .await
        .expect("page fetched after probe timeout");
    assert_eq!(html, PAGE);
}

#[tokio::test]
async fn non_success_status_is_surfaced_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/t/404"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let err = quiet_session(false)
        .fetch(&format!("{}/t/404", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(err.to_string().starts_with("failed to fetch page:"), "{err}");
}

#[tokio::test]
async fn slow_page_hits_the_timeout_ceiling() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/t/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = quiet_session(false)
        .fetch(&format!("{}/t/slow", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Timeout { .. }), "{err:?}");
}

#[tokio::test]
async fn session_is_usable_through_the_source_trait() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/t/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .mount(&server)
        .await;

    let source: Box<dyn MarkupSource> = Box::new(quiet_session(false));
    let html = source
        .fetch_markup(&format!("{}/t/1", server.uri()))
        .await
        .expect("page fetched");
    assert_eq!(html, PAGE);
}
