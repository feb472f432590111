//! Integration tests for the recap feed server.
//!
//! These tests drive the real router over a local TCP listener, with the
//! upstream GitHub feed host replaced by a wiremock server serving Atom
//! fixtures.

use chrono::{Duration, Utc};
use recap::server::{build_router, AppState};
use recap::Config;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Fixtures
// =============================================================================

/// One Atom entry element.
fn atom_entry(id: &str, published: &str, title: &str, link: &str) -> String {
    format!(
        r#"<entry>
  <id>{id}</id>
  <published>{published}</published>
  <updated>{published}</updated>
  <link type="text/html" rel="alternate" href="{link}"/>
  <title type="html">{title}</title>
</entry>"#
    )
}

/// A full Atom feed document wrapping the given entries.
fn atom_feed(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:media="http://search.yahoo.com/mrss/" xml:lang="en-US">
  <id>tag:github.com,2008:/alice</id>
  <title>alice's Activity</title>
  <updated>2024-05-02T09:00:00Z</updated>
{}
</feed>"#,
        entries.join("\n")
    )
}

/// Start the recap server against the given upstream, on a random port.
async fn start_recap_server(feed_base_url: &str) -> SocketAddr {
    let config = Config {
        port: 0,
        public_url: Some("https://recap.example.com".to_string()),
        feed_base_url: feed_base_url.to_string(),
    };
    let state = Arc::new(AppState::new(config).expect("feed client"));
    let app = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Mount an Atom feed for `handle` on the mock upstream.
async fn mount_feed(upstream: &MockServer, handle: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/{handle}.atom")))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body, "application/atom+xml; charset=utf-8"),
        )
        .mount(upstream)
        .await;
}

// =============================================================================
// Tests
// =============================================================================

/// Full digest flow: yesterday's activity becomes one RSS item, today's is
/// held back.
#[tokio::test]
async fn test_digest_flow_excludes_today() {
    let upstream = MockServer::start().await;

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let yesterday = (Utc::now() - Duration::days(1)).format("%Y-%m-%d").to_string();
    let newest_published = format!("{today}T08:00:00Z");

    // Feed order is newest first
    let feed = atom_feed(&[
        atom_entry(
            "tag:github.com,2008:WatchEvent/2",
            &newest_published,
            "alice starred bob/gadget",
            "https://github.com/bob/gadget",
        ),
        atom_entry(
            "tag:github.com,2008:PushEvent/1",
            &format!("{yesterday}T20:00:00Z"),
            "alice pushed to main in alice/widget",
            "https://github.com/alice/widget/compare/ab...cd",
        ),
        atom_entry(
            "tag:github.com,2008:IssuesEvent/3",
            &format!("{yesterday}T10:00:00Z"),
            "alice closed an issue in alice/widget#4",
            "https://github.com/alice/widget/issues/4",
        ),
    ]);
    mount_feed(&upstream, "alice", feed).await;

    let addr = start_recap_server(&upstream.uri()).await;
    let response = reqwest::get(format!("http://{addr}/alice")).await.unwrap();

    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("application/xml"));

    let xml = response.text().await.unwrap();

    // Channel envelope
    assert!(xml.contains("<title>GitHub Recap Feed (alice)</title>"));
    assert!(xml.contains(
        r#"<atom:link href="https://recap.example.com/alice" rel="self" type="application/rss+xml" />"#
    ));
    // lastBuildDate carries the newest entry's raw timestamp
    assert!(xml.contains(&format!("<lastBuildDate>{newest_published}</lastBuildDate>")));

    // Exactly one day item: yesterday. Today's star is held back.
    assert_eq!(xml.matches("<item>").count(), 1);
    assert!(xml.contains(&format!(
        r#"<guid isPermaLink="false">github-recap-feed-alice-{yesterday}</guid>"#
    )));
    assert!(xml.contains(&format!("<pubDate>{yesterday}</pubDate>")));
    assert!(xml.contains("<dc:creator>alice</dc:creator>"));
    assert!(!xml.contains("star created"));

    // Day description lines
    assert!(xml.contains(
        r#"1 commit pushed: <a href="https://github.com/alice/widget">alice/widget</a>"#
    ));
    assert!(xml.contains(
        r#"1 issue closed: <a href="https://github.com/alice/widget/issues/4">alice/widget#4</a>"#
    ));
}

/// An unknown handle answers 404, distinct from a user with no activity.
#[tokio::test]
async fn test_unknown_handle_is_404() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nobody.atom"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&upstream)
        .await;

    let addr = start_recap_server(&upstream.uri()).await;
    let response = reqwest::get(format!("http://{addr}/nobody")).await.unwrap();
    assert_eq!(response.status(), 404);
}

/// A non-Atom document from upstream also means "no such user".
#[tokio::test]
async fn test_non_atom_body_is_404() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alice.atom"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#,
            "application/xml",
        ))
        .mount(&upstream)
        .await;

    let addr = start_recap_server(&upstream.uri()).await;
    let response = reqwest::get(format!("http://{addr}/alice")).await.unwrap();
    assert_eq!(response.status(), 404);
}

/// Upstream failures surface as 502, not 404.
#[tokio::test]
async fn test_upstream_error_is_502() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alice.atom"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let addr = start_recap_server(&upstream.uri()).await;
    let response = reqwest::get(format!("http://{addr}/alice")).await.unwrap();
    assert_eq!(response.status(), 502);
}

/// A user with zero events still gets a valid, empty feed document.
#[tokio::test]
async fn test_empty_feed_renders_empty_channel() {
    let upstream = MockServer::start().await;
    mount_feed(&upstream, "quiet", atom_feed(&[])).await;

    let addr = start_recap_server(&upstream.uri()).await;
    let response = reqwest::get(format!("http://{addr}/quiet")).await.unwrap();

    assert_eq!(response.status(), 200);
    let xml = response.text().await.unwrap();
    assert!(xml.contains("<title>GitHub Recap Feed (quiet)</title>"));
    assert!(!xml.contains("<item>"));
    assert!(!xml.contains("lastBuildDate"));
}

/// Static routes answer without touching the upstream.
#[tokio::test]
async fn test_static_routes() {
    let upstream = MockServer::start().await;
    let addr = start_recap_server(&upstream.uri()).await;

    let health = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(health.status(), 200);
    let body: serde_json::Value = health.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());

    let index = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(index.status(), 200);
    let content_type = index
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/html"));
    assert!(index.text().await.unwrap().contains("GitHub Recap Feed"));

    let favicon = reqwest::get(format!("http://{addr}/favicon.ico"))
        .await
        .unwrap();
    assert_eq!(favicon.status(), 200);
    assert!(favicon.text().await.unwrap().is_empty());
}
