//! Integration tests for the audit run
//!
//! These tests use wiremock to stand up mock sites and drive the full
//! audit end-to-end.

use seo_audit::checks::{run_check, CheckName, CheckStatus};
use seo_audit::config::{AuditConfig, OutputFormat};
use seo_audit::report::write_report;
use seo_audit::{run_audit, Fetcher};
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOMEPAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Plumbing for modern CI pipelines and compliance</title>
<meta name="description" content="Keep every GitLab pipeline compliant with reusable, audited CI components. Detect drift, enforce policies and ship faster without surprises.">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta property="og:title" content="Plumber">
<meta property="og:description" content="Compliant CI pipelines">
<meta property="og:image" content="https://example.com/og.png">
<meta name="twitter:card" content="summary_large_image">
<link rel="canonical" href="https://example.com/">
<script type="application/ld+json">[{"@type":"Organization","name":"Plumber"}]</script>
</head>
<body><h1>Plumber</h1><img src="/logo.svg" alt="Plumber logo"></body>
</html>"#;

fn config_for(server: &MockServer) -> AuditConfig {
    let mut config = AuditConfig::new(server.uri());
    config.timeout_secs = 5;
    config
}

async fn mount_healthy_site(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "User-agent: *\nAllow: /\nSitemap: {}/sitemap-index.xml\n",
            server.uri()
        )))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap-index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<?xml version=\"1.0\"?><urlset><url><loc>https://example.com/</loc></url><url><loc>https://example.com/docs</loc></url></urlset>",
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(HOMEPAGE)
                .insert_header("content-type", "text/html; charset=utf-8")
                .insert_header("x-content-type-options", "nosniff")
                .insert_header("x-frame-options", "DENY"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_healthy_site_scores_full_marks() {
    let server = MockServer::start().await;
    mount_healthy_site(&server).await;

    let report = run_audit(&config_for(&server)).await.expect("audit should run");

    for (name, result) in report.checks.iter() {
        assert_eq!(result.status, CheckStatus::Passed, "{} did not pass: {:?}", name, result);
    }
    assert_eq!(report.score, 100);
    assert_eq!(report.total_issues, 0);
    assert_eq!(report.exit_code(), 0);

    assert!(report
        .checks
        .sitemap
        .passed
        .contains(&"Found 2 URL(s) in sitemap".to_string()));
    assert!(report
        .checks
        .structured_data
        .passed
        .contains(&"Organization schema found".to_string()));
    assert!(report
        .checks
        .performance
        .passed
        .contains(&"Security header found: x-frame-options".to_string()));
    assert!(report
        .checks
        .performance
        .warnings
        .contains(&"Security header missing: strict-transport-security".to_string()));
    assert_eq!(report.total_warnings, report.checks.performance.warnings.len());
}

#[tokio::test]
async fn test_site_returning_404_everywhere() {
    let server = MockServer::start().await;

    let report = run_audit(&config_for(&server)).await.expect("audit should run");

    for name in [
        CheckName::Robots,
        CheckName::MetaTags,
        CheckName::StructuredData,
        CheckName::Performance,
        CheckName::Accessibility,
    ] {
        let result = report.checks.get(name);
        assert_eq!(result.status, CheckStatus::Failed);
        assert_eq!(result.issues.len(), 1, "{}: {:?}", name, result.issues);
        assert!(result.issues[0].contains("not accessible"));
        assert!(result.issues[0].contains("404"));
    }

    assert_eq!(report.checks.sitemap.status, CheckStatus::Failed);
    assert_eq!(
        report.checks.sitemap.issues,
        vec!["No sitemap found at common locations"]
    );

    assert_eq!(report.score, 0);
    assert_eq!(report.total_issues, 6);
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_sitemap_falls_back_to_next_candidate() {
    let server = MockServer::start().await;
    let body = format!(
        "<urlset>{}</urlset>",
        "<url><loc>https://example.com/</loc></url>".repeat(5)
    );

    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sitemap-0.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset></urlset>"))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server).validated().unwrap();
    let fetcher = Fetcher::new(&config).unwrap();
    let result = run_check(CheckName::Sitemap, &fetcher, &config.site_url).await;

    assert_eq!(result.status, CheckStatus::Passed);
    assert_eq!(
        result.passed,
        vec![
            format!("Sitemap found at {}/sitemap.xml", server.uri()),
            "Sitemap appears to be valid XML".to_string(),
            "Found 5 URL(s) in sitemap".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_robots_blocking_everything_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nAllow: /blog\nDisallow: /\nSitemap: https://example.com/sitemap.xml"),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).validated().unwrap();
    let fetcher = Fetcher::new(&config).unwrap();
    let result = run_check(CheckName::Robots, &fetcher, &config.site_url).await;

    assert_eq!(result.status, CheckStatus::Failed);
    assert_eq!(result.issues, vec!["All crawlers are blocked (Disallow: /)"]);
    assert!(result
        .passed
        .contains(&"Found 1 sitemap reference(s)".to_string()));
}

#[tokio::test]
async fn test_performance_sees_wire_encoding() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_exists("accept-encoding"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .insert_header("content-encoding", "br")
                .insert_header("strict-transport-security", "max-age=63072000"),
        )
        .mount(&server)
        .await;

    let config = config_for(&server).validated().unwrap();
    let fetcher = Fetcher::new(&config).unwrap();
    let result = run_check(CheckName::Performance, &fetcher, &config.site_url).await;

    assert_eq!(result.status, CheckStatus::Passed);
    assert!(result
        .passed
        .contains(&"Content compression enabled (br)".to_string()));
    assert!(result
        .passed
        .contains(&"Security header found: strict-transport-security".to_string()));
    assert!(result.passed.iter().any(|p| p.starts_with("HTML size: ")));
}

#[tokio::test]
async fn test_slow_response_times_out_without_stalling_run() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nAllow: /")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.timeout_secs = 1;

    let report = run_audit(&config).await.expect("audit should run");

    let robots = &report.checks.robots;
    assert_eq!(robots.status, CheckStatus::Error);
    assert_eq!(robots.issues.len(), 1);
    assert!(robots.issues[0].starts_with("Error checking robots.txt:"));
    assert!(robots.issues[0].contains("timeout"));

    assert_eq!(report.checks.meta_tags.status, CheckStatus::Failed);
}

#[tokio::test]
async fn test_unreachable_site_records_errors() {
    let mut config = AuditConfig::new("http://127.0.0.1:1");
    config.timeout_secs = 2;

    let report = run_audit(&config).await.expect("audit should still produce a report");

    for name in [
        CheckName::Robots,
        CheckName::MetaTags,
        CheckName::StructuredData,
        CheckName::Performance,
        CheckName::Accessibility,
    ] {
        let result = report.checks.get(name);
        assert_eq!(result.status, CheckStatus::Error, "{}", name);
        assert!(result.issues[0].starts_with("Error checking"));
    }
    assert_eq!(report.checks.sitemap.status, CheckStatus::Failed);
    assert_eq!(report.score, 0);
    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_json_output_has_six_checks() {
    let server = MockServer::start().await;
    mount_healthy_site(&server).await;

    let report = run_audit(&config_for(&server)).await.unwrap();

    let mut buffer = Vec::new();
    write_report(&report, OutputFormat::Json, &mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    let checks = value["checks"].as_object().unwrap();
    assert_eq!(checks.len(), 6);
    for name in CheckName::ALL {
        assert!(checks.contains_key(name.key()), "missing {}", name.key());
    }
    assert_eq!(value["siteUrl"], server.uri());
    assert_eq!(value["score"], 100);
    assert_eq!(value["totalIssues"], 0);
}

#[tokio::test]
async fn test_invalid_config_is_fatal() {
    let result = run_audit(&AuditConfig::new("not a url")).await;
    assert!(result.is_err());
}
