//! Documents service integration tests.

use std::time::Duration;

use renderbase_sdk::{
    DocumentFormat, DocumentKind, DocumentListParams, Error, GenerateRequest, JobStatus,
    RenderbaseClient,
};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::common::{job, page, MockApiServer};

/// Generate posts exactly the set fields and echoes the template.
#[tokio::test]
async fn test_generate_posts_request_body() {
    let server = MockApiServer::start().await;
    server.respond_json(200, job("job_123", "queued", "tmpl_invoice"));

    let request = GenerateRequest::new("tmpl_invoice", DocumentFormat::Pdf)
        .variable("invoiceNumber", "INV-001");
    let result = server.client().documents().generate(&request).await.unwrap();

    assert_eq!(result.template_id, "tmpl_invoice");
    assert_eq!(result.status, JobStatus::Queued);
    assert!(result.download_url.is_none());

    let recorded = server.single_request();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/v1/documents/generate");
    assert_eq!(recorded.query, None);
    assert_eq!(
        recorded.json(),
        json!({
            "templateId": "tmpl_invoice",
            "format": "pdf",
            "variables": {"invoiceNumber": "INV-001"}
        })
    );
    assert_eq!(recorded.header("content-type"), Some("application/json"));
}

/// Workspace ID is only sent when set.
#[tokio::test]
async fn test_generate_with_workspace() {
    let server = MockApiServer::start().await;
    server.respond_json(200, job("job_9", "completed", "tmpl_report"));

    let request = GenerateRequest::new("tmpl_report", DocumentFormat::Excel)
        .variable("month", "2025-01")
        .with_workspace_id("ws_abc123");
    let result = server.client().documents().generate(&request).await.unwrap();

    assert!(result.is_completed());
    assert!(result.ready_download_url().is_some());

    let body = server.single_request().json();
    assert_eq!(body["workspaceId"], "ws_abc123");
    assert_eq!(body["format"], "excel");
}

/// Every API call carries the bearer credential.
#[tokio::test]
async fn test_requests_are_authenticated() {
    let server = MockApiServer::start().await;
    server.respond_json(200, job("job_123", "processing", "tmpl_invoice"));

    server.client().documents().get("job_123").await.unwrap();

    let recorded = server.single_request();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/api/v1/documents/jobs/job_123");
    assert_eq!(recorded.header("authorization"), Some("Bearer sk_test"));
    assert_eq!(recorded.header("accept"), Some("application/json"));
    assert!(recorded
        .header("user-agent")
        .is_some_and(|ua| ua.starts_with("renderbase-sdk-rust/")));
}

/// Listing without filters sends no query string.
#[tokio::test]
async fn test_list_without_filters() {
    let server = MockApiServer::start().await;
    server.respond_json(
        200,
        page(
            vec![
                job("job_1", "completed", "tmpl_invoice"),
                job("job_2", "failed", "tmpl_invoice"),
            ],
            1,
            20,
            2,
        ),
    );

    let jobs = server.client().documents().list().await.unwrap();

    assert_eq!(jobs.len(), 2);
    assert!(jobs.data[1].is_failed());
    assert!(!jobs.has_more());

    let recorded = server.single_request();
    assert_eq!(recorded.path, "/api/v1/documents/jobs");
    assert_eq!(recorded.query, None);
}

/// Only the filters that were set appear in the query string.
#[tokio::test]
async fn test_list_sends_only_set_filters() {
    let server = MockApiServer::start().await;
    server.respond_json(200, page(vec![], 2, 50, 0));
    let documents = server.client().documents();

    let cases = [
        (DocumentListParams::new(), None),
        (
            DocumentListParams::new().with_page(2).with_limit(50),
            Some("page=2&limit=50"),
        ),
        (
            DocumentListParams::new().with_template_id("tmpl_invoice"),
            Some("templateId=tmpl_invoice"),
        ),
        (
            DocumentListParams::new()
                .with_limit(5)
                .with_workspace_id("ws_1"),
            Some("limit=5&workspaceId=ws_1"),
        ),
        (
            DocumentListParams::new()
                .with_page(1)
                .with_limit(10)
                .with_template_id("tmpl_invoice")
                .with_workspace_id("ws_1"),
            Some("page=1&limit=10&templateId=tmpl_invoice&workspaceId=ws_1"),
        ),
    ];

    for (params, expected) in cases {
        server.clear();
        documents.list_with_params(&params).await.unwrap();

        let recorded = server.single_request();
        assert_eq!(recorded.path, "/api/v1/documents/jobs");
        assert_eq!(recorded.query.as_deref(), expected, "params {params:?}");
    }
}

/// The server's applied page size is reported, not the requested one.
#[tokio::test]
async fn test_list_reports_server_pagination() {
    let server = MockApiServer::start().await;
    server.respond_json(200, page(vec![job("job_1", "queued", "t")], 1, 100, 250));

    let jobs = server
        .client()
        .documents()
        .list_with_params(&DocumentListParams::new().with_limit(1000))
        .await
        .unwrap();

    assert_eq!(jobs.limit, 100);
    assert_eq!(jobs.total, 250);
    assert!(jobs.has_more());
    assert_eq!(jobs.total_pages(), 3);
}

/// Delete issues a DELETE and ignores the body.
#[tokio::test]
async fn test_delete_job() {
    let server = MockApiServer::start().await;
    server.respond_raw(204, Vec::new(), "text/plain");

    server.client().documents().delete("job_123").await.unwrap();

    let recorded = server.single_request();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.path, "/api/v1/documents/jobs/job_123");
}

/// Deleting a missing job surfaces the 404.
#[tokio::test]
async fn test_delete_missing_job_is_not_found() {
    let server = MockApiServer::start().await;
    server.respond_json(404, json!({"message": "Job not found", "code": "job_not_found"}));

    let err = server.client().documents().delete("job_123").await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, .. }));
    assert!(err.is_not_found());
    assert_eq!(err.code(), Some("job_not_found"));
}

/// Reserved characters in a job ID stay inside its path segment.
#[tokio::test]
async fn test_job_id_is_one_path_segment() {
    let server = MockApiServer::start().await;
    server.respond_json(200, job("a/b?c", "completed", "tmpl_invoice"));

    let result = server.client().documents().get("a/b?c").await.unwrap();
    assert_eq!(result.job_id, "a/b?c");

    let recorded = server.single_request();
    assert_eq!(recorded.path, "/api/v1/documents/jobs/a%2Fb%3Fc");
    assert_eq!(recorded.query, None);
}

/// A job ID cannot walk out of the jobs collection.
#[tokio::test]
async fn test_delete_does_not_follow_dot_segments() {
    let server = MockApiServer::start().await;
    server.respond_raw(204, Vec::new(), "text/plain");

    server
        .client()
        .documents()
        .delete("../../webhooks/wh_1")
        .await
        .unwrap();

    let recorded = server.single_request();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.path, "/api/v1/documents/jobs/..%2F..%2Fwebhooks%2Fwh_1");
}

/// Bare dot or empty IDs fail before any request is sent.
#[tokio::test]
async fn test_dot_ids_rejected_locally() {
    let server = MockApiServer::start().await;
    let documents = server.client().documents();

    for id in ["..", ".", ""] {
        let err = documents.delete(id).await.unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }), "{id:?}: {err:?}");
    }
    assert!(server.requests().is_empty());
}

/// Unknown formats on a job do not fail the response.
#[tokio::test]
async fn test_get_job_with_unknown_format() {
    let server = MockApiServer::start().await;
    let mut body = job("job_7", "completed", "tmpl_letter");
    body["format"] = json!("docx");
    server.respond_json(200, body);

    let result = server.client().documents().get("job_7").await.unwrap();

    assert!(result.is_completed());
    assert_eq!(result.format, DocumentKind::Other("docx".into()));
}

/// Download fetches raw bytes without the API key.
#[tokio::test]
async fn test_download_is_unauthenticated() {
    let server = MockApiServer::start().await;
    let pdf = b"%PDF-1.7 fake document".to_vec();
    server.respond_raw(200, pdf.clone(), "application/pdf");

    let url = server.url("/files/job_123.pdf?X-Signature=abc");
    let bytes = server.client().documents().download(&url).await.unwrap();

    assert_eq!(&bytes[..], pdf.as_slice());

    let recorded = server.single_request();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/files/job_123.pdf");
    assert_eq!(recorded.query.as_deref(), Some("X-Signature=abc"));
    assert_eq!(recorded.header("authorization"), None);
}

/// A non-2xx from the download URL is a download error, not an API error.
#[tokio::test]
async fn test_download_error_status() {
    let server = MockApiServer::start().await;
    server.respond_raw(403, "<Error>Request has expired</Error>", "application/xml");

    let err = server
        .client()
        .documents()
        .download(server.url("/files/expired.pdf"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Download { .. }));
    assert_eq!(err.status_code(), None);
}

/// An unparseable download URL fails without a request.
#[tokio::test]
async fn test_download_invalid_url() {
    let server = MockApiServer::start().await;

    let err = server
        .client()
        .documents()
        .download("not a url")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Download { .. }));
    assert!(server.requests().is_empty());
}

/// Connection failures on the download path are download errors.
#[tokio::test]
async fn test_download_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let server = MockApiServer::start().await;
    let err = server
        .client()
        .documents()
        .download(format!("http://{addr}/doc.pdf"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Download { source: Some(_), .. }));
}

/// Downloaded bytes are written to disk.
#[tokio::test]
async fn test_download_to_file() {
    let server = MockApiServer::start().await;
    server.respond_raw(200, b"PK\x03\x04 workbook".to_vec(), "application/octet-stream");

    let path = std::env::temp_dir().join(format!("renderbase-test-{}.xlsx", std::process::id()));
    let written = server
        .client()
        .documents()
        .download_to_file(server.url("/files/report.xlsx"), &path)
        .await
        .unwrap();

    let contents = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written, contents.len());
    assert_eq!(contents, b"PK\x03\x04 workbook");
}

/// Jobs can be looked up after generation.
#[tokio::test]
async fn test_generate_then_get() {
    let server = MockApiServer::start().await;
    let documents = server.client().documents();

    server.respond_json(200, job("job_42", "queued", "tmpl_invoice"));
    let queued = documents
        .generate(&GenerateRequest::new("tmpl_invoice", DocumentFormat::Pdf))
        .await
        .unwrap();
    assert!(queued.is_pending());

    server.respond_json(200, job("job_42", "completed", "tmpl_invoice"));
    let done = documents.get(&queued.job_id).await.unwrap();

    assert!(done.is_completed());
    assert_eq!(
        done.ready_download_url(),
        Some("https://cdn.renderbase.dev/job_42.pdf?sig=abc")
    );

    let paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/v1/documents/generate", "/api/v1/documents/jobs/job_42"]);
}

/// Serves one HTTP response after `delay` on a fresh local port.
async fn slow_file_server(delay: Duration, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        tokio::time::sleep(delay).await;

        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/pdf\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(body).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/files/big.pdf")
}

/// Downloads are bounded by the download timeout, not the API timeout.
#[tokio::test]
async fn test_download_outlives_request_timeout() {
    let url = slow_file_server(Duration::from_millis(400), b"%PDF-1.7 slow").await;
    let client = RenderbaseClient::builder()
        .api_key("sk_test")
        .timeout(Duration::from_millis(100))
        .download_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let bytes = client.documents().download(&url).await.unwrap();
    assert_eq!(&bytes[..], b"%PDF-1.7 slow");
}

/// A download slower than the download timeout fails as a download error.
#[tokio::test]
async fn test_download_timeout_expires() {
    let url = slow_file_server(Duration::from_secs(5), b"never").await;
    let client = RenderbaseClient::builder()
        .api_key("sk_test")
        .download_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.documents().download(&url).await.unwrap_err();
    match err {
        Error::Download { source: Some(source), .. } => assert!(source.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}
