//! Webhooks service integration tests.

use renderbase_sdk::{Pagination, WebhookCreate, WebhookEvent};
use serde_json::json;

use crate::common::{page, webhook, MockApiServer};

#[tokio::test]
async fn test_create_webhook() {
    let server = MockApiServer::start().await;
    let mut created = webhook("wh_1");
    created["secret"] = json!("whsec_abc");
    created["description"] = json!("Invoice pipeline");
    server.respond_json(201, created);

    let request = WebhookCreate::new(
        "https://example.com/hooks/renderbase",
        vec![WebhookEvent::DocumentCompleted, WebhookEvent::DocumentFailed],
    )
    .with_description("Invoice pipeline");
    let webhook = server.client().webhooks().create(&request).await.unwrap();

    assert_eq!(webhook.id, "wh_1");
    assert_eq!(webhook.secret.as_deref(), Some("whsec_abc"));
    assert!(webhook.active);

    let recorded = server.single_request();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/v1/webhooks");
    assert_eq!(
        recorded.json(),
        json!({
            "url": "https://example.com/hooks/renderbase",
            "events": ["document.completed", "document.failed"],
            "description": "Invoice pipeline"
        })
    );
}

#[tokio::test]
async fn test_create_webhook_without_description() {
    let server = MockApiServer::start().await;
    server.respond_json(200, webhook("wh_2"));

    let request = WebhookCreate::new(
        "https://example.com/hooks/renderbase",
        vec![WebhookEvent::DocumentCompleted],
    );
    server.client().webhooks().create(&request).await.unwrap();

    let body = server.single_request().json();
    assert!(body.get("description").is_none());
}

/// Unknown event names survive deserialization.
#[tokio::test]
async fn test_list_webhooks() {
    let server = MockApiServer::start().await;
    let mut custom = webhook("wh_2");
    custom["events"] = json!(["document.completed", "template.updated"]);
    custom["active"] = json!(false);
    server.respond_json(200, page(vec![webhook("wh_1"), custom], 1, 20, 2));

    let webhooks = server.client().webhooks().list().await.unwrap();

    assert_eq!(webhooks.len(), 2);
    assert!(!webhooks.data[1].active);
    assert_eq!(
        webhooks.data[1].events[1],
        WebhookEvent::Other("template.updated".to_string())
    );

    let recorded = server.single_request();
    assert_eq!(recorded.path, "/api/v1/webhooks");
    assert_eq!(recorded.query, None);
}

#[tokio::test]
async fn test_list_webhooks_with_pagination() {
    let server = MockApiServer::start().await;
    server.respond_json(200, page(vec![], 3, 5, 10));

    let webhooks = server
        .client()
        .webhooks()
        .list_with_pagination(&Pagination::new(3, 5))
        .await
        .unwrap();

    assert!(webhooks.is_empty());
    assert!(!webhooks.has_more());
    assert_eq!(server.single_request().query.as_deref(), Some("page=3&limit=5"));
}

#[tokio::test]
async fn test_get_webhook() {
    let server = MockApiServer::start().await;
    server.respond_json(200, webhook("wh_1"));

    let webhook = server.client().webhooks().get("wh_1").await.unwrap();

    assert_eq!(webhook.events, [WebhookEvent::DocumentCompleted]);
    assert!(webhook.created_at.is_some());

    let recorded = server.single_request();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.path, "/api/v1/webhooks/wh_1");
}

#[tokio::test]
async fn test_delete_webhook() {
    let server = MockApiServer::start().await;
    server.respond_json(200, json!({"success": true}));

    server.client().webhooks().delete("wh_1").await.unwrap();

    let recorded = server.single_request();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.path, "/api/v1/webhooks/wh_1");
    assert_eq!(recorded.header("authorization"), Some("Bearer sk_test"));
}
