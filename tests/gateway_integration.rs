//! End-to-end tests through the public API against a mock server

use jobdesk::auth::{NoToken, StaticToken, TokenProvider};
use jobdesk::resources::{clients, invoices, jobs, Client, Invoice, InvoiceStatus};
use jobdesk::{ApiConfig, Error, Gateway, Method, RequestOptions};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer, token: impl TokenProvider + 'static) -> Gateway {
    Gateway::new(ApiConfig::new(server.uri()).unwrap(), Arc::new(token))
}

#[tokio::test]
async fn client_crud_round_trip() {
    let mock_server = MockServer::start().await;

    let created = Client {
        id: None,
        name: "Acme Plumbing".to_string(),
        email: "office@acme.test".to_string(),
        phone: "555-0100".to_string(),
        address: "1 Main St".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/Clients"))
        .and(header("Authorization", "Bearer cli-token"))
        .and(body_json(serde_json::to_value(&created).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "c1", "name": "Acme Plumbing", "email": "office@acme.test",
            "phone": "555-0100", "address": "1 Main St"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c1", "name": "Acme Plumbing", "email": "office@acme.test",
            "phone": "555-0100", "address": "1 Main St"
        }])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/Clients/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gw = gateway(&mock_server, StaticToken::new("cli-token"));

    clients::create(&gw, &created).await.unwrap();

    let listed = clients::list(&gw).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id.as_deref(), Some("c1"));

    clients::delete(&gw, "c1").await.unwrap();
}

#[tokio::test]
async fn sloppy_paths_reach_the_same_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(4)
        .mount(&mock_server)
        .await;

    let gw = gateway(&mock_server, NoToken);
    for p in ["Jobs", "/Jobs", "Jobs/", "/Jobs/"] {
        let outcome = gw.send(p, RequestOptions::new()).await.unwrap();
        assert_eq!(outcome, Some(json!([])));
    }
}

#[tokio::test]
async fn remote_error_message_reaches_the_caller() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/Invoices/i1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "Invoice already paid"})),
        )
        .mount(&mock_server)
        .await;

    let invoice = Invoice {
        id: Some("i1".to_string()),
        client_id: "c1".to_string(),
        job_id: Some("j1".to_string()),
        status: InvoiceStatus::Paid,
        issue_date: "2024-03-01T00:00:00Z".parse().unwrap(),
        due_date: "2024-03-31T00:00:00Z".parse().unwrap(),
        amount: 450.0,
    };

    let gw = gateway(&mock_server, StaticToken::new("cli-token"));
    let err = invoices::update(&gw, "i1", &invoice).await.unwrap_err();

    assert_eq!(err.to_string(), "Invoice already paid");
    assert!(matches!(err, Error::Remote { status: 409, .. }));
}

#[tokio::test]
async fn custom_method_and_headers_pass_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/Jobs/j1"))
        .and(header("X-Request-Id", "abc"))
        .and(header("Authorization", "Bearer cli-token"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gw = gateway(&mock_server, StaticToken::new("cli-token"));
    let outcome = gw
        .send(
            "Jobs/j1",
            RequestOptions::new()
                .method(Method::PATCH)
                .header("X-Request-Id", "abc")
                .json(json!({"status": 2})),
        )
        .await
        .unwrap();

    assert_eq!(outcome, None);
}

#[tokio::test]
async fn dashboard_style_parallel_fetches() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "c1", "name": "Acme", "email": "a@a.test",
            "phone": "1", "address": "x"
        }])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Jobs"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let gw = gateway(&mock_server, StaticToken::new("cli-token"));
    let (c, j, i) = tokio::join!(clients::list(&gw), jobs::list(&gw), invoices::list(&gw));

    assert_eq!(c.unwrap().len(), 1);
    assert!(j.unwrap().is_empty());
    assert!(i.unwrap().is_empty());
}

#[tokio::test]
async fn unauthenticated_calls_still_carry_the_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Clients"))
        .and(header("Authorization", "Bearer "))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gw = gateway(&mock_server, NoToken);
    let err = clients::list(&gw).await.unwrap_err();

    assert_eq!(err.to_string(), "Unauthorized");
}
