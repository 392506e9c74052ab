//! Integration tests for the Travel ERP HTTP client

use erp_core::enquiry::CustomerOption;
use erp_core::session::LoginRequest;
use erp_core::{
    ConversionStatus, EnquiryFilters, EnquiryInput, EnquiryListQuery, ExportFormat, LeadSource,
    Priority,
};
use erp_http::{ClientError, ErpClient};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "admin@acme.test".to_string(),
        password: "secret-pass".to_string(),
    }
}

fn enquiry_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "cust_id": 7,
        "customer_name": "Ravi Kumar",
        "customer_mobile": "+91 98450 00000",
        "pkg_id": 3,
        "package_name": "Kerala Backwaters",
        "pax_count": 4,
        "lead_source": "Website",
        "priority": "Hot",
        "conversion_status": "Pending",
        "description": null,
        "agent_name": "Asha",
        "created_at": "2024-03-05T10:15:00Z"
    })
}

#[tokio::test]
async fn test_client_builder() {
    let client = ErpClient::builder()
        .base_url("http://localhost:8000/")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.url("/api/v1/auth/me"), "http://localhost:8000/api/v1/auth/me");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = ErpClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_returns_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({"email": "admin@acme.test", "password": "secret-pass"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 12,
            "org_id": 3,
            "email": "admin@acme.test",
            "message": "Login successful"
        })))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let session = client.login(&login_request()).await.unwrap();

    assert_eq!(session.user_id, 12);
    assert_eq!(session.org_id, 3);
    assert_eq!(session.email, "admin@acme.test");
}

#[tokio::test]
async fn test_login_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid email or password"})),
        )
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let err = client.login(&login_request()).await.unwrap_err();

    assert!(err.is_auth_expired());
    assert_eq!(err.user_message("Login failed"), "Invalid email or password");
}

#[tokio::test]
async fn test_session_cookie_is_sent_back() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session=abc123; Path=/; HttpOnly")
                .set_body_json(json!({"user_id": 1, "org_id": 1, "email": "a@b.test"})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me"))
        .and(header("cookie", "session=abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user_id": 1, "org_id": 1, "email": "a@b.test"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    client.login(&login_request()).await.unwrap();
    let me = client.me().await.unwrap();

    assert_eq!(me.email, "a@b.test");
}

#[tokio::test]
async fn test_logout_accepts_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    client.logout().await.unwrap();
}

#[tokio::test]
async fn test_null_navigation_is_empty_tree() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me/navigation"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let tree = client.navigation().await.unwrap();

    assert!(tree.is_empty());
}

#[tokio::test]
async fn test_navigation_permissions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me/navigation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "crm",
                "title": "CRM",
                "children": [{
                    "id": "crm_enquiries",
                    "title": "Enquiries",
                    "path": "/app/crm/enquiries",
                    "permissions": {"can_view": true, "can_create": true, "data_scope": "OWN"}
                }]
            }
        ])))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let tree = client.navigation().await.unwrap();

    let perms = tree.permissions("crm_enquiries");
    assert!(perms.can_view);
    assert!(perms.can_create);
    assert!(!perms.can_delete);
}

#[tokio::test]
async fn test_list_enquiries_sends_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crm/enquiries"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "25"))
        .and(query_param("search", "goa"))
        .and(query_param("conversion_status", "Lost"))
        .and(query_param_is_missing("agent_name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 41,
                "customer_name": "Ravi Kumar",
                "pax_count": 2,
                "priority": "Warm",
                "conversion_status": "Lost",
                "created_at": "2024-03-05T10:15:00Z"
            }],
            "pagination": {"page": 2, "page_size": 25, "total": 26}
        })))
        .mount(&mock_server)
        .await;

    let query = EnquiryListQuery::default()
        .with_page_size(25)
        .with_search("goa")
        .with_filters(EnquiryFilters {
            conversion_status: Some(ConversionStatus::Lost),
            ..EnquiryFilters::default()
        })
        .with_page(2);

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let page = client.list_enquiries(&query).await.unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].priority, Priority::Warm);
    assert_eq!(page.data[0].package_name, None);
    assert_eq!(page.pagination.total_pages(), 2);
    assert_eq!(page.pagination.shown_range(), Some((26, 26)));
}

#[tokio::test]
async fn test_expired_session_on_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crm/enquiries"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let err = client
        .list_enquiries(&EnquiryListQuery::default())
        .await
        .unwrap_err();

    assert!(err.is_auth_expired());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_get_and_update_enquiry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crm/enquiries/41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enquiry_json(41)))
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/crm/enquiries/41"))
        .and(body_json(json!({
            "cust_id": 7,
            "pkg_id": 3,
            "pax_count": 5,
            "lead_source": "Website",
            "priority": "Hot",
            "conversion_status": "Converted"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let detail = client.get_enquiry(41).await.unwrap();
    assert_eq!(detail.cust_id, Some(7));
    assert_eq!(detail.lead_source, LeadSource::Website);

    let input = EnquiryInput {
        cust_id: detail.cust_id,
        customer_name: None,
        customer_mobile: None,
        customer_email: None,
        pkg_id: detail.pkg_id,
        package_name: None,
        pax_count: 5,
        lead_source: detail.lead_source,
        priority: detail.priority,
        conversion_status: ConversionStatus::Converted,
        description: None,
    };
    let ack = client.update_enquiry(41, &input).await.unwrap();
    assert_eq!(ack.id, None);
}

#[tokio::test]
async fn test_create_enquiry_accepts_short_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/crm/enquiries"))
        .and(body_json(json!({
            "customer_name": "Meera Nair",
            "package_name": "Goa Getaway",
            "pax_count": 2,
            "lead_source": "Referral",
            "priority": "Warm",
            "conversion_status": "Pending"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 12, "message": "Enquiry created"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let input = EnquiryInput {
        cust_id: None,
        customer_name: Some("Meera Nair".into()),
        customer_mobile: None,
        customer_email: None,
        pkg_id: None,
        package_name: Some("Goa Getaway".into()),
        pax_count: 2,
        lead_source: LeadSource::Referral,
        priority: Priority::Warm,
        conversion_status: ConversionStatus::Pending,
        description: None,
    };

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let ack = client.create_enquiry(&input).await.unwrap();
    assert_eq!(ack.id, Some(12));
    assert_eq!(ack.message.as_deref(), Some("Enquiry created"));
}

#[tokio::test]
async fn test_create_enquiry_field_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/crm/enquiries"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                {"loc": ["body", "customer_mobile"], "msg": "Mobile already registered", "type": "value_error"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let input = EnquiryInput {
        cust_id: None,
        customer_name: Some("New Lead".into()),
        customer_mobile: Some("9845000000".into()),
        customer_email: None,
        pkg_id: None,
        package_name: Some("Custom Tour".into()),
        pax_count: 1,
        lead_source: LeadSource::WalkIn,
        priority: Priority::Cold,
        conversion_status: ConversionStatus::Pending,
        description: None,
    };

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let err = client.create_enquiry(&input).await.unwrap_err();

    let fields = err.field_errors().unwrap();
    assert_eq!(fields.get("customer_mobile"), Some("Mobile already registered"));
}

#[tokio::test]
async fn test_delete_enquiry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/crm/enquiries/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/crm/enquiries/10"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Enquiry not found"})))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    client.delete_enquiry(9).await.unwrap();

    let err = client.delete_enquiry(10).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(ref m) if m == "Enquiry not found"));
}

#[tokio::test]
async fn test_export_url_drops_paging() {
    let client = ErpClient::new("https://erp.example.com/").unwrap();
    let query = EnquiryListQuery::default()
        .with_search("goa trip")
        .with_filters(EnquiryFilters {
            lead_source: Some(LeadSource::WalkIn),
            ..EnquiryFilters::default()
        })
        .with_page(3);

    assert_eq!(
        client.export_url(ExportFormat::Excel, &query),
        "https://erp.example.com/api/v1/crm/enquiries/export?format=xlsx&search=goa+trip&lead_source=WalkIn"
    );
}

#[tokio::test]
async fn test_import_enquiries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/crm/enquiries/import"))
        .and(body_string_contains("filename=\"leads.csv\""))
        .and(body_string_contains("Ravi Kumar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "imported": 3,
            "failed": 1,
            "errors": ["Row 4: invalid priority"]
        })))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let summary = client
        .import_enquiries(
            "leads.csv",
            b"customer_name,pax_count\nRavi Kumar,2\n".to_vec(),
            "text/csv",
        )
        .await
        .unwrap();

    assert_eq!(summary.imported, 3);
    assert_eq!(summary.describe(), "Imported 3 enquiries, 1 rows failed");
}

#[tokio::test]
async fn test_search_customers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crm/customers"))
        .and(query_param("search", "ravi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 7, "name": "Ravi Kumar", "mobile": "+91 98450 00000"}]
        })))
        .mount(&mock_server)
        .await;

    let client = ErpClient::new(mock_server.uri()).unwrap();
    let customers = client.search_customers("  ravi ").await.unwrap();

    assert_eq!(
        customers,
        vec![CustomerOption {
            id: 7,
            name: "Ravi Kumar".into(),
            mobile: Some("+91 98450 00000".into()),
        }]
    );
}
