//! End-to-end store and page behaviour against a mock platform API.

use std::sync::Arc;

use admin_console::{
    AdminConsole, AdminConsoleConfig, HttpResourceClient, PageView, RecordingNotifier,
    SubscriptionPlanDraft,
};
use admin_console_sdk::{NewTenant, ResourceApi, Tenant, TenantPatch};
use farmkit_http::HttpClient;
use httpmock::prelude::*;
use serde_json::json;
use url::Url;

fn http_client() -> HttpClient {
    HttpClient::builder().allow_insecure_http().build().unwrap()
}

fn console(base_url: String) -> (AdminConsole, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let config = AdminConsoleConfig {
        base_url,
        page_size: 2,
    };
    let console = AdminConsole::new(http_client(), &config, notifier.clone()).unwrap();
    (console, notifier)
}

fn tenant_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("ops@{}.io", name.to_lowercase()),
        "domain": format!("{}.io", name.to_lowercase()),
        "subdomain": name.to_lowercase(),
        "phoneNumber": "+62 811",
        "active": id % 2 == 0,
        "createdAt": "2024-05-01T08:00:00Z",
        "updatedAt": null
    })
}

fn plan_json(id: i64, name: &str, monthly: f64) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "priceMonthly": monthly,
        "priceYearly": monthly * 10.0,
        "maxUsers": 5,
        "maxDevices": 10,
        "description": format!("{name} tier"),
        "createdAt": "2024-05-01T08:00:00Z",
        "updatedAt": "2024-06-01T08:00:00Z"
    })
}

#[tokio::test]
async fn create_tenant_refetches_and_notifies() {
    let server = MockServer::start();
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/v1/tenants").json_body(json!({
            "name": "Acme",
            "email": "a@acme.io",
            "domain": "acme.io",
            "subdomain": "acme",
            "phoneNumber": "+1",
            "active": true
        }));
        then.status(201)
            .json_body(json!({"success": true, "data": tenant_json(1, "Acme")}));
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tenants");
        then.status(200)
            .json_body(json!({"success": true, "data": [tenant_json(1, "Acme")]}));
    });

    let (console, notifier) = console(server.base_url());
    console
        .tenants()
        .create(&NewTenant {
            name: "Acme".to_owned(),
            email: "a@acme.io".to_owned(),
            domain: "acme.io".to_owned(),
            subdomain: "acme".to_owned(),
            phone_number: "+1".to_owned(),
            active: true,
        })
        .await;

    create.assert();
    list.assert_hits(1);
    assert_eq!(notifier.successes(), vec!["Tenant created successfully!"]);
    let state = console.tenants().snapshot();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
}

#[tokio::test]
async fn plan_fetch_envelope_failure_sets_error() {
    let server = MockServer::start();
    let _list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/subscription-plans");
        then.status(200)
            .json_body(json!({"success": false, "message": "db unavailable"}));
    });

    let (console, notifier) = console(server.base_url());
    console.plans().fetch_all().await;

    let state = console.plans().snapshot();
    assert_eq!(state.error.as_deref(), Some("db unavailable"));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(notifier.errors(), vec!["db unavailable"]);
}

#[tokio::test]
async fn invalid_plan_never_reaches_the_network() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.path_matches(r"^/api/.*");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });

    let (console, notifier) = console(server.base_url());
    let mut page = console.plan_page();
    page.begin_create();
    *page.modal_mut().draft_mut() = SubscriptionPlanDraft {
        name: "Basic".to_owned(),
        description: "Starter".to_owned(),
        max_users: 0,
        ..SubscriptionPlanDraft::default()
    };

    let errors = page.save().await.unwrap_err();

    assert!(errors.field_errors().contains_key("max_users"));
    assert!(page.modal().is_open());
    any.assert_hits(0);
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn delete_connection_refused_uses_fallback_and_skips_refetch() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (console, notifier) = console(format!("http://{addr}"));
    console.tenants().delete(7).await;

    let state = console.tenants().snapshot();
    assert_eq!(state.error.as_deref(), Some("Failed to delete tenant"));
    assert!(!state.loading);
    assert_eq!(notifier.errors(), vec!["Failed to delete tenant"]);
    assert!(notifier.successes().is_empty());
}

#[tokio::test]
async fn non_2xx_body_message_is_surfaced() {
    let server = MockServer::start();
    let _update = server.mock(|when, then| {
        when.method(PUT).path("/api/v1/tenants/3");
        then.status(422)
            .json_body(json!({"success": false, "message": "subdomain already taken"}));
    });
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tenants");
        then.status(200).json_body(json!({"success": true, "data": []}));
    });

    let (console, _notifier) = console(server.base_url());
    console
        .tenants()
        .update(3, &TenantPatch {
            subdomain: Some("taken".to_owned()),
            ..Default::default()
        })
        .await;

    assert_eq!(
        console.tenants().error().as_deref(),
        Some("subdomain already taken")
    );
    list.assert_hits(0);
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let server = MockServer::start();
    let _list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/subscription-plans");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let (console, _notifier) = console(server.base_url());
    console.plans().fetch_all().await;

    assert_eq!(
        console.plans().error().as_deref(),
        Some("Failed to fetch subscription plans")
    );
}

#[tokio::test]
async fn malformed_envelope_falls_back() {
    let server = MockServer::start();
    let _list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tenants");
        then.status(200).json_body(json!([1, 2, 3]));
    });

    let (console, _notifier) = console(server.base_url());
    console.tenants().fetch_all().await;

    assert_eq!(
        console.tenants().error().as_deref(),
        Some("Failed to fetch tenants")
    );
}

#[tokio::test]
async fn patch_sends_only_present_fields() {
    let server = MockServer::start();
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/tenants/9")
            .json_body(json!({"active": false}));
        then.status(200).json_body(json!({"success": true}));
    });

    let api: Arc<dyn ResourceApi<Tenant>> = Arc::new(HttpResourceClient::<Tenant>::new(
        http_client(),
        Url::parse(&server.base_url()).unwrap(),
    ));
    let outcome = api
        .update(9, &TenantPatch {
            active: Some(false),
            ..Default::default()
        })
        .await
        .unwrap();

    update.assert();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn plan_page_renders_rows_with_pagination() {
    let server = MockServer::start();
    let _list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/subscription-plans");
        then.status(200).json_body(json!({
            "success": true,
            "data": [
                plan_json(10, "Basic", 50_000.0),
                plan_json(11, "Pro", 150_000.0),
                plan_json(12, "Enterprise", 1_500_000.0)
            ]
        }));
    });

    let (console, _notifier) = console(server.base_url());
    let mut page = console.plan_page();
    page.mount().await;

    let PageView::Table(first) = page.view() else {
        panic!("expected table, got {:?}", page.view());
    };
    assert_eq!(first.title, "Subscription Plans");
    assert_eq!(first.columns[0], "No");
    assert_eq!((first.page, first.page_count, first.total), (1, 2, 3));
    assert_eq!(first.rows.len(), 2);

    page.next_page();
    let PageView::Table(second) = page.view() else {
        panic!("expected table");
    };
    assert_eq!(second.rows.len(), 1);
    assert_eq!(second.rows[0].ordinal, 3);
    assert_eq!(second.rows[0].id, 12);
    assert_eq!(second.rows[0].cells[2], "Rp 1.500.000");
}

#[tokio::test]
async fn page_shows_error_instead_of_table() {
    let server = MockServer::start();
    let _list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tenants");
        then.status(200)
            .json_body(json!({"success": false, "message": "db unavailable"}));
    });

    let (console, _notifier) = console(server.base_url());
    let page = console.tenant_page();
    page.mount().await;

    assert_eq!(page.view(), PageView::Error("db unavailable".to_owned()));
}

#[tokio::test]
async fn tenant_page_edit_and_delete_flow() {
    let server = MockServer::start();
    let list = server.mock(|when, then| {
        when.method(GET).path("/api/v1/tenants");
        then.status(200).json_body(json!({
            "success": true,
            "data": [tenant_json(4, "Delta"), tenant_json(7, "Golf")]
        }));
    });
    let update = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/v1/tenants/4")
            .json_body(json!({
                "name": "Delta Farms",
                "email": "ops@delta.io",
                "domain": "delta.io",
                "subdomain": "delta",
                "phoneNumber": "+62 811",
                "active": true
            }));
        then.status(200).json_body(json!({"success": true}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/tenants/7");
        then.status(200).json_body(json!({"success": true}));
    });

    let (console, notifier) = console(server.base_url());
    let mut page = console.tenant_page();
    page.mount().await;

    assert!(!page.begin_edit(99));
    assert!(page.begin_edit(4));
    assert_eq!(page.modal().title(), "Edit Tenant");
    page.modal_mut().draft_mut().name = "Delta Farms".to_owned();
    page.save().await.unwrap();
    assert!(!page.modal().is_open());
    update.assert();

    page.request_delete(7);
    assert_eq!(
        page.confirmation().prompt().as_deref(),
        Some(r#"Are you sure you want to delete "Golf"? This action cannot be undone."#)
    );
    assert!(page.confirm_delete().await);
    assert!(!page.confirmation().is_open());
    delete.assert();

    // mount + one refresh per successful mutation
    list.assert_hits(3);
    assert_eq!(
        notifier.successes(),
        vec!["Tenant updated successfully!", "Tenant deleted successfully!"]
    );
}

#[tokio::test]
async fn delete_prompt_falls_back_to_label_for_unknown_id() {
    let (console, _notifier) = console("http://localhost:8080".to_owned());
    let mut page = console.tenant_page();

    page.request_delete(42);
    assert_eq!(
        page.confirmation().prompt().as_deref(),
        Some(r#"Are you sure you want to delete "tenant"? This action cannot be undone."#)
    );
    page.cancel_delete();
    assert!(!page.confirm_delete().await);
}
