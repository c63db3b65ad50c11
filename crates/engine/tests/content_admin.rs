use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use sitenav_api::SiteClient;
use sitenav_engine::admin::INCOMPLETE_SERVICE_MESSAGE;
use sitenav_engine::{AdminError, ContentAdmin, ImageUpload, PortfolioDraft, ServiceDraft, SubServiceDraft};

/// A multipart request as the server saw it. File parts are rendered as
/// `<file_name|content_type|byte_count>`.
#[derive(Debug, Clone)]
struct Received {
    method: Method,
    path: String,
    fields: BTreeMap<String, String>,
}

type Log = Arc<Mutex<Vec<Received>>>;

async fn record(State(log): State<Log>, method: Method, uri: Uri, mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut fields = BTreeMap::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file = field
            .file_name()
            .map(|file_name| (file_name.to_string(), field.content_type().unwrap_or_default().to_string()));
        let bytes = field.bytes().await.unwrap_or_default();
        let value = match file {
            Some((file_name, content_type)) => format!("<{file_name}|{content_type}|{}>", bytes.len()),
            None => String::from_utf8_lossy(&bytes).into_owned(),
        };
        fields.insert(name, value);
    }

    let duplicate = fields.get("slug").is_some_and(|slug| slug == "taken");
    log.lock().expect("log lock").push(Received {
        method,
        path: uri.path().to_string(),
        fields,
    });

    if duplicate {
        return (StatusCode::CONFLICT, Json(json!({ "error": "Slug already exists" })));
    }
    (StatusCode::CREATED, Json(json!({ "message": "Saved on server" })))
}

async fn remove(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    if id == "missing" {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })));
    }
    (StatusCode::OK, Json(json!({ "message": format!("Deleted {id}") })))
}

async fn find_services() -> Json<Value> {
    Json(json!([
        { "_id": "c1", "name": "Design", "slug": "design", "isActive": true },
        { "_id": "c2", "name": "Archived", "slug": null, "isActive": false }
    ]))
}

async fn admin_with_log() -> (ContentAdmin, Log) {
    let log: Log = Arc::default();
    let router = Router::new()
        .route("/services/find", get(find_services))
        .route("/services/create", post(record))
        .route("/services/{id}", axum::routing::delete(remove))
        .route("/portfolio/create", post(record))
        .route("/portfolio/{id}", put(record).delete(remove))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let address = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let client = SiteClient::new(&format!("http://{address}"), Duration::from_secs(5)).expect("client");
    (ContentAdmin::new(client, "/services/find"), log)
}

fn received(log: &Log) -> Vec<Received> {
    log.lock().expect("log lock").clone()
}

fn service_draft() -> ServiceDraft {
    ServiceDraft {
        name: "Web Development".into(),
        slug: "web-development".into(),
        description: "Sites and apps".into(),
        is_active: false,
        main_image: Some(ImageUpload::from_file("web.png", vec![7; 10])),
        sub_services: vec![
            SubServiceDraft::default(),
            SubServiceDraft {
                name: "Frontend".into(),
                slug: "frontend".into(),
                description: "UI work".into(),
                image: Some(ImageUpload::from_file("front.jpg", vec![1; 3])),
            },
            SubServiceDraft {
                name: "Backend".into(),
                slug: "backend".into(),
                description: "APIs".into(),
                image: None,
            },
        ],
    }
}

#[tokio::test]
async fn create_service_sends_fields_metadata_and_images() {
    let (admin, log) = admin_with_log().await;

    let outcome = admin.create_service(&service_draft()).await.expect("service created");
    assert_eq!(outcome.message, "Service category created successfully!");

    let requests = received(&log);
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/services/create");

    let fields = &request.fields;
    assert_eq!(fields["name"], "Web Development");
    assert_eq!(fields["isActive"], "false");
    assert_eq!(fields["mainImage"], "<web.png|image/png|10>");
    // blank rows are skipped, so the first filled row is index 0
    assert_eq!(fields["subServiceImage_0"], "<front.jpg|image/jpeg|3>");
    assert!(!fields.contains_key("subServiceImage_1"));

    let metadata: Value = serde_json::from_str(&fields["subServicesData"]).expect("metadata json");
    assert_eq!(
        metadata,
        json!([
            { "name": "Frontend", "slug": "frontend", "description": "UI work" },
            { "name": "Backend", "slug": "backend", "description": "APIs" }
        ])
    );
}

#[tokio::test]
async fn invalid_service_is_not_sent() {
    let (admin, log) = admin_with_log().await;
    let draft = ServiceDraft {
        main_image: None,
        ..service_draft()
    };

    let error = admin.create_service(&draft).await.expect_err("rejected locally");
    assert_eq!(error, AdminError::Invalid(INCOMPLETE_SERVICE_MESSAGE.into()));
    assert!(received(&log).is_empty());
}

#[tokio::test]
async fn server_rejection_surfaces_its_error_text() {
    let (admin, _log) = admin_with_log().await;
    let draft = ServiceDraft {
        slug: "taken".into(),
        ..service_draft()
    };

    let error = admin.create_service(&draft).await.expect_err("conflict");
    assert_eq!(
        error,
        AdminError::Rejected {
            status: 409,
            message: "Slug already exists".into()
        }
    );
}

#[tokio::test]
async fn portfolio_create_and_update_use_post_and_put() {
    let (admin, log) = admin_with_log().await;
    let draft = PortfolioDraft {
        category: "E-commerce".into(),
        title: "Shop".into(),
        description: "Storefront".into(),
        project_link: "https://shop.example.com".into(),
        image: Some(ImageUpload::from_file("shop.webp", vec![0; 5])),
    };

    let created = admin.save_portfolio(None, &draft).await.expect("created");
    assert_eq!(created.message, "Saved on server");

    let without_image = PortfolioDraft { image: None, ..draft };
    admin
        .save_portfolio(Some("p1"), &without_image)
        .await
        .expect("updated");

    let requests = received(&log);
    assert_eq!(requests.len(), 2);
    assert_eq!((requests[0].method.clone(), requests[0].path.as_str()), (Method::POST, "/portfolio/create"));
    assert_eq!(requests[0].fields["image"], "<shop.webp|image/webp|5>");
    assert_eq!(requests[0].fields["projectLink"], "https://shop.example.com");

    assert_eq!((requests[1].method.clone(), requests[1].path.as_str()), (Method::PUT, "/portfolio/p1"));
    assert_eq!(requests[1].fields["title"], "Shop");
    assert!(!requests[1].fields.contains_key("image"));
}

#[tokio::test]
async fn deletes_report_server_message_or_rejection() {
    let (admin, _log) = admin_with_log().await;

    assert_eq!(admin.delete_service("c1").await.expect("deleted").message, "Deleted c1");
    assert_eq!(admin.delete_portfolio("p1").await.expect("deleted").message, "Deleted p1");

    let error = admin.delete_portfolio("missing").await.expect_err("not found");
    assert_eq!(
        error,
        AdminError::Rejected {
            status: 404,
            message: "Not found".into()
        }
    );
}

#[tokio::test]
async fn list_services_includes_inactive_categories() {
    let (admin, _log) = admin_with_log().await;

    let services = admin.list_services().await.expect("listed");
    let ids: Vec<&str> = services.iter().map(|category| category.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2"]);
    assert!(!services[1].is_active);
}
