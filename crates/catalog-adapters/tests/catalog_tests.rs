//! End-to-end behaviour of a wired catalog, driven through the controller
//! and the router.

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

use catalog_adapters::{
    Catalog, ManualClock, ProductInput, RecordStore, SequentialIdGenerator,
    controller::{Method, StatusCode},
    seed::LAST_SAMPLE_ID,
};

fn catalog() -> Catalog {
    Catalog::builder()
        .clock(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        ))
        .id_generator(SequentialIdGenerator::starting_at(LAST_SAMPLE_ID + 1))
        .build()
        .unwrap()
}

fn input(name: &str, price: f64, stock: i64) -> ProductInput {
    ProductInput {
        name: Some(name.into()),
        description: Some(String::new()),
        price: Some(price),
        stock: Some(stock),
    }
}

// ── controller ────────────────────────────────────────────────────────────────

#[test]
fn create_then_get_returns_same_product() {
    let catalog = catalog();
    let created = catalog.controller().create(input("Cable", 5.0, 3));
    assert_eq!(created.status, StatusCode::CREATED);

    let created = created.body.data.unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let found = catalog.controller().get_by_id(created.id.as_str());
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body.data.unwrap(), created);
}

#[test]
fn list_size_tracks_creates_and_deletes() {
    let catalog = Catalog::builder().seed(false).build().unwrap();
    let controller = catalog.controller();

    let ids: Vec<_> = (0..5)
        .map(|i| {
            controller
                .create(input(&format!("Item {i}"), 1.0, i))
                .body
                .data
                .unwrap()
                .id
        })
        .collect();

    for id in &ids[..2] {
        assert_eq!(controller.remove(id.as_str()).status, StatusCode::OK);
    }

    assert_eq!(controller.list().body.data.unwrap().len(), 3);
}

#[test]
fn empty_update_only_moves_updated_at() {
    let catalog = catalog();
    let before = catalog.controller().get_by_id("1").body.data.unwrap();

    let after = catalog
        .controller()
        .update("1", ProductInput::default())
        .body
        .data
        .unwrap();

    assert_eq!(after.name, before.name);
    assert_eq!(after.description, before.description);
    assert_eq!(after.price, before.price);
    assert_eq!(after.stock, before.stock);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);
}

#[test]
fn stock_update_on_sample_product() {
    let catalog = catalog();
    let response = catalog.controller().update(
        "1",
        ProductInput {
            stock: Some(5),
            ..Default::default()
        },
    );

    assert_eq!(response.status, StatusCode::OK);
    let product = response.body.data.unwrap();
    assert_eq!(product.stock, 5);
    assert_eq!(product.name, "Laptop HP");
    assert!(product.updated_at > product.created_at);
}

#[test]
fn rejected_writes_leave_store_untouched() {
    let catalog = catalog();
    let before = catalog.store().get_all().unwrap().len();

    let response = catalog.controller().create(input("Broken", -1.0, 1));
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(
        response
            .body
            .error
            .unwrap()
            .contains("Price cannot be negative")
    );

    let response = catalog.controller().update(
        "2",
        ProductInput {
            stock: Some(-3),
            ..Default::default()
        },
    );
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = catalog.controller().update(
        "2",
        ProductInput {
            name: Some("  ".into()),
            ..Default::default()
        },
    );
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body.error.as_deref(), Some("Name cannot be empty"));

    assert_eq!(catalog.store().get_all().unwrap().len(), before);
    let mouse = catalog.controller().get_by_id("2").body.data.unwrap();
    assert_eq!(mouse.stock, 50);
    assert_eq!(mouse.name, "Mouse Logitech");
}

#[test]
fn missing_product_is_404_everywhere() {
    let catalog = catalog();
    let controller = catalog.controller();

    assert_eq!(controller.get_by_id("999").status, StatusCode::NOT_FOUND);
    assert_eq!(
        controller.update("999", ProductInput::default()).status,
        StatusCode::NOT_FOUND
    );

    let removed = controller.remove("999");
    assert_eq!(removed.status, StatusCode::NOT_FOUND);
    assert_eq!(removed.body.error.as_deref(), Some("Product not found"));
}

// ── router ────────────────────────────────────────────────────────────────────

fn body(response: &catalog_adapters::ControllerResponse<Value>) -> Value {
    serde_json::to_value(&response.body).unwrap()
}

#[test]
fn router_create_serializes_camel_case() {
    let catalog = catalog();
    let payload = json!({
        "name": "Mouse",
        "description": "",
        "price": 29.99,
        "stock": 50
    })
    .to_string();

    let response = catalog
        .router()
        .handle(&Method::POST, "/api/products", Some(&payload));

    assert_eq!(response.status, StatusCode::CREATED);
    let body = body(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "4");
    assert_eq!(body["data"]["createdAt"], "2024-01-01T09:00:00.001Z");
    assert!(body["data"].get("created_at").is_none());
}

#[test]
fn router_delete_reports_message_only() {
    let catalog = catalog();
    let response = catalog.router().handle(&Method::DELETE, "/products/3", None);

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        body(&response),
        json!({"success": true, "message": "Product deleted successfully"})
    );
}

#[test]
fn router_rejections() {
    let catalog = catalog();
    let router = catalog.router();

    let cases = [
        (Method::GET, "/customers", None, StatusCode::NOT_FOUND, "Route not found"),
        (
            Method::PATCH,
            "/products/1",
            None,
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed",
        ),
        (
            Method::POST,
            "/products",
            Some("{not json"),
            StatusCode::BAD_REQUEST,
            "Invalid request body",
        ),
    ];

    for (method, path, payload, status, error) in cases {
        let response = router.handle(&method, path, payload);
        assert_eq!(response.status, status, "{method} {path}");
        assert_eq!(body(&response), json!({"success": false, "error": error}));
    }
}

#[test]
fn separate_catalogs_are_isolated() {
    let first = catalog();
    let second = catalog();

    first.router().handle(&Method::DELETE, "/products/1", None);

    assert_eq!(
        first.router().handle(&Method::GET, "/products/1", None).status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        second.router().handle(&Method::GET, "/products/1", None).status,
        StatusCode::OK
    );
}
