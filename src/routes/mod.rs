pub mod products;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::health::health_check;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(products::routes())
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Product;
    use crate::seed::default_seed;
    use crate::store::ProductStore;
    use axum::body::{to_bytes, Body};
    use http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(store: ProductStore) -> Router {
        create_router(AppState::new(store))
    }

    fn seeded() -> ProductStore {
        ProductStore::new(default_seed().unwrap())
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn with_json(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.into()))
            .unwrap()
    }

    #[tokio::test]
    async fn lists_seed_products_in_order() {
        let (status, body) = send(app(seeded()), get("/products")).await;
        assert_eq!(status, StatusCode::OK);

        let ids: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["productId"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(body[0]["pricePerUnit"], json!("497.45"));
        assert_eq!(body[0]["quantityOnHand"], json!(9703));
    }

    #[tokio::test]
    async fn create_assigns_next_id_and_ignores_client_id() {
        let store = seeded();
        let req = with_json(
            "POST",
            "/products",
            json!({
                "productId": 42,
                "manufacturer": "X",
                "sku": "s",
                "upc": "u",
                "pricePerUnit": "1.00",
                "quantityOnHand": 5,
                "productName": "n"
            })
            .to_string(),
        );

        let (status, body) = send(app(store.clone()), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["productId"], json!(4));
        assert_eq!(body["pricePerUnit"], json!("1.00"));

        let (status, body) = send(app(store), get("/products/4")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["productName"], json!("n"));
    }

    #[tokio::test]
    async fn create_with_malformed_body_is_bad_request() {
        let store = seeded();
        let (status, body) = send(app(store.clone()), with_json("POST", "/products", "{ nope")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("malformed_input"));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn create_without_content_type_is_bad_request() {
        let req = Request::post("/products").body(Body::from("{}")).unwrap();
        let (status, _) = send(app(seeded()), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_negative_quantity_is_bad_request() {
        let req = with_json(
            "POST",
            "/products",
            r#"{"manufacturer":"X","sku":"s","upc":"u","pricePerUnit":"1.00",
                "quantityOnHand":-3,"productName":"n"}"#,
        );
        let (status, _) = send(app(seeded()), req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_past_the_largest_id_is_a_server_error() {
        let top = Product {
            product_id: i64::MAX,
            manufacturer: "M".into(),
            sku: "S".into(),
            upc: "U".into(),
            price_per_unit: "0.01".into(),
            quantity_on_hand: 0,
            product_name: "last".into(),
        };
        let store = ProductStore::new(vec![top]);
        let req = with_json(
            "POST",
            "/products",
            r#"{"manufacturer":"X","sku":"s","upc":"u","pricePerUnit":"1.00",
                "quantityOnHand":1,"productName":"n"}"#,
        );

        let (status, body) = send(app(store.clone()), req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], json!("internal_error"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn get_with_non_integer_id_is_bad_request() {
        let (status, body) = send(app(seeded()), get("/products/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("malformed_input"));
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let (status, body) = send(app(seeded()), get("/products/9999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], json!("not_found"));
    }

    #[tokio::test]
    async fn put_replaces_product_in_place() {
        let store = seeded();
        let replacement = Product {
            product_id: 2,
            manufacturer: "Hessel".into(),
            sku: "new-sku".into(),
            upc: "740979000001".into(),
            price_per_unit: "300.00".into(),
            quantity_on_hand: 1,
            product_name: "knee warmers".into(),
        };
        let req = with_json("PUT", "/products/2", serde_json::to_string(&replacement).unwrap());

        let (status, body) = send(app(store.clone()), req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pricePerUnit"], json!("300.00"));

        let listed = store.list().await;
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[1], replacement);
    }

    #[tokio::test]
    async fn put_with_mismatched_id_is_not_found_and_changes_nothing() {
        let store = seeded();
        let before = store.list().await;
        let mut body = serde_json::to_value(&before[2]).unwrap();
        body["productName"] = json!("hijacked");

        let (status, res) = send(app(store.clone()), with_json("PUT", "/products/1", body.to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(res["code"], json!("id_mismatch"));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn put_unknown_id_is_not_found() {
        let body = json!({
            "productId": 50,
            "manufacturer": "X",
            "sku": "s",
            "upc": "u",
            "pricePerUnit": "1.00",
            "quantityOnHand": 5,
            "productName": "n"
        });
        let (status, _) = send(app(seeded()), with_json("PUT", "/products/50", body.to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_with_malformed_body_is_bad_request() {
        let (status, _) = send(app(seeded()), with_json("PUT", "/products/1", r#"{"productId":1}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_is_not_routed() {
        let req = Request::delete("/products/1").body(Body::empty()).unwrap();
        let res = app(seeded()).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn health_reports_product_count() {
        let (status, body) = send(app(seeded()), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok", "products": 3}));
    }
}
