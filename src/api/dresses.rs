use actix_web::{web, HttpResponse};

use crate::api::Fields;
use crate::database::Store;
use crate::models::{DeleteAck, InsertAck, UpdateAck};
use crate::services::dress_service;
use crate::utils::AppError;

#[utoipa::path(
    get,
    path = "/dresses",
    tag = "Dresses",
    responses(
        (status = 200, description = "Every dress in the catalog, unpaginated"),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_dresses(store: web::Data<dyn Store>) -> Result<HttpResponse, AppError> {
    log::info!("👗 GET /dresses - Listing catalog");

    let dresses = dress_service::list_dresses(store.get_ref()).await?;
    log::info!("✅ Listed {} dresses", dresses.len());
    Ok(HttpResponse::Ok().json(dresses))
}

#[utoipa::path(
    get,
    path = "/dresses/{id}",
    tag = "Dresses",
    params(
        ("id" = String, Path, description = "Dress ObjectId (24 hex chars)")
    ),
    responses(
        (status = 200, description = "The dress, or null when no dress has this id"),
        (status = 400, description = "Malformed dress id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_dress(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("👗 GET /dresses/{}", id);

    let dress = dress_service::get_dress(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(dress))
}

#[utoipa::path(
    post,
    path = "/dresses",
    tag = "Dresses",
    request_body = Fields,
    responses(
        (status = 200, description = "Insert acknowledgment", body = InsertAck),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_dress(
    store: web::Data<dyn Store>,
    body: web::Json<Fields>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /dresses - Adding dress");

    let ack = dress_service::create_dress(store.get_ref(), body.into_inner().into_map()).await?;
    log::info!("✅ Dress created: {}", ack.inserted_id);
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    put,
    path = "/dresses/{id}",
    tag = "Dresses",
    params(
        ("id" = String, Path, description = "Dress ObjectId (24 hex chars)")
    ),
    request_body = Fields,
    responses(
        (
            status = 200,
            description = "Update acknowledgment (matchedCount 0 if the dress does not exist)",
            body = UpdateAck
        ),
        (status = 400, description = "Malformed dress id or empty body"),
        (status = 500, description = "Database error")
    )
)]
pub async fn update_dress(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
    body: web::Json<Fields>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🔧 PUT /dresses/{}", id);

    let ack =
        dress_service::update_dress(store.get_ref(), &id, body.into_inner().into_map()).await?;
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    delete,
    path = "/dresses/{id}",
    tag = "Dresses",
    params(
        ("id" = String, Path, description = "Dress ObjectId (24 hex chars)")
    ),
    responses(
        (
            status = 200,
            description = "Delete acknowledgment (deletedCount 0 if absent)",
            body = DeleteAck
        ),
        (status = 400, description = "Malformed dress id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn delete_dress(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /dresses/{}", id);

    let ack = dress_service::delete_dress(store.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

#[cfg(test)]
mod tests {
    use crate::api::test_support::{hex_id, test_app};
    use crate::database::memory::MemoryStore;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[actix_web::test]
    async fn create_then_fetch_round_trip() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::post()
            .uri("/dresses")
            .set_json(json!({ "name": "A" }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["acknowledged"], json!(true));
        let id = hex_id(&ack["insertedId"]);

        let req = test::TestRequest::get().uri(&format!("/dresses/{}", id)).to_request();
        let dress: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dress["_id"], json!(id));
        assert_eq!(dress["name"], json!("A"));
        assert!(dress["created_at"].is_string());
    }

    #[actix_web::test]
    async fn unknown_but_valid_id_returns_null() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::get().uri("/dresses/65f1c2a4e4b0a1b2c3d4e5f6").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, Value::Null);
    }

    #[actix_web::test]
    async fn malformed_id_is_rejected_before_touching_the_store() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(test_app(store.clone())).await;

        let req = test::TestRequest::get().uri("/dresses/not-an-id").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid dress ID" }));
        assert_eq!(store.calls(), 0);
    }

    #[actix_web::test]
    async fn list_returns_every_dress() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        for name in ["A", "B"] {
            let req = test::TestRequest::post()
                .uri("/dresses")
                .set_json(json!({ "name": name }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/dresses").to_request();
        let dresses: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = dresses.iter().map(|d| d["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[actix_web::test]
    async fn update_merges_fields_shallowly() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::post()
            .uri("/dresses")
            .set_json(json!({ "name": "A", "price": 80, "colors": ["red"] }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let id = hex_id(&ack["insertedId"]);

        let req = test::TestRequest::put()
            .uri(&format!("/dresses/{}", id))
            .set_json(json!({ "price": 95, "colors": ["blue", "green"] }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["matchedCount"], json!(1));
        assert_eq!(ack["modifiedCount"], json!(1));

        let req = test::TestRequest::get().uri(&format!("/dresses/{}", id)).to_request();
        let dress: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dress["name"], json!("A"));
        assert_eq!(dress["price"], json!(95));
        assert_eq!(dress["colors"], json!(["blue", "green"]));
    }

    #[actix_web::test]
    async fn update_of_missing_dress_matches_nothing() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::put()
            .uri("/dresses/65f1c2a4e4b0a1b2c3d4e5f6")
            .set_json(json!({ "price": 10 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let ack: Value = test::read_body_json(resp).await;
        assert_eq!(ack["matchedCount"], json!(0));
    }

    #[actix_web::test]
    async fn update_and_delete_validate_the_id() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::put()
            .uri("/dresses/xyz")
            .set_json(json!({ "price": 10 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::delete().uri("/dresses/xyz").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn delete_removes_and_is_a_no_op_when_absent() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::post()
            .uri("/dresses")
            .set_json(json!({ "name": "A" }))
            .to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/dresses/{}", hex_id(&ack["insertedId"]));

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack, json!({ "acknowledged": true, "deletedCount": 1 }));

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let ack: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(ack["deletedCount"], json!(0));

        let req = test::TestRequest::get().uri(&uri).to_request();
        let dress: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(dress, Value::Null);
    }

    #[actix_web::test]
    async fn non_object_body_is_a_bad_request() {
        let app = test::init_service(test_app(Arc::new(MemoryStore::new()))).await;

        let req = test::TestRequest::post()
            .uri("/dresses")
            .set_json(json!(["not", "an", "object"]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }
}
