use actix_web::{web, HttpResponse};

use crate::api::Fields;
use crate::database::Store;
use crate::models::{DeleteAck, UpdateAck};
use crate::services::cart_service;
use crate::utils::AppError;

#[utoipa::path(
    get,
    path = "/carts/{user_id}",
    tag = "Carts",
    params(
        ("user_id" = String, Path, description = "Owner of the cart")
    ),
    responses(
        (
            status = 200,
            description = "The cart with items newest first, or null when the user has no cart"
        ),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_cart(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🛒 GET /carts/{}", user_id);

    let cart = cart_service::get_cart(store.get_ref(), &user_id).await?;
    Ok(HttpResponse::Ok().json(cart))
}

#[utoipa::path(
    post,
    path = "/carts/{user_id}/items",
    tag = "Carts",
    params(
        ("user_id" = String, Path, description = "Owner of the cart")
    ),
    request_body = Fields,
    responses(
        (
            status = 200,
            description = "Update acknowledgment; upsertedId is set when the cart was created",
            body = UpdateAck
        ),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Database error")
    )
)]
pub async fn add_item(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
    body: web::Json<Fields>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("➕ POST /carts/{}/items", user_id);

    let ack =
        cart_service::add_item(store.get_ref(), &user_id, body.into_inner().into_map()).await?;
    if ack.upserted_count > 0 {
        log::info!("✅ Cart created for user {}", user_id);
    }
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    delete,
    path = "/carts/{user_id}/items/{item_id}",
    tag = "Carts",
    params(
        ("user_id" = String, Path, description = "Owner of the cart"),
        ("item_id" = String, Path, description = "Cart item ObjectId")
    ),
    responses(
        (
            status = 200,
            description = "Update acknowledgment (modifiedCount 0 if the item was not in the cart)",
            body = UpdateAck
        ),
        (status = 400, description = "Malformed item id"),
        (status = 500, description = "Database error")
    )
)]
pub async fn remove_item(
    store: web::Data<dyn Store>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, item_id) = path.into_inner();
    log::info!("🗑️  DELETE /carts/{}/items/{}", user_id, item_id);

    let ack = cart_service::remove_item(store.get_ref(), &user_id, &item_id).await?;
    Ok(HttpResponse::Ok().json(ack))
}

#[utoipa::path(
    delete,
    path = "/carts/{user_id}/clear",
    tag = "Carts",
    params(
        ("user_id" = String, Path, description = "Owner of the cart")
    ),
    responses(
        (
            status = 200,
            description = "Delete acknowledgment for the whole cart document",
            body = DeleteAck
        ),
        (status = 500, description = "Database error")
    )
)]
pub async fn clear_cart(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🧹 DELETE /carts/{}/clear", user_id);

    let ack = cart_service::clear_cart(store.get_ref(), &user_id).await?;
    Ok(HttpResponse::Ok().json(ack))
}
