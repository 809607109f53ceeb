use actix_web::{web, HttpResponse};

use crate::api::Fields;
use crate::database::Store;
use crate::models::UpdateAck;
use crate::services::order_service;
use crate::utils::AppError;

#[utoipa::path(
    get,
    path = "/orders/{user_id}/order",
    tag = "Orders",
    params(
        ("user_id" = String, Path, description = "Owner of the order history")
    ),
    responses(
        (
            status = 200,
            description = "Order history with orders newest first, or null when the user has none"
        ),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_orders(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("📦 GET /orders/{}/order", user_id);

    let orders = order_service::get_orders(store.get_ref(), &user_id).await?;
    Ok(HttpResponse::Ok().json(orders))
}

#[utoipa::path(
    post,
    path = "/orders/{user_id}/order",
    tag = "Orders",
    params(
        ("user_id" = String, Path, description = "Owner of the order history")
    ),
    request_body = Fields,
    responses(
        (
            status = 200,
            description = "Update acknowledgment; upsertedId is set for the user's first order",
            body = UpdateAck
        ),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Database error")
    )
)]
pub async fn add_order(
    store: web::Data<dyn Store>,
    path: web::Path<String>,
    body: web::Json<Fields>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    log::info!("🧾 POST /orders/{}/order", user_id);

    let ack =
        order_service::add_order(store.get_ref(), &user_id, body.into_inner().into_map()).await?;
    log::info!("✅ Order recorded for user {}", user_id);
    Ok(HttpResponse::Ok().json(ack))
}
