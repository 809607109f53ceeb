use actix_web::{web, HttpResponse};

use crate::api::Fields;
use crate::database::Store;
use crate::models::InsertAck;
use crate::services::user_service::{self, RegisterUserResponse};
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(
        content = Fields,
        description = "User fields; `_id` is required and chosen by the client"
    ),
    responses(
        (
            status = 200,
            description = "The already registered user, or the insert acknowledgment",
            body = InsertAck
        ),
        (status = 400, description = "Missing `_id` or body is not a JSON object"),
        (status = 500, description = "Database error")
    )
)]
pub async fn register_user(
    store: web::Data<dyn Store>,
    body: web::Json<Fields>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /users - Registering user");

    let response =
        user_service::register_user(store.get_ref(), body.into_inner().into_map()).await?;
    match &response {
        RegisterUserResponse::Existing(_) => {
            log::info!("ℹ️  User already registered, returning existing record")
        }
        RegisterUserResponse::Inserted(ack) => {
            log::info!("✅ User registered: {}", ack.inserted_id)
        }
    }
    Ok(HttpResponse::Ok().json(response))
}
