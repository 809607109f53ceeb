pub mod carts;
pub mod dresses;
pub mod health;
pub mod orders;
pub mod swagger;
pub mod users;

#[cfg(test)]
pub mod test_support;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Corpo JSON livre enviado pelo cliente (sempre um objeto)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Fields(pub Map<String, Value>);

impl Fields {
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

/// Rejects non-object or malformed bodies with the same `{ "error": ... }` shape as the handlers.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let message = format!("Invalid JSON body: {}", err);
        log::warn!("⚠️  {}", message);
        let response = HttpResponse::BadRequest().json(serde_json::json!({ "error": message }));
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Registers every resource route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::liveness))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/dresses")
                .route("", web::get().to(dresses::list_dresses))
                .route("", web::post().to(dresses::create_dress))
                .route("/{id}", web::get().to(dresses::get_dress))
                .route("/{id}", web::put().to(dresses::update_dress))
                .route("/{id}", web::delete().to(dresses::delete_dress)),
        )
        .route("/users", web::post().to(users::register_user))
        .service(
            web::scope("/carts/{user_id}")
                .route("", web::get().to(carts::get_cart))
                .route("/items", web::post().to(carts::add_item))
                .route("/clear", web::delete().to(carts::clear_cart))
                .route("/items/{item_id}", web::delete().to(carts::remove_item)),
        )
        .service(
            web::scope("/orders/{user_id}")
                .route("/order", web::get().to(orders::get_orders))
                .route("/order", web::post().to(orders::add_order)),
        );
}
