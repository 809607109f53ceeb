use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Perfect Fit Server API",
        version = "1.0.0",
        description = "Catalog, user registration, shopping cart and order history API for the \
            Perfect Fit dress store.\n\n**Conventions:**\n\
            - Bodies are free-form JSON objects; the server only adds `_id` and `created_at` \
            where noted\n\
            - Lookups by key answer `null` (200) when nothing is stored\n\
            - Writes answer with the MongoDB acknowledgment (`insertedId`, `matchedCount`, \
            `deletedCount`, ...)"
    ),
    paths(
        // Health
        crate::api::health::liveness,
        crate::api::health::health_check,

        // Dresses
        crate::api::dresses::list_dresses,
        crate::api::dresses::get_dress,
        crate::api::dresses::create_dress,
        crate::api::dresses::update_dress,
        crate::api::dresses::delete_dress,

        // Users
        crate::api::users::register_user,

        // Carts
        crate::api::carts::get_cart,
        crate::api::carts::add_item,
        crate::api::carts::remove_item,
        crate::api::carts::clear_cart,

        // Orders
        crate::api::orders::get_orders,
        crate::api::orders::add_order,
    ),
    components(
        schemas(
            crate::api::Fields,
            crate::api::health::HealthResponse,
            crate::models::InsertAck,
            crate::models::UpdateAck,
            crate::models::DeleteAck,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and health endpoints."),
        (name = "Dresses", description = "Dress catalog CRUD."),
        (
            name = "Users",
            description = "User registration keyed by a client-chosen id (first write wins)."
        ),
        (
            name = "Carts",
            description = "One cart per user; items are appended and listed newest first."
        ),
        (name = "Orders", description = "Append-only order history per user, listed newest first."),
    )
)]
pub struct ApiDoc;
