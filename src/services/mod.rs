pub mod cart_service;
pub mod dress_service;
pub mod order_service;
pub mod user_service;

use mongodb::bson::oid::ObjectId;

use crate::utils::AppError;

/// Parses a path identifier as an ObjectId, rejecting malformed ids with a 400.
pub fn parse_object_id(raw: &str, what: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidArgument(format!("Invalid {} ID", what)))
}
