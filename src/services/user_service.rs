use serde::Serialize;
use serde_json::{Map, Value};

use crate::database::{Store, UserWrite};
use crate::models::InsertAck;
use crate::utils::{document_to_json, json_to_document, AppError};

/// Either the already-registered user or the acknowledgment of a new insert.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RegisterUserResponse {
    Existing(Value),
    Inserted(InsertAck),
}

/// Registers a user keyed by the client-supplied `_id`; the first write wins.
pub async fn register_user(
    store: &dyn Store,
    fields: Map<String, Value>,
) -> Result<RegisterUserResponse, AppError> {
    let user = json_to_document(fields)?;
    let user_id = match user.get("_id") {
        Some(id) if !matches!(id, mongodb::bson::Bson::Null) => id.clone(),
        _ => return Err(AppError::InvalidArgument("Missing user ID".to_string())),
    };

    Ok(match store.register_user(user_id, user).await? {
        UserWrite::Existing(existing) => RegisterUserResponse::Existing(document_to_json(existing)),
        UserWrite::Inserted(ack) => RegisterUserResponse::Inserted(ack),
    })
}
