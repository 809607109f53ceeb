// ==================== DRESS CATALOG ====================

use mongodb::bson::DateTime;
use serde_json::{Map, Value};

use crate::database::Store;
use crate::models::{DeleteAck, InsertAck, UpdateAck, CREATED_AT_FIELD};
use crate::services::parse_object_id;
use crate::utils::{document_to_json, json_to_document, AppError};

pub async fn list_dresses(store: &dyn Store) -> Result<Vec<Value>, AppError> {
    let dresses = store.list_dresses().await?;
    Ok(dresses.into_iter().map(document_to_json).collect())
}

/// Absent dresses are `Ok(None)`, never an error.
pub async fn get_dress(store: &dyn Store, id: &str) -> Result<Option<Value>, AppError> {
    let id = parse_object_id(id, "dress")?;
    Ok(store.find_dress(id).await?.map(document_to_json))
}

pub async fn create_dress(
    store: &dyn Store,
    fields: Map<String, Value>,
) -> Result<InsertAck, AppError> {
    let mut dress = json_to_document(fields)?;
    dress.insert(CREATED_AT_FIELD, DateTime::now());
    store.insert_dress(dress).await
}

/// Merges every top-level field of the body into the dress.
pub async fn update_dress(
    store: &dyn Store,
    id: &str,
    fields: Map<String, Value>,
) -> Result<UpdateAck, AppError> {
    let id = parse_object_id(id, "dress")?;
    let mut fields = json_to_document(fields)?;

    // _id é imutável no MongoDB
    fields.remove("_id");
    if fields.is_empty() {
        return Err(AppError::InvalidArgument("No fields to update".to_string()));
    }

    store.update_dress(id, fields).await
}

pub async fn delete_dress(store: &dyn Store, id: &str) -> Result<DeleteAck, AppError> {
    let id = parse_object_id(id, "dress")?;
    store.delete_dress(id).await
}
