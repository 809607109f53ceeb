// ==================== CARTS ====================
// Um documento por usuário na collection "carts": { userId, items: [...] }

use mongodb::bson::DateTime;
use serde_json::{Map, Value};

use crate::database::Store;
use crate::models::{new_entry, sort_newest_first, DeleteAck, Ledger, UpdateAck};
use crate::services::parse_object_id;
use crate::utils::{document_to_json, json_to_document, AppError};

/// The user's cart with items newest first, or `None` if there is no cart.
pub async fn get_cart(store: &dyn Store, user_id: &str) -> Result<Option<Value>, AppError> {
    let Some(mut cart) = store.find_ledger(Ledger::Cart, user_id).await? else {
        return Ok(None);
    };
    sort_newest_first(Ledger::Cart, &mut cart);
    Ok(Some(document_to_json(cart)))
}

pub async fn add_item(
    store: &dyn Store,
    user_id: &str,
    fields: Map<String, Value>,
) -> Result<UpdateAck, AppError> {
    let item = new_entry(json_to_document(fields)?, DateTime::now());
    store.push_entry(Ledger::Cart, user_id, item).await
}

pub async fn remove_item(
    store: &dyn Store,
    user_id: &str,
    item_id: &str,
) -> Result<UpdateAck, AppError> {
    let item_id = parse_object_id(item_id, "item")?;
    store.pull_entry(Ledger::Cart, user_id, item_id).await
}

/// Drops the whole cart document; the next `add_item` creates a new one.
pub async fn clear_cart(store: &dyn Store, user_id: &str) -> Result<DeleteAck, AppError> {
    store.delete_ledger(Ledger::Cart, user_id).await
}
