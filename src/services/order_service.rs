// ==================== ORDERS ====================
// Histórico de pedidos: { userId, orders: [...] }, somente append

use mongodb::bson::DateTime;
use serde_json::{Map, Value};

use crate::database::Store;
use crate::models::{new_entry, sort_newest_first, Ledger, UpdateAck};
use crate::utils::{document_to_json, json_to_document, AppError};

pub async fn get_orders(store: &dyn Store, user_id: &str) -> Result<Option<Value>, AppError> {
    let Some(mut orders) = store.find_ledger(Ledger::Orders, user_id).await? else {
        return Ok(None);
    };
    sort_newest_first(Ledger::Orders, &mut orders);
    Ok(Some(document_to_json(orders)))
}

pub async fn add_order(
    store: &dyn Store,
    user_id: &str,
    fields: Map<String, Value>,
) -> Result<UpdateAck, AppError> {
    let order = new_entry(json_to_document(fields)?, DateTime::now());
    store.push_entry(Ledger::Orders, user_id, order).await
}
