// Conversão BSON <-> JSON para as respostas HTTP
//
// ObjectId sai como string hex e datas como RFC 3339, do jeito que os
// clientes web já consomem; o resto segue o relaxed extended JSON.

use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};

use super::error::AppError;

/// Renders a BSON value as plain JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::from(dt.timestamp_millis()),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// Converts a client JSON object into a document ready to be stored.
pub fn json_to_document(fields: Map<String, Value>) -> Result<Document, AppError> {
    Ok(bson::to_document(&fields)?)
}
