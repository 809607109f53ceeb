use mongodb::bson::{doc, oid::ObjectId, Bson, DateTime, Document};

/// Documento por usuário com uma lista de entradas (carrinho ou pedidos).
///
/// Both kinds are stored as `{ userId, <entries_field>: [entry, ...] }`, one
/// document per user, and share the same append / pull / sort-on-read rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ledger {
    Cart,
    Orders,
}

pub const USER_ID_FIELD: &str = "userId";
pub const CREATED_AT_FIELD: &str = "created_at";

impl Ledger {
    pub fn collection(self) -> &'static str {
        match self {
            Ledger::Cart => "carts",
            Ledger::Orders => "orders",
        }
    }

    pub fn entries_field(self) -> &'static str {
        match self {
            Ledger::Cart => "items",
            Ledger::Orders => "orders",
        }
    }
}

/// Stamps a client-submitted entry with a fresh `_id` and `created_at`.
///
/// The server-assigned values win over anything the client sent for those keys.
pub fn new_entry(mut fields: Document, now: DateTime) -> Document {
    let mut entry = doc! { "_id": ObjectId::new() };
    fields.remove("_id");
    fields.remove(CREATED_AT_FIELD);
    for (key, value) in fields {
        entry.insert(key, value);
    }
    entry.insert(CREATED_AT_FIELD, now);
    entry
}

/// Orders the entries array of a ledger document newest first.
///
/// Entries without a `created_at` date go last, keeping their stored order.
pub fn sort_newest_first(ledger: Ledger, doc: &mut Document) {
    if let Ok(entries) = doc.get_array_mut(ledger.entries_field()) {
        entries.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    }
}

fn created_at(entry: &Bson) -> Option<DateTime> {
    entry
        .as_document()
        .and_then(|d| d.get_datetime(CREATED_AT_FIELD).ok())
        .copied()
}
