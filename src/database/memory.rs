// Store em memória usado pelos testes dos handlers

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use super::store::{Store, UserWrite};
use crate::models::{DeleteAck, InsertAck, Ledger, UpdateAck, USER_ID_FIELD};
use crate::utils::{bson_to_json, AppError};

#[derive(Default)]
pub struct MemoryStore {
    dresses: Mutex<Vec<Document>>,
    users: Mutex<Vec<Document>>,
    ledgers: Mutex<HashMap<(Ledger, String), Document>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of store commands issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn has_id(doc: &Document, id: &Bson) -> bool {
    doc.get("_id") == Some(id)
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_dresses(&self) -> Result<Vec<Document>, AppError> {
        self.record();
        Ok(self.dresses.lock().await.clone())
    }

    async fn find_dress(&self, id: ObjectId) -> Result<Option<Document>, AppError> {
        self.record();
        let id = Bson::ObjectId(id);
        Ok(self.dresses.lock().await.iter().find(|d| has_id(d, &id)).cloned())
    }

    async fn insert_dress(&self, mut dress: Document) -> Result<InsertAck, AppError> {
        self.record();
        if !dress.contains_key("_id") {
            let mut with_id = doc! { "_id": ObjectId::new() };
            for (key, value) in dress {
                with_id.insert(key, value);
            }
            dress = with_id;
        }
        let id = dress.get("_id").cloned().unwrap_or(Bson::Null);
        self.dresses.lock().await.push(dress);
        Ok(InsertAck::new(bson_to_json(id)))
    }

    async fn update_dress(&self, id: ObjectId, fields: Document) -> Result<UpdateAck, AppError> {
        self.record();
        let id = Bson::ObjectId(id);
        let mut dresses = self.dresses.lock().await;
        let Some(dress) = dresses.iter_mut().find(|d| has_id(d, &id)) else {
            return Ok(UpdateAck::matched(0, 0));
        };

        let before = dress.clone();
        for (key, value) in fields {
            dress.insert(key, value);
        }
        let modified = u64::from(*dress != before);
        Ok(UpdateAck::matched(1, modified))
    }

    async fn delete_dress(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        self.record();
        let id = Bson::ObjectId(id);
        let mut dresses = self.dresses.lock().await;
        let before = dresses.len();
        if let Some(pos) = dresses.iter().position(|d| has_id(d, &id)) {
            dresses.remove(pos);
        }
        Ok(DeleteAck::new((before - dresses.len()) as u64))
    }

    async fn register_user(&self, user_id: Bson, user: Document) -> Result<UserWrite, AppError> {
        self.record();
        let mut users = self.users.lock().await;
        if let Some(existing) = users.iter().find(|u| has_id(u, &user_id)) {
            return Ok(UserWrite::Existing(existing.clone()));
        }
        users.push(user);
        Ok(UserWrite::Inserted(InsertAck::new(bson_to_json(user_id))))
    }

    async fn find_ledger(
        &self,
        ledger: Ledger,
        user_id: &str,
    ) -> Result<Option<Document>, AppError> {
        self.record();
        let key = (ledger, user_id.to_string());
        Ok(self.ledgers.lock().await.get(&key).cloned())
    }

    async fn push_entry(
        &self,
        ledger: Ledger,
        user_id: &str,
        entry: Document,
    ) -> Result<UpdateAck, AppError> {
        self.record();
        let key = (ledger, user_id.to_string());
        let mut ledgers = self.ledgers.lock().await;

        if let Some(existing) = ledgers.get_mut(&key) {
            match existing.get_array_mut(ledger.entries_field()) {
                Ok(entries) => entries.push(Bson::Document(entry)),
                Err(_) => {
                    existing.insert(ledger.entries_field(), vec![Bson::Document(entry)]);
                }
            }
            return Ok(UpdateAck::matched(1, 1));
        }

        let id = ObjectId::new();
        ledgers.insert(
            key,
            doc! {
                "_id": id,
                USER_ID_FIELD: user_id,
                ledger.entries_field(): [entry],
            },
        );
        Ok(UpdateAck::upserted(bson_to_json(Bson::ObjectId(id))))
    }

    async fn pull_entry(
        &self,
        ledger: Ledger,
        user_id: &str,
        entry_id: ObjectId,
    ) -> Result<UpdateAck, AppError> {
        self.record();
        let key = (ledger, user_id.to_string());
        let mut ledgers = self.ledgers.lock().await;
        let Some(existing) = ledgers.get_mut(&key) else {
            return Ok(UpdateAck::matched(0, 0));
        };

        let entry_id = Bson::ObjectId(entry_id);
        let Ok(entries) = existing.get_array_mut(ledger.entries_field()) else {
            return Ok(UpdateAck::matched(1, 0));
        };
        let before = entries.len();
        entries.retain(|e| e.as_document().map_or(true, |d| !has_id(d, &entry_id)));
        Ok(UpdateAck::matched(1, u64::from(entries.len() != before)))
    }

    async fn delete_ledger(&self, ledger: Ledger, user_id: &str) -> Result<DeleteAck, AppError> {
        self.record();
        let key = (ledger, user_id.to_string());
        let removed = self.ledgers.lock().await.remove(&key);
        Ok(DeleteAck::new(u64::from(removed.is_some())))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
