use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::models::{DeleteAck, InsertAck, Ledger, UpdateAck};
use crate::utils::AppError;

/// Result of registering a user whose `_id` may already exist.
#[derive(Debug, Clone, PartialEq)]
pub enum UserWrite {
    /// A user with that `_id` was already stored; it is left untouched.
    Existing(Document),
    Inserted(InsertAck),
}

/// Document-store operations used by the resource handlers.
///
/// Every method is a single store command. Create-if-absent paths
/// (`register_user`, `push_entry`) must be atomic on the store side.
#[async_trait]
pub trait Store: Send + Sync {
    async fn list_dresses(&self) -> Result<Vec<Document>, AppError>;

    async fn find_dress(&self, id: ObjectId) -> Result<Option<Document>, AppError>;

    async fn insert_dress(&self, dress: Document) -> Result<InsertAck, AppError>;

    /// Shallow `$set` of `fields` on the dress; no existence check.
    async fn update_dress(&self, id: ObjectId, fields: Document) -> Result<UpdateAck, AppError>;

    async fn delete_dress(&self, id: ObjectId) -> Result<DeleteAck, AppError>;

    /// Inserts `user` unless a user with the same `_id` exists (first write wins).
    async fn register_user(&self, user_id: Bson, user: Document) -> Result<UserWrite, AppError>;

    async fn find_ledger(
        &self,
        ledger: Ledger,
        user_id: &str,
    ) -> Result<Option<Document>, AppError>;

    /// Appends `entry`, creating the user's document when it does not exist yet.
    async fn push_entry(
        &self,
        ledger: Ledger,
        user_id: &str,
        entry: Document,
    ) -> Result<UpdateAck, AppError>;

    async fn pull_entry(
        &self,
        ledger: Ledger,
        user_id: &str,
        entry_id: ObjectId,
    ) -> Result<UpdateAck, AppError>;

    async fn delete_ledger(&self, ledger: Ledger, user_id: &str) -> Result<DeleteAck, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
