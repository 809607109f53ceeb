pub mod store;

#[cfg(test)]
pub mod memory;

pub use store::{Store, UserWrite};

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::options::{
    ClientOptions, FindOneAndUpdateOptions, IndexOptions, ReturnDocument, UpdateOptions,
};
use mongodb::results::UpdateResult;
use mongodb::{Client, Collection, Database, IndexModel};
use std::error::Error;

use crate::models::{DeleteAck, InsertAck, Ledger, UpdateAck, USER_ID_FIELD};
use crate::utils::{bson_to_json, AppError};

const DRESSES: &str = "dresses";
const USERS: &str = "users";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Pool compartilhado por todos os workers
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));
        client_options.app_name = Some("perfect-fit-server".to_string());

        let client = Client::with_options(client_options)?;

        client.database("admin").run_command(doc! { "ping": 1 }).await?;
        log::info!("🏓 Pinged your deployment. Successfully connected to MongoDB!");

        let db = client.database(db_name);
        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Unique `userId` indexes make the cart/order upserts race-free.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        for ledger in [Ledger::Cart, Ledger::Orders] {
            let index = IndexModel::builder()
                .keys(doc! { USER_ID_FIELD: 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build();

            match self.documents(ledger.collection()).create_index(index).await {
                Ok(_) => log::info!(
                    "   ✅ Index created: {}({})",
                    ledger.collection(),
                    USER_ID_FIELD
                ),
                Err(e) => log::warn!(
                    "   ⚠️  Could not create unique index on {}({}): {}",
                    ledger.collection(),
                    USER_ID_FIELD,
                    e
                ),
            }
        }

        log::info!("✅ Database indexes ready");
    }

    fn documents(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }

    /// Closes the connection pool once the HTTP server has stopped.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        log::info!("🔌 MongoDB connection closed");
    }
}

fn update_ack(result: UpdateResult) -> UpdateAck {
    match result.upserted_id {
        Some(id) => UpdateAck::upserted(bson_to_json(id)),
        None => UpdateAck::matched(result.matched_count, result.modified_count),
    }
}

#[async_trait]
impl Store for MongoDB {
    async fn list_dresses(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self.documents(DRESSES).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_dress(&self, id: ObjectId) -> Result<Option<Document>, AppError> {
        Ok(self.documents(DRESSES).find_one(doc! { "_id": id }).await?)
    }

    async fn insert_dress(&self, dress: Document) -> Result<InsertAck, AppError> {
        let result = self.documents(DRESSES).insert_one(dress).await?;
        Ok(InsertAck::new(bson_to_json(result.inserted_id)))
    }

    async fn update_dress(&self, id: ObjectId, fields: Document) -> Result<UpdateAck, AppError> {
        let result = self
            .documents(DRESSES)
            .update_one(doc! { "_id": id }, doc! { "$set": fields })
            .await?;
        Ok(update_ack(result))
    }

    async fn delete_dress(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let result = self.documents(DRESSES).delete_one(doc! { "_id": id }).await?;
        Ok(DeleteAck::new(result.deleted_count))
    }

    async fn register_user(&self, user_id: Bson, user: Document) -> Result<UserWrite, AppError> {
        // Um único comando: devolve o documento anterior se já existia
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::Before)
            .build();

        let previous = self
            .documents(USERS)
            .find_one_and_update(doc! { "_id": user_id.clone() }, doc! { "$setOnInsert": user })
            .with_options(options)
            .await?;

        Ok(match previous {
            Some(existing) => UserWrite::Existing(existing),
            None => UserWrite::Inserted(InsertAck::new(bson_to_json(user_id))),
        })
    }

    async fn find_ledger(
        &self,
        ledger: Ledger,
        user_id: &str,
    ) -> Result<Option<Document>, AppError> {
        Ok(self
            .documents(ledger.collection())
            .find_one(doc! { USER_ID_FIELD: user_id })
            .await?)
    }

    async fn push_entry(
        &self,
        ledger: Ledger,
        user_id: &str,
        entry: Document,
    ) -> Result<UpdateAck, AppError> {
        let options = UpdateOptions::builder().upsert(true).build();

        let result = self
            .documents(ledger.collection())
            .update_one(
                doc! { USER_ID_FIELD: user_id },
                doc! { "$push": { ledger.entries_field(): entry } },
            )
            .with_options(options)
            .await?;
        Ok(update_ack(result))
    }

    async fn pull_entry(
        &self,
        ledger: Ledger,
        user_id: &str,
        entry_id: ObjectId,
    ) -> Result<UpdateAck, AppError> {
        let result = self
            .documents(ledger.collection())
            .update_one(
                doc! { USER_ID_FIELD: user_id },
                doc! { "$pull": { ledger.entries_field(): { "_id": entry_id } } },
            )
            .await?;
        Ok(update_ack(result))
    }

    async fn delete_ledger(&self, ledger: Ledger, user_id: &str) -> Result<DeleteAck, AppError> {
        let result = self
            .documents(ledger.collection())
            .delete_one(doc! { USER_ID_FIELD: user_id })
            .await?;
        Ok(DeleteAck::new(result.deleted_count))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client.database("admin").run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
