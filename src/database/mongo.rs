//! MongoDB connection and settings backend.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReplaceOptions};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::database::models::ChatSettingsDoc;
use crate::database::{ChatSettings, SettingsBackend, StoreError};

/// Database wrapper for MongoDB operations.
#[derive(Debug, Clone)]
pub struct Database {
    db: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB with the given URI and database name.
    ///
    /// # Errors
    /// Returns error if the URI is invalid or the server does not answer a ping.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;

        // Ping the database to verify connection
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("Successfully connected to MongoDB");

        Ok(Self {
            db: client.database(db_name),
        })
    }

    /// Get a typed collection from the database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

/// Settings backend storing one document per chat in `chat_settings`.
#[derive(Debug, Clone)]
pub struct MongoSettingsBackend {
    collection: Collection<ChatSettingsDoc>,
}

impl MongoSettingsBackend {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("chat_settings"),
        }
    }
}

#[async_trait]
impl SettingsBackend for MongoSettingsBackend {
    async fn load(&self, chat_id: i64) -> Result<Option<ChatSettings>, StoreError> {
        let found = self.collection.find_one(doc! { "chat_id": chat_id }).await?;
        debug!("DB get chat settings for {}: {:?}", chat_id, found.is_some());
        Ok(found.map(|d| d.settings))
    }

    async fn save(&self, chat_id: i64, settings: &ChatSettings) -> Result<(), StoreError> {
        let options = ReplaceOptions::builder().upsert(true).build();
        let document = ChatSettingsDoc::new(chat_id, settings.clone());

        self.collection
            .replace_one(doc! { "chat_id": chat_id }, document)
            .with_options(options)
            .await?;

        Ok(())
    }
}
