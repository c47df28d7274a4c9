// Database module - MongoDB access layer

use color_eyre::{eyre::WrapErr, Result};
use mongodb::{bson::doc, Client, Collection};

pub mod models;
pub use models::*;

mod question;

// Main database handle
#[derive(Clone)]
pub struct Db {
    questions: Collection<QuestionRecord>,
}

impl Db {
    pub async fn new(url: &str, db_name: &str, collection_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(url)
            .await
            .wrap_err("failed to parse MongoDB connection string")?;
        let database = client.database(db_name);

        // Verify connection
        database
            .run_command(doc! { "ping": 1 })
            .await
            .wrap_err("failed to ping MongoDB")?;

        tracing::info!(
            db = db_name,
            collection = collection_name,
            "database connection has been verified"
        );

        Ok(Self {
            questions: database.collection(collection_name),
        })
    }
}
