//! MongoDB client and collection handle.

use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::debug;

use super::document::ProjectDocument;
use super::project::MongoProjectRepository;
use crate::db::{Database, DbError, DbResult};

/// Database used when none is configured.
pub const DEFAULT_DATABASE: &str = "demo";
/// Collection used when none is configured.
pub const DEFAULT_COLLECTION: &str = "projects";

/// MongoDB database implementation.
///
/// The driver's `Client` pools connections internally and is safe to share
/// across requests.
#[derive(Clone)]
pub struct MongoDatabase {
    client: Client,
    collection: Collection<ProjectDocument>,
}

impl MongoDatabase {
    /// Connect using a `mongodb://` or `mongodb+srv://` connection string.
    ///
    /// The driver connects lazily; an unreachable server shows up on the
    /// first operation (or [`Database::ping`]), not here.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> DbResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        debug!(database, collection, "MongoDB client created");

        Ok(Self::from_client(client, database, collection))
    }

    /// Wrap an existing client.
    pub fn from_client(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self { client, collection }
    }

    pub(crate) fn collection(&self) -> &Collection<ProjectDocument> {
        &self.collection
    }
}

impl Database for MongoDatabase {
    type Projects<'a> = MongoProjectRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn projects(&self) -> Self::Projects<'_> {
        MongoProjectRepository { db: self }
    }
}
