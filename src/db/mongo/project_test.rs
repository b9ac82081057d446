//! Tests for MongoProjectRepository against a live server.
//!
//! Enabled with `--features mongodb-tests`; reads MONGO_URI (defaults to a
//! local server) and uses a throwaway collection per test.

use chrono::Utc;

use crate::db::{
    Database, Language, MongoDatabase, Project, ProjectQuery, ProjectRecord, ProjectRepository,
};

async fn setup_db(collection: &str) -> MongoDatabase {
    let uri = std::env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let db = MongoDatabase::connect(&uri, "catalog_test", collection)
        .await
        .expect("Failed to create MongoDB client");
    db.collection()
        .drop()
        .await
        .expect("Failed to drop test collection");
    db
}

fn record(name: &str, language: Language) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        project: Project {
            added: Utc::now(),
            language,
            url: format!("https://example.com/{}", name),
        },
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn ping_succeeds() {
    let db = setup_db("ping").await;
    db.ping().await.expect("Ping should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn insert_then_list_with_and_without_filter() {
    let db = setup_db("insert_list").await;
    let repo = db.projects();

    repo.insert(&record("a", Language::Go)).await.unwrap();
    repo.insert(&record("b", Language::Rust)).await.unwrap();
    repo.insert(&record("c", Language::Rust)).await.unwrap();

    let all = repo.list(&ProjectQuery::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let rust = repo
        .list(&ProjectQuery {
            language: Some(Language::Rust),
        })
        .await
        .unwrap();
    assert_eq!(rust.len(), 2);
    assert!(rust.iter().all(|r| r.project.language == Language::Rust));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_names_are_stored_twice() {
    let db = setup_db("duplicates").await;
    let repo = db.projects();

    repo.insert(&record("same", Language::Python)).await.unwrap();
    repo.insert(&record("same", Language::Python)).await.unwrap();

    let all = repo.list(&ProjectQuery::default()).await.unwrap();
    assert_eq!(all.iter().filter(|r| r.name == "same").count(), 2);
}
