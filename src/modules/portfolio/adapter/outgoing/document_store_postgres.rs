use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use serde_json::Value;

use super::sea_orm_entity::document;
use crate::portfolio::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};

/// Postgres-backed document store: one `documents` row per portfolio
/// section, the payload in a JSONB column. Writes are upserts that replace
/// the payload wholesale.
#[derive(Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn get(
        &self,
        collection: &str,
        name: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        let found = document::Entity::find_by_id((collection.to_string(), name.to_string()))
            .one(self.db.as_ref())
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        Ok(found.map(|model| model.data))
    }

    async fn put(
        &self,
        collection: &str,
        name: &str,
        doc: Value,
    ) -> Result<(), DocumentStoreError> {
        let row = document::ActiveModel {
            collection: Set(collection.to_string()),
            name: Set(name.to_string()),
            data: Set(doc),
            updated_at: Set(Utc::now().into()),
        };

        document::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([document::Column::Collection, document::Column::Name])
                    .update_columns([document::Column::Data, document::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(|e| DocumentStoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    #[tokio::test]
    async fn get_maps_a_found_row_to_its_payload() {
        let stored = json!({ "items": [{ "id": "1" }] });
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![document::Model {
                collection: "portfolio".into(),
                name: "projects".into(),
                data: stored.clone(),
                updated_at: Utc::now().into(),
            }]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let doc = store.get("portfolio", "projects").await.unwrap();
        assert_eq!(doc, Some(stored));
    }

    #[tokio::test]
    async fn get_maps_no_row_to_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<document::Model>::new()])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let doc = store.get("portfolio", "projects").await.unwrap();
        assert_eq!(doc, None);
    }

    #[tokio::test]
    async fn put_upserts_one_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        store
            .put("portfolio", "projects", json!({ "items": [] }))
            .await
            .unwrap();
    }
}
