//! MongoDB implementation of ProjectRepository

use std::sync::Arc;

use async_trait::async_trait;
use database::mongodb::LazyMongo;
use mongodb::{
    Collection,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProjectResult;
use crate::models::Project;
use crate::repository::ProjectRepository;

const COLLECTION: &str = "projects";

/// MongoDB implementation of the ProjectRepository.
///
/// Holds the lazily-connected handle rather than a resolved collection, so
/// the first repository call is what establishes the shared connection.
pub struct MongoProjectRepository {
    mongo: Arc<LazyMongo>,
    collection_name: String,
}

impl MongoProjectRepository {
    pub fn new(mongo: Arc<LazyMongo>) -> Self {
        Self {
            mongo,
            collection_name: COLLECTION.to_string(),
        }
    }

    /// Create a repository with a custom collection name
    pub fn with_collection(mongo: Arc<LazyMongo>, collection_name: &str) -> Self {
        Self {
            mongo,
            collection_name: collection_name.to_string(),
        }
    }

    async fn collection(&self) -> ProjectResult<Collection<Project>> {
        let db = self.mongo.database().await?;
        Ok(db.collection::<Project>(&self.collection_name))
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    #[instrument(skip(self, project), fields(project_title = %project.title))]
    async fn create(&self, project: Project) -> ProjectResult<Project> {
        self.collection().await?.insert_one(&project).await?;

        tracing::info!(project_id = %project.id, "Project created successfully");
        Ok(project)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProjectResult<Option<Project>> {
        let project = self
            .collection()
            .await?
            .find_one(Self::id_filter(id))
            .await?;
        Ok(project)
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: i64) -> ProjectResult<Vec<Project>> {
        use futures_util::TryStreamExt;

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .skip(skip)
            .limit(limit)
            .build();

        let cursor = self
            .collection()
            .await?
            .find(doc! {})
            .with_options(options)
            .await?;
        let projects: Vec<Project> = cursor.try_collect().await?;

        Ok(projects)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProjectResult<u64> {
        let count = self.collection().await?.count_documents(doc! {}).await?;
        Ok(count)
    }

    #[instrument(skip(self, project), fields(project_id = %project.id))]
    async fn replace(&self, project: Project) -> ProjectResult<Option<Project>> {
        let result = self
            .collection()
            .await?
            .replace_one(Self::id_filter(project.id), &project)
            .await?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        tracing::info!(project_id = %project.id, "Project updated successfully");
        Ok(Some(project))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProjectResult<bool> {
        let result = self
            .collection()
            .await?
            .delete_one(Self::id_filter(id))
            .await?;

        if result.deleted_count > 0 {
            tracing::info!(project_id = %id, "Project deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_filter_encodes_uuid_under_mongo_id() {
        let id = Uuid::now_v7();
        let filter = MongoProjectRepository::id_filter(id);
        assert!(filter.contains_key("_id"));
        assert_ne!(filter.get("_id"), Some(&Bson::Null));
    }
}
