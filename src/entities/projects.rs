use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ordered list of technology names, stored as a JSON array.
    pub technologies: Json,
    pub image_url: Option<String>,
    /// Weak reference to a media item. Dangling ids are tolerated and
    /// resolve to "no featured media".
    pub featured_media_id: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    /// ISO date (YYYY-MM-DD) the project was completed or launched.
    pub project_date: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn technologies_vec(&self) -> Vec<String> {
        serde_json::from_value(self.technologies.clone()).unwrap_or_default()
    }
}
