use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validation::is_non_empty_trimmed;
use validator::Validate;

/// Default page number
pub const DEFAULT_PAGE: i64 = 1;
/// Default page size
pub const DEFAULT_LIMIT: i64 = 20;
/// Largest allowed page size
pub const MAX_LIMIT: i64 = 100;

fn required(field_message: &'static str) -> validator::ValidationError {
    let mut err = validator::ValidationError::new("required");
    err.message = Some(field_message.into());
    err
}

fn too_long(field_message: &'static str) -> validator::ValidationError {
    let mut err = validator::ValidationError::new("length");
    err.message = Some(field_message.into());
    err
}

/// Title: required, 1-200 chars after trim
fn validate_title(title: &str) -> Result<(), validator::ValidationError> {
    if !is_non_empty_trimmed(title) {
        return Err(required("Title is required"));
    }
    if title.trim().chars().count() > 200 {
        return Err(too_long("Title must be at most 200 characters"));
    }
    Ok(())
}

/// Description: required, 1-4000 chars after trim
fn validate_description(description: &str) -> Result<(), validator::ValidationError> {
    if !is_non_empty_trimmed(description) {
        return Err(required("Description is required"));
    }
    if description.trim().chars().count() > 4000 {
        return Err(too_long("Description must be at most 4000 characters"));
    }
    Ok(())
}

/// techStack: non-empty, every element non-empty after trim
fn validate_tech_stack(tech_stack: &Vec<String>) -> Result<(), validator::ValidationError> {
    if tech_stack.is_empty() || !tech_stack.iter().all(|t| is_non_empty_trimmed(t)) {
        return Err(required(
            "techStack must be a non-empty array of strings",
        ));
    }
    Ok(())
}

/// Project entity - a portfolio project stored in MongoDB.
///
/// JSON fields are camelCase to match the public API contract; the id is
/// stored as `_id` per Mongo convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Project title
    pub title: String,
    /// Project description
    pub description: String,
    /// Technologies used, in display order
    pub tech_stack: Vec<String>,
    /// Optional source repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    /// Optional live deployment URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Optional image path or URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating or fully replacing a project.
///
/// The same type serves create and update because updates are full-document
/// replacements: a body that omits a required field fails validation rather
/// than merging with the stored record.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[serde(default)]
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    #[serde(default)]
    #[validate(custom(function = "validate_tech_stack"))]
    pub tech_stack: Vec<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub image: Option<String>,
}

impl ProjectInput {
    /// Trim every text field, including each techStack element.
    ///
    /// Runs before validation so "  " and "" are rejected identically, and
    /// before persistence so stored records satisfy the trimmed invariants.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.tech_stack = self
            .tech_stack
            .into_iter()
            .map(|t| t.trim().to_string())
            .collect();
        self.repo_url = self.repo_url.map(|v| v.trim().to_string());
        self.live_url = self.live_url.map(|v| v.trim().to_string());
        self.image = self.image.map(|v| v.trim().to_string());
        self
    }
}

/// Pagination parameters for the project list.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct PageQuery {
    /// 1-based page number (default 1, floored at 1)
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size (default 20, clamped to [1,100])
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageQuery {
    /// Clamp into the supported range: page >= 1, limit in [1,100].
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(DEFAULT_PAGE),
            limit: self.limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Number of records to skip for this page. Saturates instead of
    /// overflowing for absurdly large page numbers.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit) as u64
    }
}

/// One page of projects plus the collection-wide total.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub page: i64,
    pub limit: i64,
    /// Total records in the collection, not the page
    pub total: u64,
}

impl Project {
    /// Create a new project from a normalized input.
    pub fn new(input: ProjectInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            tech_stack: input.tech_stack,
            repo_url: input.repo_url,
            live_url: input.live_url,
            image: input.image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all content fields from a normalized input.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is refreshed.
    pub fn replace_with(&mut self, input: ProjectInput) {
        self.title = input.title;
        self.description = input.description;
        self.tech_stack = input.tech_stack;
        self.repo_url = input.repo_url;
        self.live_url = input.live_url;
        self.image = input.image;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProjectInput {
        ProjectInput {
            title: "Portfolio site".to_string(),
            description: "A personal portfolio".to_string(),
            tech_stack: vec!["rust".to_string(), "axum".to_string()],
            repo_url: Some("https://github.com/me/site".to_string()),
            live_url: None,
            image: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn empty_title_fails() {
        let mut input = valid_input();
        input.title = String::new();
        assert!(input.validate().is_err());
    }

    #[test]
    fn whitespace_title_fails() {
        let mut input = valid_input();
        input.title = "   ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn overlong_title_fails() {
        let mut input = valid_input();
        input.title = "x".repeat(201);
        assert!(input.validate().is_err());
    }

    #[test]
    fn title_at_limit_passes() {
        let mut input = valid_input();
        input.title = "x".repeat(200);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_description_fails() {
        let mut input = valid_input();
        input.description = "  ".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn overlong_description_fails() {
        let mut input = valid_input();
        input.description = "x".repeat(4001);
        assert!(input.validate().is_err());
    }

    #[test]
    fn empty_tech_stack_fails() {
        let mut input = valid_input();
        input.tech_stack = vec![];
        assert!(input.validate().is_err());
    }

    #[test]
    fn blank_tech_stack_element_fails() {
        let mut input = valid_input();
        input.tech_stack = vec!["rust".to_string(), "  ".to_string()];
        assert!(input.validate().is_err());
    }

    #[test]
    fn normalized_trims_all_text_fields() {
        let input = ProjectInput {
            title: "  Portfolio  ".to_string(),
            description: " About ".to_string(),
            tech_stack: vec![" rust ".to_string()],
            repo_url: Some(" https://github.com/me/site ".to_string()),
            live_url: None,
            image: None,
        }
        .normalized();

        assert_eq!(input.title, "Portfolio");
        assert_eq!(input.description, "About");
        assert_eq!(input.tech_stack, vec!["rust".to_string()]);
        assert_eq!(input.repo_url.as_deref(), Some("https://github.com/me/site"));
    }

    #[test]
    fn page_query_defaults() {
        let query = PageQuery::default().normalized();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.skip(), 0);
    }

    #[test]
    fn page_query_floors_page_at_one() {
        let query = PageQuery { page: -3, limit: 20 }.normalized();
        assert_eq!(query.page, 1);
        assert_eq!(query.skip(), 0);
    }

    #[test]
    fn page_query_clamps_limit() {
        let query = PageQuery { page: 1, limit: 500 }.normalized();
        assert_eq!(query.limit, 100);

        let query = PageQuery { page: 1, limit: 0 }.normalized();
        assert_eq!(query.limit, 1);
    }

    #[test]
    fn page_query_computes_skip() {
        let query = PageQuery { page: 3, limit: 20 }.normalized();
        assert_eq!(query.skip(), 40);
    }

    #[test]
    fn page_query_skip_saturates_on_huge_page() {
        let query = PageQuery {
            page: i64::MAX,
            limit: 100,
        }
        .normalized();
        assert_eq!(query.skip(), i64::MAX as u64);
    }

    #[test]
    fn replace_with_preserves_identity() {
        let mut project = Project::new(valid_input());
        let id = project.id;
        let created_at = project.created_at;

        let mut replacement = valid_input();
        replacement.title = "Renamed".to_string();
        project.replace_with(replacement);

        assert_eq!(project.id, id);
        assert_eq!(project.created_at, created_at);
        assert_eq!(project.title, "Renamed");
        assert!(project.updated_at >= created_at);
    }

    #[test]
    fn new_projects_get_distinct_ids() {
        let a = Project::new(valid_input());
        let b = Project::new(valid_input());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_camel_case_with_mongo_id() {
        let project = Project::new(valid_input());
        let json = serde_json::to_value(&project).unwrap();

        assert!(json.get("_id").is_some());
        assert!(json.get("techStack").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("repoUrl").is_some());
        // None options are omitted entirely
        assert!(json.get("liveUrl").is_none());
    }
}
