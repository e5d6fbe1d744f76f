use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    Ack, UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, MalformedBodyResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProjectResult;
use crate::models::{PageQuery, Project, ProjectInput, ProjectPage};
use crate::repository::ProjectRepository;
use crate::service::ProjectService;

/// OpenAPI documentation for the Projects API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_projects,
        create_project,
        get_project,
        update_project,
        delete_project,
    ),
    components(
        schemas(Project, ProjectInput, ProjectPage, Ack),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            MalformedBodyResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Projects", description = "Portfolio project endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the projects router with all HTTP endpoints
pub fn router<R: ProjectRepository + 'static>(service: ProjectService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route(
            "/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(shared_service)
}

/// List projects, newest first, with pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Projects",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of projects plus the total count", body = ProjectPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_projects<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    Query(query): Query<PageQuery>,
) -> ProjectResult<Json<ProjectPage>> {
    let page = service.list_projects(query).await?;
    Ok(Json(page))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "",
    tag = "Projects",
    request_body = ProjectInput,
    responses(
        (status = 201, description = "Project created successfully", body = Project),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    ValidatedJson(input): ValidatedJson<ProjectInput>,
) -> ProjectResult<impl IntoResponse> {
    let project = service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Projects",
    params(
        ("id" = uuid::Uuid, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<Project>> {
    let project = service.get_project(id).await?;
    Ok(Json(project))
}

/// Replace a project with a full document
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Projects",
    params(
        ("id" = uuid::Uuid, Path, description = "Project id")
    ),
    request_body = ProjectInput,
    responses(
        (status = 200, description = "Project updated successfully", body = Project),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<ProjectInput>,
) -> ProjectResult<Json<Project>> {
    let project = service.update_project(id, input).await?;
    Ok(Json(project))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Projects",
    params(
        ("id" = uuid::Uuid, Path, description = "Project id")
    ),
    responses(
        (status = 200, description = "Project deleted successfully", body = Ack),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_project<R: ProjectRepository>(
    State(service): State<Arc<ProjectService<R>>>,
    UuidPath(id): UuidPath,
) -> ProjectResult<Json<Ack>> {
    service.delete_project(id).await?;
    Ok(Json(Ack::ok()))
}
