//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "REST API for portfolio projects and contact-form intake",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/projects", api = domain_projects::ApiDoc),
        (path = "/api/contact", api = domain_contact::ApiDoc)
    ),
    tags(
        (name = "Projects", description = "Portfolio project endpoints (MongoDB)"),
        (name = "Contact", description = "Contact-form intake (stateless)")
    )
)]
pub struct ApiDoc;
