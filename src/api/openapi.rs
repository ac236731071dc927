//! OpenAPI documentation configuration.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{repository_handler, user_handler};
use crate::api::routes;
use crate::config::HEADER_API_TOKEN;
use crate::domain::{NewUser, Repository, User};

/// OpenAPI documentation for the users & repositories API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "repo-binder",
        version = "0.1.0",
        description = "Binds body, query, header and path input over in-memory users and repositories",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        routes::health,
        user_handler::create_user,
        user_handler::list_users,
        repository_handler::create_repository,
        repository_handler::list_repositories_of_user,
    ),
    components(
        schemas(
            // Domain types
            User,
            NewUser,
            Repository,
            // Handler types
            user_handler::ListUsersInput,
            user_handler::CreateUserResponse,
            user_handler::ListUsersResponse,
            repository_handler::CreateRepositoryInput,
            repository_handler::CreateRepositoryResponse,
            repository_handler::ListRepositoriesInput,
            repository_handler::ListRepositoriesResponse,
            routes::HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Users", description = "Create and list users"),
        (name = "Repositories", description = "Token-protected repository operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the shared access token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    HEADER_API_TOKEN,
                    "Shared secret; also accepted via Authorization, ?token= or ?access_token=",
                ))),
            );
        }
    }
}

/// Render the OpenAPI document as pretty-printed JSON.
pub fn render() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ApiDoc::openapi())
}
