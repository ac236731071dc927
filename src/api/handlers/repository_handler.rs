//! Repository handlers.
//!
//! Both endpoints require an access token. Repositories are global: the
//! `{login}` segment never scopes what is created or listed.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::{AccessToken, BoundJson, BoundQuery};
use crate::api::middleware::{require_known_login, require_valid_token};
use crate::api::AppState;
use crate::domain::Repository;
use crate::errors::AppResult;

/// List-repositories query string; a repeated `lang` binds its first value
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListRepositoriesQuery {
    lang: Vec<String>,
}

/// Echo of a create-repository request
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRepositoryInput {
    pub token: String,
    pub new_repository: Repository,
}

/// Create-repository response
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRepositoryResponse {
    pub input: CreateRepositoryInput,
    /// Every stored repository
    pub repos: Vec<Repository>,
}

/// Echo of a list-repositories request
#[derive(Debug, Serialize, ToSchema)]
pub struct ListRepositoriesInput {
    pub token: String,
    pub login: String,
    /// Accepted but not applied as a filter
    pub lang: String,
}

/// List-repositories response
#[derive(Debug, Serialize, ToSchema)]
pub struct ListRepositoriesResponse {
    pub repos: Vec<Repository>,
    pub input: ListRepositoriesInput,
}

/// Create repository routes
pub fn repository_routes() -> Router<AppState> {
    Router::new().route(
        "/:login/repos",
        get(list_repositories_of_user).post(create_repository),
    )
}

/// Create a repository
#[utoipa::path(
    post,
    path = "/users/{login}/repos",
    tag = "Repositories",
    security(("api_token" = [])),
    params(
        ("login" = String, Path, description = "Owner login (not used for scoping)")
    ),
    request_body = Repository,
    responses(
        (status = 200, description = "Repository created", body = CreateRepositoryResponse),
        (status = 400, description = "Missing token or malformed body"),
        (status = 403, description = "Token does not match the shared secret")
    )
)]
pub async fn create_repository(
    State(state): State<AppState>,
    Path(login): Path<String>,
    token: AccessToken,
    BoundJson(new_repository): BoundJson<Repository>,
) -> AppResult<Json<CreateRepositoryResponse>> {
    require_valid_token(&state.config, &token)?;

    let repos = state
        .repository_service
        .create(&login, new_repository.clone())
        .await?;

    Ok(Json(CreateRepositoryResponse {
        input: CreateRepositoryInput {
            token: token.0,
            new_repository,
        },
        repos,
    }))
}

/// List repositories of a user
#[utoipa::path(
    get,
    path = "/users/{login}/repos",
    tag = "Repositories",
    security(("api_token" = [])),
    params(
        ("login" = String, Path, description = "Owner login; only the configured login is known"),
        ("lang" = Option<String>, Query, description = "Language (echoed, not applied)")
    ),
    responses(
        (status = 200, description = "Every stored repository", body = ListRepositoriesResponse),
        (status = 400, description = "Missing token"),
        (status = 403, description = "Token does not match the shared secret"),
        (status = 404, description = "Unknown login")
    )
)]
pub async fn list_repositories_of_user(
    State(state): State<AppState>,
    Path(login): Path<String>,
    BoundQuery(query): BoundQuery<ListRepositoriesQuery>,
    token: AccessToken,
) -> AppResult<Json<ListRepositoriesResponse>> {
    require_known_login(&state.config, &login)?;
    require_valid_token(&state.config, &token)?;

    let repos = state.repository_service.list().await?;

    Ok(Json(ListRepositoriesResponse {
        repos,
        input: ListRepositoriesInput {
            token: token.0,
            login,
            lang: query.lang.into_iter().next().unwrap_or_default(),
        },
    }))
}
