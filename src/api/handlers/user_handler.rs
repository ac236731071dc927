//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::{first_present, parse_bool, BoundJson, BoundQuery};
use crate::api::AppState;
use crate::domain::{NewUser, User};
use crate::errors::AppResult;

/// Raw list-users query string.
///
/// Scalar keys are collected like the arrays so that a repeated key binds
/// its first value instead of failing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListUsersQuery {
    is_member: Vec<String>,
    vip: Vec<String>,
    #[serde(rename = "sort_by[]")]
    sort_by: Vec<String>,
    #[serde(rename = "sort_desc[]")]
    sort_desc: Vec<String>,
}

/// Parsed list-users parameters, echoed back in the response.
///
/// Sort parameters are accepted and echoed but never applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ListUsersInput {
    pub is_member: bool,
    pub sort_by: Vec<String>,
    pub sort_desc: Vec<bool>,
}

impl ListUsersQuery {
    /// Bind the raw query into typed parameters.
    ///
    /// `is_member` is read from `is_member`, falling back to `vip`; when both
    /// are missing or empty it defaults to false.
    pub fn bind(self) -> AppResult<ListUsersInput> {
        let is_member = match first_present(&[
            self.is_member.first().map(String::as_str),
            self.vip.first().map(String::as_str),
        ]) {
            Some(raw) => parse_bool("is_member", raw)?,
            None => false,
        };

        let sort_desc = self
            .sort_desc
            .iter()
            .map(|raw| parse_bool("sort_desc[]", raw))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(ListUsersInput {
            is_member,
            sort_by: self.sort_by,
            sort_desc,
        })
    }
}

/// Create-user response
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    /// The created user, with its server-assigned `created_at`
    pub input: User,
    /// Every stored user
    pub users: Vec<User>,
}

/// List-users response
#[derive(Debug, Serialize, ToSchema)]
pub struct ListUsersResponse {
    /// Users matching the membership filter
    pub users: Vec<User>,
    /// Parsed query parameters
    pub input: ListUsersInput,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    BoundJson(input): BoundJson<NewUser>,
) -> AppResult<Json<CreateUserResponse>> {
    let (user, users) = state.user_service.register(input).await?;

    Ok(Json(CreateUserResponse { input: user, users }))
}

/// List users filtered by membership
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(
        ("is_member" = Option<bool>, Query, description = "Membership filter (alias `vip`), default false"),
        ("sort_by[]" = Option<Vec<String>>, Query, description = "Sort fields (echoed, not applied)"),
        ("sort_desc[]" = Option<Vec<bool>>, Query, description = "Sort directions (echoed, not applied)")
    ),
    responses(
        (status = 200, description = "Matching users", body = ListUsersResponse),
        (status = 400, description = "Malformed query parameter")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    BoundQuery(query): BoundQuery<ListUsersQuery>,
) -> AppResult<Json<ListUsersResponse>> {
    let input = query.bind()?;
    let users = state.user_service.list_by_membership(input.is_member).await?;

    Ok(Json(ListUsersResponse { users, input }))
}
