use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::users::change_name::ChangeName;
use crate::application::use_cases::users::get_profile::GetProfile;
use crate::application::use_cases::users::resolve_user::ResolveUser;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::User;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::response::{self, Reply};

#[derive(Debug, Serialize, ToSchema)]
pub struct UserBody {
    pub id: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserBody {
    fn from(u: User) -> Self {
        UserBody {
            id: u.id,
            name: u.name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeNameRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResolvedUser {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UserPath {
    pub user_id: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/user/me", get(get_me).put(change_name))
        .route("/user/resolve/:user_id", get(resolve_user))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/user/me", tag = "Users",
    responses((status = 200, body = UserBody), (status = 401)))]
pub async fn get_me(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Reply<UserBody>> {
    let repo = ctx.user_repo();
    let me = GetProfile {
        repo: repo.as_ref(),
    }
    .execute(&user.0)
    .await?;
    Ok(response::ok("user loaded", me.into()))
}

#[utoipa::path(put, path = "/api/user/me", tag = "Users", request_body = ChangeNameRequest,
    responses((status = 200, body = UserBody), (status = 400), (status = 409)))]
pub async fn change_name(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    JsonBody(req): JsonBody<ChangeNameRequest>,
) -> ApiResult<Reply<UserBody>> {
    let repo = ctx.user_repo();
    let updated = ChangeName {
        repo: repo.as_ref(),
    }
    .execute(&user.0, &req.name)
    .await?;
    tracing::info!(user_id = %user.0, "user_name_changed");
    Ok(response::ok("user name changed", updated.into()))
}

#[utoipa::path(get, path = "/api/user/resolve/{user_id}", tag = "Users",
    params(("user_id" = String, Path, description = "Identity provider subject")),
    responses((status = 200, body = ResolvedUser), (status = 404)))]
pub async fn resolve_user(
    State(ctx): State<AppContext>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<ResolvedUser>> {
    let repo = ctx.user_repo();
    let name = ResolveUser {
        repo: repo.as_ref(),
    }
    .execute(&path.user_id)
    .await?;
    Ok(response::ok(
        "user resolved",
        ResolvedUser {
            id: path.user_id,
            name,
        },
    ))
}
