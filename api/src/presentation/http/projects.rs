use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::projects::create_project::CreateProject;
use crate::application::use_cases::projects::delete_project::DeleteProject;
use crate::application::use_cases::projects::list_projects::ListProjects;
use crate::application::use_cases::projects::members::{
    GrantAccess, ListProjectUsers, RevokeAccess,
};
use crate::application::use_cases::projects::update_project::UpdateProject;
use crate::bootstrap::app_context::AppContext;
use crate::domain::projects::Project;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::response::{self, Reply};
use crate::presentation::http::users::UserPath;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectBody {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub preview_url: String,
    pub owner_id: String,
    pub ai_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectBody {
    fn from(p: Project) -> Self {
        ProjectBody {
            id: p.id,
            name: p.name,
            description: p.description,
            preview_url: p.preview_url,
            owner_id: p.owner_id,
            ai_enabled: p.ai_enabled,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Routes outside any project.
pub fn collection_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/project", get(list_projects).post(create_project))
        .with_state(ctx)
}

/// Routes below `/project/:project_id`; expects the project middleware.
pub fn item_routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/users", get(list_project_users))
        .route(
            "/user/:user_id",
            post(grant_access).delete(revoke_access),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project", tag = "Projects",
    responses((status = 200, body = [ProjectBody])))]
pub async fn list_projects(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Reply<Vec<ProjectBody>>> {
    let repo = ctx.project_repo();
    let projects = ListProjects {
        repo: repo.as_ref(),
    }
    .execute(&user.0)
    .await?;
    Ok(response::ok(
        "projects loaded",
        projects.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project", tag = "Projects", request_body = ProjectRequest,
    responses((status = 201, body = ProjectBody), (status = 400)))]
pub async fn create_project(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    JsonBody(req): JsonBody<ProjectRequest>,
) -> ApiResult<(StatusCode, Reply<ProjectBody>)> {
    let repo = ctx.project_repo();
    let project = CreateProject {
        repo: repo.as_ref(),
    }
    .execute(&user.0, &req.name, &req.description)
    .await?;
    Ok(response::created("project created", project.into()))
}

#[utoipa::path(get, path = "/api/project/{project_id}", tag = "Projects",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200, body = ProjectBody), (status = 401), (status = 404)))]
pub async fn get_project(Extension(project): Extension<Project>) -> Reply<ProjectBody> {
    response::ok("project loaded", project.into())
}

#[utoipa::path(put, path = "/api/project/{project_id}", tag = "Projects",
    params(("project_id" = i64, Path, description = "Project ID")),
    request_body = ProjectRequest,
    responses((status = 200, body = ProjectBody), (status = 400)))]
pub async fn update_project(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    JsonBody(req): JsonBody<ProjectRequest>,
) -> ApiResult<Reply<ProjectBody>> {
    let repo = ctx.project_repo();
    let updated = UpdateProject {
        repo: repo.as_ref(),
    }
    .execute(&project, &req.name, &req.description)
    .await?;
    Ok(response::ok("project updated", updated.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}", tag = "Projects",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200), (status = 403), (status = 404)))]
pub async fn delete_project(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.project_repo();
    DeleteProject {
        repo: repo.as_ref(),
    }
    .execute(&project, &user.0)
    .await?;
    Ok(response::done("project deleted"))
}

#[utoipa::path(get, path = "/api/project/{project_id}/users", tag = "Projects",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200, body = [String])))]
pub async fn list_project_users(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
) -> ApiResult<Reply<Vec<String>>> {
    let repo = ctx.project_repo();
    let users = ListProjectUsers {
        repo: repo.as_ref(),
    }
    .execute(&project)
    .await?;
    Ok(response::ok("project users loaded", users))
}

#[utoipa::path(post, path = "/api/project/{project_id}/user/{user_id}", tag = "Projects",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("user_id" = String, Path, description = "User to grant access to"),
    ),
    responses((status = 200), (status = 400), (status = 403)))]
pub async fn grant_access(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    let projects = ctx.project_repo();
    let users = ctx.user_repo();
    let notifications = ctx.notification_repo();
    GrantAccess {
        projects: projects.as_ref(),
        users: users.as_ref(),
        notifications: notifications.as_ref(),
    }
    .execute(&project, &user.0, &path.user_id)
    .await?;
    Ok(response::done("access granted"))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/user/{user_id}", tag = "Projects",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("user_id" = String, Path, description = "User to revoke"),
    ),
    responses((status = 200), (status = 403), (status = 404)))]
pub async fn revoke_access(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.project_repo();
    RevokeAccess {
        projects: repo.as_ref(),
    }
    .execute(&project, &user.0, &path.user_id)
    .await?;
    Ok(response::done("access revoked"))
}
