use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::priority_repository::PriorityInput;
use crate::application::use_cases::priorities::create_priority::CreatePriority;
use crate::application::use_cases::priorities::delete_priority::DeletePriority;
use crate::application::use_cases::priorities::list_priorities::ListPriorities;
use crate::application::use_cases::priorities::update_priority::UpdatePriority;
use crate::bootstrap::app_context::AppContext;
use crate::domain::priorities::Priority;
use crate::domain::projects::Project;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::response::{self, Reply};

#[derive(Serialize, ToSchema)]
pub struct PriorityBody {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub weight: i32,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Priority> for PriorityBody {
    fn from(p: Priority) -> Self {
        PriorityBody {
            id: p.id,
            project_id: p.project_id,
            title: p.title,
            weight: p.weight,
            color: p.color,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PriorityRequest {
    pub title: String,
    #[serde(default)]
    pub weight: i32,
    pub color: String,
}

impl From<PriorityRequest> for PriorityInput {
    fn from(r: PriorityRequest) -> Self {
        PriorityInput {
            title: r.title,
            weight: r.weight,
            color: r.color,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PriorityPath {
    pub priority_id: i64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/priority", get(list_priorities).post(create_priority))
        .route(
            "/priority/:priority_id",
            put(update_priority).delete(delete_priority),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project/{project_id}/priority", tag = "Priorities",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200, body = [PriorityBody])))]
pub async fn list_priorities(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
) -> ApiResult<Reply<Vec<PriorityBody>>> {
    let repo = ctx.priority_repo();
    let items = ListPriorities {
        repo: repo.as_ref(),
    }
    .execute(project.id)
    .await?;
    Ok(response::ok(
        "priorities loaded",
        items.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project/{project_id}/priority", tag = "Priorities",
    params(("project_id" = i64, Path, description = "Project ID")),
    request_body = PriorityRequest,
    responses((status = 201, body = PriorityBody), (status = 400)))]
pub async fn create_priority(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    JsonBody(req): JsonBody<PriorityRequest>,
) -> ApiResult<(StatusCode, Reply<PriorityBody>)> {
    let repo = ctx.priority_repo();
    let priority = CreatePriority {
        repo: repo.as_ref(),
    }
    .execute(project.id, req.into())
    .await?;
    Ok(response::created("priority created", priority.into()))
}

#[utoipa::path(put, path = "/api/project/{project_id}/priority/{priority_id}", tag = "Priorities",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("priority_id" = i64, Path, description = "Priority ID"),
    ),
    request_body = PriorityRequest,
    responses((status = 200, body = PriorityBody), (status = 404)))]
pub async fn update_priority(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    PathParams(path): PathParams<PriorityPath>,
    JsonBody(req): JsonBody<PriorityRequest>,
) -> ApiResult<Reply<PriorityBody>> {
    let repo = ctx.priority_repo();
    let priority = UpdatePriority {
        repo: repo.as_ref(),
    }
    .execute(project.id, path.priority_id, req.into())
    .await?;
    Ok(response::ok("priority updated", priority.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/priority/{priority_id}", tag = "Priorities",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("priority_id" = i64, Path, description = "Priority ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn delete_priority(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    PathParams(path): PathParams<PriorityPath>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.priority_repo();
    DeletePriority {
        repo: repo.as_ref(),
    }
    .execute(project.id, path.priority_id)
    .await?;
    Ok(response::done("priority deleted"))
}
