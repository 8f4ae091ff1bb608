use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::tags::create_tag::CreateTag;
use crate::application::use_cases::tags::delete_tag::DeleteTag;
use crate::application::use_cases::tags::list_tags::ListTags;
use crate::application::use_cases::tags::update_tag::UpdateTag;
use crate::bootstrap::app_context::AppContext;
use crate::domain::projects::Project;
use crate::domain::tags::Tag;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::response::{self, Reply};

#[derive(Serialize, ToSchema)]
pub struct TagBody {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tag> for TagBody {
    fn from(t: Tag) -> Self {
        TagBody {
            id: t.id,
            project_id: t.project_id,
            title: t.title,
            color: t.color,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagRequest {
    pub title: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct TagPath {
    pub tag_id: i64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tag", get(list_tags).post(create_tag))
        .route("/tag/:tag_id", put(update_tag).delete(delete_tag))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project/{project_id}/tag", tag = "Tags",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200, body = [TagBody])))]
pub async fn list_tags(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
) -> ApiResult<Reply<Vec<TagBody>>> {
    let repo = ctx.tag_repo();
    let tags = ListTags {
        repo: repo.as_ref(),
    }
    .execute(project.id)
    .await?;
    Ok(response::ok(
        "tags loaded",
        tags.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project/{project_id}/tag", tag = "Tags",
    params(("project_id" = i64, Path, description = "Project ID")),
    request_body = TagRequest,
    responses((status = 201, body = TagBody), (status = 400)))]
pub async fn create_tag(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    JsonBody(req): JsonBody<TagRequest>,
) -> ApiResult<(StatusCode, Reply<TagBody>)> {
    let repo = ctx.tag_repo();
    let tag = CreateTag {
        repo: repo.as_ref(),
    }
    .execute(project.id, &req.title, &req.color)
    .await?;
    Ok(response::created("tag created", tag.into()))
}

#[utoipa::path(put, path = "/api/project/{project_id}/tag/{tag_id}", tag = "Tags",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    request_body = TagRequest,
    responses((status = 200, body = TagBody), (status = 404)))]
pub async fn update_tag(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    PathParams(path): PathParams<TagPath>,
    JsonBody(req): JsonBody<TagRequest>,
) -> ApiResult<Reply<TagBody>> {
    let repo = ctx.tag_repo();
    let tag = UpdateTag {
        repo: repo.as_ref(),
    }
    .execute(project.id, path.tag_id, &req.title, &req.color)
    .await?;
    Ok(response::ok("tag updated", tag.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/tag/{tag_id}", tag = "Tags",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn delete_tag(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.tag_repo();
    DeleteTag {
        repo: repo.as_ref(),
    }
    .execute(project.id, path.tag_id)
    .await?;
    Ok(response::done("tag deleted"))
}
