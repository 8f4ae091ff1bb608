use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::comments::create_comment::CreateComment;
use crate::application::use_cases::comments::delete_comment::DeleteComment;
use crate::application::use_cases::comments::list_comments::ListComments;
use crate::application::use_cases::comments::update_comment::UpdateComment;
use crate::bootstrap::app_context::AppContext;
use crate::domain::comments::Comment;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::middleware::Scope;
use crate::presentation::http::response::{self, Reply};

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentBody {
    pub id: i64,
    pub author_id: String,
    pub content: String,
    pub project_id: Option<i64>,
    pub meeting_id: Option<i64>,
    pub topic_id: Option<i64>,
    pub action_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Comment> for CommentBody {
    fn from(c: Comment) -> Self {
        CommentBody {
            id: c.id,
            author_id: c.author_id,
            content: c.content,
            project_id: c.project_id,
            meeting_id: c.meeting_id,
            topic_id: c.topic_id,
            action_id: c.action_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub comment_id: i64,
}

/// `/comment` routes; mounted below projects, meetings, topics and actions.
/// The innermost loaded entity decides where a comment lives.
pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/comment", get(list_comments).post(create_comment))
        .route(
            "/comment/:comment_id",
            put(update_comment).delete(delete_comment),
        )
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project/{project_id}/comment", tag = "Comments",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200, body = [CommentBody])))]
pub async fn list_comments(
    State(ctx): State<AppContext>,
    Scope(scope): Scope,
) -> ApiResult<Reply<Vec<CommentBody>>> {
    let repo = ctx.comment_repo();
    let items = ListComments {
        repo: repo.as_ref(),
    }
    .execute(&scope)
    .await?;
    Ok(response::ok(
        "comments loaded",
        items.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project/{project_id}/comment", tag = "Comments",
    params(("project_id" = i64, Path, description = "Project ID")),
    request_body = CommentRequest,
    responses((status = 201, body = CommentBody), (status = 400)))]
pub async fn create_comment(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Scope(scope): Scope,
    JsonBody(req): JsonBody<CommentRequest>,
) -> ApiResult<(StatusCode, Reply<CommentBody>)> {
    let repo = ctx.comment_repo();
    let comment = CreateComment {
        repo: repo.as_ref(),
    }
    .execute(&user.0, &scope, &req.content)
    .await?;
    Ok(response::created("comment created", comment.into()))
}

#[utoipa::path(put, path = "/api/project/{project_id}/comment/{comment_id}", tag = "Comments",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("comment_id" = i64, Path, description = "Comment ID"),
    ),
    request_body = CommentRequest,
    responses((status = 200, body = CommentBody), (status = 403), (status = 404)))]
pub async fn update_comment(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Scope(scope): Scope,
    PathParams(path): PathParams<CommentPath>,
    JsonBody(req): JsonBody<CommentRequest>,
) -> ApiResult<Reply<CommentBody>> {
    let repo = ctx.comment_repo();
    let comment = UpdateComment {
        repo: repo.as_ref(),
    }
    .execute(&user.0, &scope, path.comment_id, &req.content)
    .await?;
    Ok(response::ok("comment updated", comment.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/comment/{comment_id}", tag = "Comments",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("comment_id" = i64, Path, description = "Comment ID"),
    ),
    responses((status = 200), (status = 403), (status = 404)))]
pub async fn delete_comment(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Scope(scope): Scope,
    PathParams(path): PathParams<CommentPath>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.comment_repo();
    DeleteComment {
        repo: repo.as_ref(),
    }
    .execute(&user.0, &scope, path.comment_id)
    .await?;
    tracing::info!(comment_id = path.comment_id, user_id = %user.0, "comment_deleted");
    Ok(response::done("comment deleted"))
}
