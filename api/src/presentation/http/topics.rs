use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::assignment_repository::AssignmentTarget;
use crate::application::ports::topic_repository::TopicChanges;
use crate::application::use_cases::assignments::assign_user::AssignmentSubject;
use crate::application::use_cases::topics::create_topic::CreateTopic;
use crate::application::use_cases::topics::delete_topic::DeleteTopic;
use crate::application::use_cases::topics::list_topics::ListTopics;
use crate::application::use_cases::topics::set_topic_solution::SetTopicSolution;
use crate::application::use_cases::topics::set_topic_status::SetTopicStatus;
use crate::application::use_cases::topics::update_topic::UpdateTopic;
use crate::bootstrap::app_context::AppContext;
use crate::domain::meetings::Meeting;
use crate::domain::projects::Project;
use crate::domain::topics::Topic;
use crate::presentation::http::assignments;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::response::{self, Reply};
use crate::presentation::http::tags::TagPath;
use crate::presentation::http::users::UserPath;

#[derive(Debug, Serialize, ToSchema)]
pub struct TopicBody {
    pub id: i64,
    pub meeting_id: i64,
    pub title: String,
    pub description: String,
    pub creator_id: String,
    pub solution_id: Option<i64>,
    pub closed: bool,
    pub closed_at: Option<DateTime<Utc>>,
    pub force_solution: bool,
    pub priority_id: Option<i64>,
    pub assigned_users: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicBody {
    fn from(t: Topic) -> Self {
        TopicBody {
            closed: t.is_closed(),
            id: t.id,
            meeting_id: t.meeting_id,
            title: t.title,
            description: t.description,
            creator_id: t.creator_id,
            solution_id: t.solution_id,
            closed_at: t.closed_at,
            force_solution: t.force_solution,
            priority_id: t.priority_id,
            assigned_users: t.assigned_users,
            tag_ids: t.tag_ids,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopicRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub force_solution: bool,
    pub priority_id: Option<i64>,
}

impl From<TopicRequest> for TopicChanges {
    fn from(r: TopicRequest) -> Self {
        TopicChanges {
            title: r.title,
            description: r.description,
            force_solution: r.force_solution,
            priority_id: r.priority_id,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusRequest {
    pub closed: bool,
}

#[derive(Debug, Deserialize)]
pub struct SolutionPath {
    pub comment_id: i64,
}

/// `/topic` below a meeting.
pub fn collection_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/topic", get(list_topics).post(create_topic))
        .with_state(ctx)
}

/// Routes below `/topic/:topic_id`; expects the topic middleware.
pub fn item_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(get_topic).put(update_topic).delete(delete_topic))
        .route("/status", put(set_status))
        .route("/solution", delete(clear_solution))
        .route("/solution/:comment_id", put(set_solution))
        .route("/user/:user_id", post(assign_user).delete(unassign_user))
        .route("/tag/:tag_id", post(link_tag).delete(unlink_tag))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project/{project_id}/meeting/{meeting_id}/topic", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
    ),
    responses((status = 200, body = [TopicBody])))]
pub async fn list_topics(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
) -> ApiResult<Reply<Vec<TopicBody>>> {
    let repo = ctx.topic_repo();
    let items = ListTopics {
        repo: repo.as_ref(),
    }
    .execute(meeting.id)
    .await?;
    Ok(response::ok(
        "topics loaded",
        items.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project/{project_id}/meeting/{meeting_id}/topic", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
    ),
    request_body = TopicRequest,
    responses((status = 201, body = TopicBody), (status = 400)))]
pub async fn create_topic(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(meeting): Extension<Meeting>,
    JsonBody(req): JsonBody<TopicRequest>,
) -> ApiResult<(StatusCode, Reply<TopicBody>)> {
    let topics = ctx.topic_repo();
    let priorities = ctx.priority_repo();
    let topic = CreateTopic {
        topics: topics.as_ref(),
        priorities: priorities.as_ref(),
    }
    .execute(&meeting, &user.0, req.into())
    .await?;
    Ok(response::created("topic created", topic.into()))
}

#[utoipa::path(get, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    responses((status = 200, body = TopicBody), (status = 404)))]
pub async fn get_topic(Extension(topic): Extension<Topic>) -> Reply<TopicBody> {
    response::ok("topic loaded", topic.into())
}

#[utoipa::path(put, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    request_body = TopicRequest,
    responses((status = 200, body = TopicBody), (status = 400)))]
pub async fn update_topic(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    Extension(topic): Extension<Topic>,
    JsonBody(req): JsonBody<TopicRequest>,
) -> ApiResult<Reply<TopicBody>> {
    let topics = ctx.topic_repo();
    let priorities = ctx.priority_repo();
    let updated = UpdateTopic {
        topics: topics.as_ref(),
        priorities: priorities.as_ref(),
    }
    .execute(project.id, &topic, req.into())
    .await?;
    Ok(response::ok("topic updated", updated.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn delete_topic(
    State(ctx): State<AppContext>,
    Extension(topic): Extension<Topic>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.topic_repo();
    DeleteTopic {
        repo: repo.as_ref(),
    }
    .execute(&topic)
    .await?;
    Ok(response::done("topic deleted"))
}

#[utoipa::path(put, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/status", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    request_body = StatusRequest,
    responses((status = 200, body = TopicBody), (status = 400)))]
pub async fn set_status(
    State(ctx): State<AppContext>,
    Extension(topic): Extension<Topic>,
    JsonBody(req): JsonBody<StatusRequest>,
) -> ApiResult<Reply<TopicBody>> {
    let repo = ctx.topic_repo();
    let updated = SetTopicStatus {
        repo: repo.as_ref(),
    }
    .execute(&topic, req.closed)
    .await?;
    let message = if req.closed { "topic closed" } else { "topic reopened" };
    Ok(response::ok(message, updated.into()))
}

#[utoipa::path(put, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/solution/{comment_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
        ("comment_id" = i64, Path, description = "Comment holding the solution"),
    ),
    responses((status = 200, body = TopicBody), (status = 400)))]
pub async fn set_solution(
    State(ctx): State<AppContext>,
    Extension(topic): Extension<Topic>,
    PathParams(path): PathParams<SolutionPath>,
) -> ApiResult<Reply<TopicBody>> {
    let topics = ctx.topic_repo();
    let comments = ctx.comment_repo();
    let updated = SetTopicSolution {
        topics: topics.as_ref(),
        comments: comments.as_ref(),
    }
    .execute(&topic, Some(path.comment_id))
    .await?;
    Ok(response::ok("solution set", updated.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/solution", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    responses((status = 200, body = TopicBody)))]
pub async fn clear_solution(
    State(ctx): State<AppContext>,
    Extension(topic): Extension<Topic>,
) -> ApiResult<Reply<TopicBody>> {
    let topics = ctx.topic_repo();
    let comments = ctx.comment_repo();
    let updated = SetTopicSolution {
        topics: topics.as_ref(),
        comments: comments.as_ref(),
    }
    .execute(&topic, None)
    .await?;
    Ok(response::ok("solution cleared", updated.into()))
}

#[utoipa::path(post, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/user/{user_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
        ("user_id" = String, Path, description = "User to assign"),
    ),
    responses((status = 200), (status = 400)))]
pub async fn assign_user(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    Extension(topic): Extension<Topic>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    let subject = AssignmentSubject::topic(project.id, &topic);
    assignments::assign(&ctx, &project, &user.0, subject, &path.user_id).await
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/user/{user_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
        ("user_id" = String, Path, description = "User to unassign"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unassign_user(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    Extension(topic): Extension<Topic>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    let subject = AssignmentSubject::topic(project.id, &topic);
    assignments::unassign(&ctx, subject, &path.user_id).await
}

#[utoipa::path(post, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/tag/{tag_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn link_tag(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    Extension(topic): Extension<Topic>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    let target = AssignmentTarget::Topic(topic.id);
    assignments::link_tag(&ctx, project.id, target, path.tag_id).await
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}/topic/{topic_id}/tag/{tag_id}", tag = "Topics",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unlink_tag(
    State(ctx): State<AppContext>,
    Extension(topic): Extension<Topic>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    assignments::unlink_tag(&ctx, AssignmentTarget::Topic(topic.id), path.tag_id).await
}
