use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::action_repository::ActionChanges;
use crate::application::ports::assignment_repository::AssignmentTarget;
use crate::application::use_cases::actions::create_action::CreateAction;
use crate::application::use_cases::actions::delete_action::DeleteAction;
use crate::application::use_cases::actions::link_topic::LinkActionTopic;
use crate::application::use_cases::actions::list_actions::ListActions;
use crate::application::use_cases::actions::set_action_status::SetActionStatus;
use crate::application::use_cases::actions::update_action::UpdateAction;
use crate::application::use_cases::assignments::assign_user::AssignmentSubject;
use crate::bootstrap::app_context::AppContext;
use crate::domain::actions::{Action, ActionStateFilter};
use crate::domain::projects::Project;
use crate::presentation::http::assignments;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams, QueryParams};
use crate::presentation::http::response::{self, Reply};
use crate::presentation::http::tags::TagPath;
use crate::presentation::http::topics::StatusRequest;
use crate::presentation::http::users::UserPath;

#[derive(Debug, Serialize, ToSchema)]
pub struct ActionBody {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority_id: Option<i64>,
    pub closed: bool,
    pub closed_at: Option<DateTime<Utc>>,
    pub creator_id: String,
    pub assigned_users: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub topic_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Action> for ActionBody {
    fn from(a: Action) -> Self {
        ActionBody {
            closed: a.closed_at.is_some(),
            id: a.id,
            project_id: a.project_id,
            title: a.title,
            description: a.description,
            due_date: a.due_date,
            priority_id: a.priority_id,
            closed_at: a.closed_at,
            creator_id: a.creator_id,
            assigned_users: a.assigned_users,
            tag_ids: a.tag_ids,
            topic_ids: a.topic_ids,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ActionRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority_id: Option<i64>,
}

impl From<ActionRequest> for ActionChanges {
    fn from(r: ActionRequest) -> Self {
        ActionChanges {
            title: r.title,
            description: r.description,
            due_date: r.due_date,
            priority_id: r.priority_id,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionState {
    #[default]
    All,
    Open,
    Closed,
}

impl From<ActionState> for ActionStateFilter {
    fn from(s: ActionState) -> Self {
        match s {
            ActionState::All => ActionStateFilter::All,
            ActionState::Open => ActionStateFilter::Open,
            ActionState::Closed => ActionStateFilter::Closed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub state: ActionState,
}

#[derive(Debug, Deserialize)]
pub struct TopicLinkPath {
    pub topic_id: i64,
}

/// `/action` below a project.
pub fn collection_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/action", get(list_actions).post(create_action))
        .with_state(ctx)
}

/// Routes below `/action/:action_id`; expects the action middleware.
pub fn item_routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/",
            get(get_action).put(update_action).delete(delete_action),
        )
        .route("/status", put(set_status))
        .route("/topic/:topic_id", post(link_topic).delete(unlink_topic))
        .route("/user/:user_id", post(assign_user).delete(unassign_user))
        .route("/tag/:tag_id", post(link_tag).delete(unlink_tag))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project/{project_id}/action", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("state" = Option<ActionState>, Query, description = "open, closed or all (default)"),
    ),
    responses((status = 200, body = [ActionBody])))]
pub async fn list_actions(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    QueryParams(q): QueryParams<ListQuery>,
) -> ApiResult<Reply<Vec<ActionBody>>> {
    let repo = ctx.action_repo();
    let items = ListActions {
        repo: repo.as_ref(),
    }
    .execute(project.id, q.state.into())
    .await?;
    Ok(response::ok(
        "actions loaded",
        items.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project/{project_id}/action", tag = "Actions",
    params(("project_id" = i64, Path, description = "Project ID")),
    request_body = ActionRequest,
    responses((status = 201, body = ActionBody), (status = 400)))]
pub async fn create_action(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    JsonBody(req): JsonBody<ActionRequest>,
) -> ApiResult<(StatusCode, Reply<ActionBody>)> {
    let actions = ctx.action_repo();
    let priorities = ctx.priority_repo();
    let action = CreateAction {
        actions: actions.as_ref(),
        priorities: priorities.as_ref(),
    }
    .execute(project.id, &user.0, req.into())
    .await?;
    Ok(response::created("action created", action.into()))
}

#[utoipa::path(get, path = "/api/project/{project_id}/action/{action_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
    ),
    responses((status = 200, body = ActionBody), (status = 404)))]
pub async fn get_action(Extension(action): Extension<Action>) -> Reply<ActionBody> {
    response::ok("action loaded", action.into())
}

#[utoipa::path(put, path = "/api/project/{project_id}/action/{action_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
    ),
    request_body = ActionRequest,
    responses((status = 200, body = ActionBody), (status = 400)))]
pub async fn update_action(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    JsonBody(req): JsonBody<ActionRequest>,
) -> ApiResult<Reply<ActionBody>> {
    let actions = ctx.action_repo();
    let priorities = ctx.priority_repo();
    let updated = UpdateAction {
        actions: actions.as_ref(),
        priorities: priorities.as_ref(),
    }
    .execute(&action, req.into())
    .await?;
    Ok(response::ok("action updated", updated.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/action/{action_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn delete_action(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.action_repo();
    DeleteAction {
        repo: repo.as_ref(),
    }
    .execute(&action)
    .await?;
    Ok(response::done("action deleted"))
}

#[utoipa::path(put, path = "/api/project/{project_id}/action/{action_id}/status", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
    ),
    request_body = StatusRequest,
    responses((status = 200, body = ActionBody)))]
pub async fn set_status(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    JsonBody(req): JsonBody<StatusRequest>,
) -> ApiResult<Reply<ActionBody>> {
    let repo = ctx.action_repo();
    let updated = SetActionStatus {
        repo: repo.as_ref(),
    }
    .execute(&action, req.closed)
    .await?;
    let message = if req.closed { "action closed" } else { "action reopened" };
    Ok(response::ok(message, updated.into()))
}

#[utoipa::path(post, path = "/api/project/{project_id}/action/{action_id}/topic/{topic_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn link_topic(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    PathParams(path): PathParams<TopicLinkPath>,
) -> ApiResult<Reply<()>> {
    let topics = ctx.topic_repo();
    let assignments = ctx.assignment_repo();
    LinkActionTopic {
        topics: topics.as_ref(),
        assignments: assignments.as_ref(),
    }
    .link(&action, path.topic_id)
    .await?;
    Ok(response::done("topic linked"))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/action/{action_id}/topic/{topic_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
        ("topic_id" = i64, Path, description = "Topic ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unlink_topic(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    PathParams(path): PathParams<TopicLinkPath>,
) -> ApiResult<Reply<()>> {
    let topics = ctx.topic_repo();
    let assignments = ctx.assignment_repo();
    LinkActionTopic {
        topics: topics.as_ref(),
        assignments: assignments.as_ref(),
    }
    .unlink(&action, path.topic_id)
    .await?;
    Ok(response::done("topic unlinked"))
}

#[utoipa::path(post, path = "/api/project/{project_id}/action/{action_id}/user/{user_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
        ("user_id" = String, Path, description = "User to assign"),
    ),
    responses((status = 200), (status = 400)))]
pub async fn assign_user(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    Extension(action): Extension<Action>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    let subject = AssignmentSubject::action(&action);
    assignments::assign(&ctx, &project, &user.0, subject, &path.user_id).await
}

#[utoipa::path(delete, path = "/api/project/{project_id}/action/{action_id}/user/{user_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
        ("user_id" = String, Path, description = "User to unassign"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unassign_user(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    assignments::unassign(&ctx, AssignmentSubject::action(&action), &path.user_id).await
}

#[utoipa::path(post, path = "/api/project/{project_id}/action/{action_id}/tag/{tag_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn link_tag(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    let target = AssignmentTarget::Action(action.id);
    assignments::link_tag(&ctx, action.project_id, target, path.tag_id).await
}

#[utoipa::path(delete, path = "/api/project/{project_id}/action/{action_id}/tag/{tag_id}", tag = "Actions",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("action_id" = i64, Path, description = "Action ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unlink_tag(
    State(ctx): State<AppContext>,
    Extension(action): Extension<Action>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    assignments::unlink_tag(&ctx, AssignmentTarget::Action(action.id), path.tag_id).await
}
