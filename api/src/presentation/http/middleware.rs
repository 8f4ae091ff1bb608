use std::collections::HashMap;

use axum::Extension;
use axum::extract::{FromRequestParts, Path, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::access;
use crate::application::use_cases::actions::get_action::GetAction;
use crate::application::use_cases::meetings::get_meeting::GetMeeting;
use crate::application::use_cases::topics::get_topic::GetTopic;
use crate::bootstrap::app_context::AppContext;
use crate::domain::actions::Action;
use crate::domain::comments::CommentScope;
use crate::domain::meetings::Meeting;
use crate::domain::projects::Project;
use crate::domain::topics::Topic;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::ApiError;

fn path_id(params: &HashMap<String, String>, key: &str) -> Result<i64, ApiError> {
    params
        .get(key)
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| ApiError::BadRequest(format!("invalid {key}")))
}

/// Loads `{project_id}` and admits the owner and granted users only.
pub async fn project_access(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let project_id = path_id(&params, "project_id")?;
    let repo = ctx.project_repo();
    let project = access::resolve_project(repo.as_ref(), project_id, &user.0)
        .await
        .inspect_err(|e| {
            tracing::debug!(project_id, user_id = %user.0, reason = %e, "project_access_denied")
        })?;
    req.extensions_mut().insert(project);
    Ok(next.run(req).await)
}

pub async fn meeting_access(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let meeting_id = path_id(&params, "meeting_id")?;
    let repo = ctx.meeting_repo();
    let meeting = GetMeeting {
        repo: repo.as_ref(),
    }
    .execute(project.id, meeting_id)
    .await?;
    req.extensions_mut().insert(meeting);
    Ok(next.run(req).await)
}

pub async fn action_access(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let action_id = path_id(&params, "action_id")?;
    let repo = ctx.action_repo();
    let action = GetAction {
        repo: repo.as_ref(),
    }
    .execute(project.id, action_id)
    .await?;
    req.extensions_mut().insert(action);
    Ok(next.run(req).await)
}

/// Runs below [`meeting_access`]; the topic must sit in the loaded meeting.
pub async fn topic_access(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
    Path(params): Path<HashMap<String, String>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let topic_id = path_id(&params, "topic_id")?;
    let repo = ctx.topic_repo();
    let topic = GetTopic {
        repo: repo.as_ref(),
    }
    .execute(&meeting, topic_id)
    .await?;
    req.extensions_mut().insert(topic);
    Ok(next.run(req).await)
}

/// Most specific comment scope loaded by the middleware chain.
pub struct Scope(pub CommentScope);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Scope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ext = &parts.extensions;
        let project = ext
            .get::<Project>()
            .ok_or_else(|| ApiError::BadRequest("missing project scope".into()))?;
        let scope = if let Some(topic) = ext.get::<Topic>() {
            CommentScope::Topic {
                project_id: project.id,
                meeting_id: topic.meeting_id,
                topic_id: topic.id,
            }
        } else if let Some(action) = ext.get::<Action>() {
            CommentScope::Action {
                project_id: project.id,
                action_id: action.id,
            }
        } else if let Some(meeting) = ext.get::<Meeting>() {
            CommentScope::Meeting {
                project_id: project.id,
                meeting_id: meeting.id,
            }
        } else {
            CommentScope::Project(project.id)
        };
        Ok(Scope(scope))
    }
}
