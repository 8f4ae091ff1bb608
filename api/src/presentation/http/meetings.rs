use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ports::assignment_repository::AssignmentTarget;
use crate::application::ports::meeting_repository::MeetingChanges;
use crate::application::use_cases::assignments::assign_user::AssignmentSubject;
use crate::application::use_cases::meetings::create_meeting::CreateMeeting;
use crate::application::use_cases::meetings::delete_meeting::DeleteMeeting;
use crate::application::use_cases::meetings::list_meetings::ListMeetings;
use crate::application::use_cases::meetings::update_meeting::UpdateMeeting;
use crate::bootstrap::app_context::AppContext;
use crate::domain::meetings::Meeting;
use crate::domain::projects::Project;
use crate::presentation::http::assignments;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, JsonBody, PathParams};
use crate::presentation::http::response::{self, Reply};
use crate::presentation::http::tags::TagPath;
use crate::presentation::http::users::UserPath;

#[derive(Debug, Serialize, ToSchema)]
pub struct MeetingBody {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub creator_id: String,
    pub assigned_users: Vec<String>,
    pub tag_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Meeting> for MeetingBody {
    fn from(m: Meeting) -> Self {
        MeetingBody {
            id: m.id,
            project_id: m.project_id,
            name: m.name,
            description: m.description,
            start_date: m.start_date,
            end_date: m.end_date,
            creator_id: m.creator_id,
            assigned_users: m.assigned_users,
            tag_ids: m.tag_ids,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MeetingRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl From<MeetingRequest> for MeetingChanges {
    fn from(r: MeetingRequest) -> Self {
        MeetingChanges {
            name: r.name,
            description: r.description,
            start_date: r.start_date,
            end_date: r.end_date,
        }
    }
}

/// `/meeting` below a project.
pub fn collection_routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/meeting", get(list_meetings).post(create_meeting))
        .with_state(ctx)
}

/// Routes below `/meeting/:meeting_id`; expects the meeting middleware.
pub fn item_routes(ctx: AppContext) -> Router {
    Router::new()
        .route(
            "/",
            get(get_meeting).put(update_meeting).delete(delete_meeting),
        )
        .route("/user/:user_id", post(assign_user).delete(unassign_user))
        .route("/tag/:tag_id", post(link_tag).delete(unlink_tag))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/project/{project_id}/meeting", tag = "Meetings",
    params(("project_id" = i64, Path, description = "Project ID")),
    responses((status = 200, body = [MeetingBody])))]
pub async fn list_meetings(
    State(ctx): State<AppContext>,
    Extension(project): Extension<Project>,
) -> ApiResult<Reply<Vec<MeetingBody>>> {
    let repo = ctx.meeting_repo();
    let items = ListMeetings {
        repo: repo.as_ref(),
    }
    .execute(project.id)
    .await?;
    Ok(response::ok(
        "meetings loaded",
        items.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(post, path = "/api/project/{project_id}/meeting", tag = "Meetings",
    params(("project_id" = i64, Path, description = "Project ID")),
    request_body = MeetingRequest,
    responses((status = 201, body = MeetingBody), (status = 400)))]
pub async fn create_meeting(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    JsonBody(req): JsonBody<MeetingRequest>,
) -> ApiResult<(StatusCode, Reply<MeetingBody>)> {
    let repo = ctx.meeting_repo();
    let meeting = CreateMeeting {
        repo: repo.as_ref(),
    }
    .execute(project.id, &user.0, req.into())
    .await?;
    Ok(response::created("meeting created", meeting.into()))
}

#[utoipa::path(get, path = "/api/project/{project_id}/meeting/{meeting_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
    ),
    responses((status = 200, body = MeetingBody), (status = 404)))]
pub async fn get_meeting(Extension(meeting): Extension<Meeting>) -> Reply<MeetingBody> {
    response::ok("meeting loaded", meeting.into())
}

#[utoipa::path(put, path = "/api/project/{project_id}/meeting/{meeting_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
    ),
    request_body = MeetingRequest,
    responses((status = 200, body = MeetingBody), (status = 400), (status = 404)))]
pub async fn update_meeting(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
    JsonBody(req): JsonBody<MeetingRequest>,
) -> ApiResult<Reply<MeetingBody>> {
    let repo = ctx.meeting_repo();
    let updated = UpdateMeeting {
        repo: repo.as_ref(),
    }
    .execute(&meeting, req.into())
    .await?;
    Ok(response::ok("meeting updated", updated.into()))
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn delete_meeting(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.meeting_repo();
    DeleteMeeting {
        repo: repo.as_ref(),
    }
    .execute(&meeting)
    .await?;
    Ok(response::done("meeting deleted"))
}

#[utoipa::path(post, path = "/api/project/{project_id}/meeting/{meeting_id}/user/{user_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("user_id" = String, Path, description = "User to assign"),
    ),
    responses((status = 200), (status = 400)))]
pub async fn assign_user(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    Extension(project): Extension<Project>,
    Extension(meeting): Extension<Meeting>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    let subject = AssignmentSubject::meeting(&meeting);
    assignments::assign(&ctx, &project, &user.0, subject, &path.user_id).await
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}/user/{user_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("user_id" = String, Path, description = "User to unassign"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unassign_user(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
    PathParams(path): PathParams<UserPath>,
) -> ApiResult<Reply<()>> {
    assignments::unassign(&ctx, AssignmentSubject::meeting(&meeting), &path.user_id).await
}

#[utoipa::path(post, path = "/api/project/{project_id}/meeting/{meeting_id}/tag/{tag_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn link_tag(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    let target = AssignmentTarget::Meeting(meeting.id);
    assignments::link_tag(&ctx, meeting.project_id, target, path.tag_id).await
}

#[utoipa::path(delete, path = "/api/project/{project_id}/meeting/{meeting_id}/tag/{tag_id}", tag = "Meetings",
    params(
        ("project_id" = i64, Path, description = "Project ID"),
        ("meeting_id" = i64, Path, description = "Meeting ID"),
        ("tag_id" = i64, Path, description = "Tag ID"),
    ),
    responses((status = 200), (status = 404)))]
pub async fn unlink_tag(
    State(ctx): State<AppContext>,
    Extension(meeting): Extension<Meeting>,
    PathParams(path): PathParams<TagPath>,
) -> ApiResult<Reply<()>> {
    assignments::unlink_tag(&ctx, AssignmentTarget::Meeting(meeting.id), path.tag_id).await
}
