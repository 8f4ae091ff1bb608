use crate::application::ports::assignment_repository::AssignmentTarget;
use crate::application::use_cases::assignments::assign_user::{AssignUser, AssignmentSubject};
use crate::application::use_cases::assignments::link_tag::LinkTag;
use crate::bootstrap::app_context::AppContext;
use crate::domain::projects::Project;
use crate::presentation::http::error::ApiResult;
use crate::presentation::http::response::{self, Reply};

// Shared bodies of the user/tag association endpoints of meetings, topics and actions.

pub(crate) async fn assign(
    ctx: &AppContext,
    project: &Project,
    acting_user: &str,
    subject: AssignmentSubject,
    user_id: &str,
) -> ApiResult<Reply<()>> {
    let projects = ctx.project_repo();
    let assignments = ctx.assignment_repo();
    let notifications = ctx.notification_repo();
    AssignUser {
        projects: projects.as_ref(),
        assignments: assignments.as_ref(),
        notifications: notifications.as_ref(),
    }
    .assign(project, acting_user, &subject, user_id)
    .await?;
    tracing::info!(kind = subject.target.kind(), id = subject.target.id(), user_id = %user_id, "user_assigned");
    Ok(response::done("user assigned"))
}

pub(crate) async fn unassign(
    ctx: &AppContext,
    subject: AssignmentSubject,
    user_id: &str,
) -> ApiResult<Reply<()>> {
    let projects = ctx.project_repo();
    let assignments = ctx.assignment_repo();
    let notifications = ctx.notification_repo();
    AssignUser {
        projects: projects.as_ref(),
        assignments: assignments.as_ref(),
        notifications: notifications.as_ref(),
    }
    .unassign(&subject, user_id)
    .await?;
    Ok(response::done("user unassigned"))
}

pub(crate) async fn link_tag(
    ctx: &AppContext,
    project_id: i64,
    target: AssignmentTarget,
    tag_id: i64,
) -> ApiResult<Reply<()>> {
    let tags = ctx.tag_repo();
    let assignments = ctx.assignment_repo();
    LinkTag {
        tags: tags.as_ref(),
        assignments: assignments.as_ref(),
    }
    .link(project_id, target, tag_id)
    .await?;
    Ok(response::done("tag linked"))
}

pub(crate) async fn unlink_tag(
    ctx: &AppContext,
    target: AssignmentTarget,
    tag_id: i64,
) -> ApiResult<Reply<()>> {
    let tags = ctx.tag_repo();
    let assignments = ctx.assignment_repo();
    LinkTag {
        tags: tags.as_ref(),
        assignments: assignments.as_ref(),
    }
    .unlink(target, tag_id)
    .await?;
    Ok(response::done("tag unlinked"))
}
