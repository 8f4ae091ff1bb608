use axum::extract::State;
use axum::routing::{delete, get, put};
use axum::{Extension, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::use_cases::notifications::delete_notification::DeleteNotification;
use crate::application::use_cases::notifications::list_notifications::ListNotifications;
use crate::application::use_cases::notifications::mark_read::MarkNotificationsRead;
use crate::bootstrap::app_context::AppContext;
use crate::domain::notifications::Notification;
use crate::presentation::http::auth::AuthUser;
use crate::presentation::http::error::{ApiResult, PathParams, QueryParams};
use crate::presentation::http::response::{self, Reply};

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationBody {
    pub id: i64,
    pub title: String,
    pub suffix: String,
    pub description: String,
    pub link: String,
    pub link_title: String,
    pub read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationBody {
    fn from(n: Notification) -> Self {
        NotificationBody {
            id: n.id,
            title: n.title,
            suffix: n.suffix,
            description: n.description,
            link: n.link,
            link_title: n.link_title,
            read: n.read_at.is_some(),
            read_at: n.read_at,
            created_at: n.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub unread: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotificationPath {
    pub id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MarkedCount {
    pub marked: u64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/notification", get(list_notifications))
        .route("/notification/read", put(mark_all_read))
        .route("/notification/:id/read", put(mark_read))
        .route("/notification/:id", delete(delete_notification))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/notification", tag = "Notifications",
    params(("unread" = Option<bool>, Query, description = "Only unread notifications")),
    responses((status = 200, body = [NotificationBody])))]
pub async fn list_notifications(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    QueryParams(q): QueryParams<ListQuery>,
) -> ApiResult<Reply<Vec<NotificationBody>>> {
    let repo = ctx.notification_repo();
    let items = ListNotifications {
        repo: repo.as_ref(),
    }
    .execute(&user.0, q.unread)
    .await?;
    Ok(response::ok(
        "notifications loaded",
        items.into_iter().map(Into::into).collect(),
    ))
}

#[utoipa::path(put, path = "/api/notification/read", tag = "Notifications",
    responses((status = 200, body = MarkedCount)))]
pub async fn mark_all_read(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Reply<MarkedCount>> {
    let repo = ctx.notification_repo();
    let marked = MarkNotificationsRead {
        repo: repo.as_ref(),
    }
    .all(&user.0)
    .await?;
    Ok(response::ok("notifications marked read", MarkedCount { marked }))
}

#[utoipa::path(put, path = "/api/notification/{id}/read", tag = "Notifications",
    params(("id" = i64, Path, description = "Notification ID")),
    responses((status = 200), (status = 404)))]
pub async fn mark_read(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    PathParams(path): PathParams<NotificationPath>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.notification_repo();
    MarkNotificationsRead {
        repo: repo.as_ref(),
    }
    .one(&user.0, path.id)
    .await?;
    Ok(response::done("notification marked read"))
}

#[utoipa::path(delete, path = "/api/notification/{id}", tag = "Notifications",
    params(("id" = i64, Path, description = "Notification ID")),
    responses((status = 200), (status = 404)))]
pub async fn delete_notification(
    State(ctx): State<AppContext>,
    Extension(user): Extension<AuthUser>,
    PathParams(path): PathParams<NotificationPath>,
) -> ApiResult<Reply<()>> {
    let repo = ctx.notification_repo();
    DeleteNotification {
        repo: repo.as_ref(),
    }
    .execute(&user.0, path.id)
    .await?;
    Ok(response::done("notification deleted"))
}
