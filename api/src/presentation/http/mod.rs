pub mod actions;
pub mod assignments;
pub mod auth;
pub mod comments;
pub mod error;
pub mod health;
pub mod meetings;
pub mod middleware;
pub mod notifications;
pub mod priorities;
pub mod projects;
pub mod response;
pub mod tags;
pub mod topics;
pub mod users;

use axum::Router;
use axum::middleware::from_fn_with_state;

use crate::bootstrap::app_context::AppContext;

/// Every authenticated route. Layers are attached after nesting so that
/// the checks run outermost first: user, project, meeting/action, topic.
pub fn routes(ctx: AppContext) -> Router {
    let topic = topics::item_routes(ctx.clone())
        .merge(comments::routes(ctx.clone()))
        .route_layer(from_fn_with_state(ctx.clone(), middleware::topic_access));

    let meeting = meetings::item_routes(ctx.clone())
        .merge(topics::collection_routes(ctx.clone()))
        .merge(comments::routes(ctx.clone()))
        .nest("/topic/:topic_id", topic)
        .route_layer(from_fn_with_state(ctx.clone(), middleware::meeting_access));

    let action = actions::item_routes(ctx.clone())
        .merge(comments::routes(ctx.clone()))
        .route_layer(from_fn_with_state(ctx.clone(), middleware::action_access));

    let project = projects::item_routes(ctx.clone())
        .merge(tags::routes(ctx.clone()))
        .merge(priorities::routes(ctx.clone()))
        .merge(meetings::collection_routes(ctx.clone()))
        .merge(actions::collection_routes(ctx.clone()))
        .merge(comments::routes(ctx.clone()))
        .nest("/meeting/:meeting_id", meeting)
        .nest("/action/:action_id", action)
        .route_layer(from_fn_with_state(ctx.clone(), middleware::project_access));

    Router::new()
        .merge(users::routes(ctx.clone()))
        .merge(notifications::routes(ctx.clone()))
        .merge(projects::collection_routes(ctx.clone()))
        .nest("/project/:project_id", project)
        .route_layer(from_fn_with_state(ctx, auth::require_user))
}
