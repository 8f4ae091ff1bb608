use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dmp_api::bootstrap::app_context::{AppContext, AppServices};
use dmp_api::bootstrap::config::Config;
use dmp_api::infrastructure::db;
use dmp_api::infrastructure::db::repositories::{
    action_repository_sqlx::SqlxActionRepository,
    assignment_repository_sqlx::SqlxAssignmentRepository,
    comment_repository_sqlx::SqlxCommentRepository, meeting_repository_sqlx::SqlxMeetingRepository,
    notification_repository_sqlx::SqlxNotificationRepository,
    priority_repository_sqlx::SqlxPriorityRepository,
    project_repository_sqlx::SqlxProjectRepository, tag_repository_sqlx::SqlxTagRepository,
    topic_repository_sqlx::SqlxTopicRepository, user_repository_sqlx::SqlxUserRepository,
};
use dmp_api::presentation::http as api_http;

#[derive(OpenApi)]
#[openapi(
        paths(
            dmp_api::presentation::http::users::get_me,
            dmp_api::presentation::http::users::change_name,
            dmp_api::presentation::http::users::resolve_user,
            dmp_api::presentation::http::notifications::list_notifications,
            dmp_api::presentation::http::notifications::mark_all_read,
            dmp_api::presentation::http::notifications::mark_read,
            dmp_api::presentation::http::notifications::delete_notification,
            dmp_api::presentation::http::projects::list_projects,
            dmp_api::presentation::http::projects::create_project,
            dmp_api::presentation::http::projects::get_project,
            dmp_api::presentation::http::projects::update_project,
            dmp_api::presentation::http::projects::delete_project,
            dmp_api::presentation::http::projects::list_project_users,
            dmp_api::presentation::http::projects::grant_access,
            dmp_api::presentation::http::projects::revoke_access,
            dmp_api::presentation::http::tags::list_tags,
            dmp_api::presentation::http::tags::create_tag,
            dmp_api::presentation::http::tags::update_tag,
            dmp_api::presentation::http::tags::delete_tag,
            dmp_api::presentation::http::priorities::list_priorities,
            dmp_api::presentation::http::priorities::create_priority,
            dmp_api::presentation::http::priorities::update_priority,
            dmp_api::presentation::http::priorities::delete_priority,
            dmp_api::presentation::http::meetings::list_meetings,
            dmp_api::presentation::http::meetings::create_meeting,
            dmp_api::presentation::http::meetings::get_meeting,
            dmp_api::presentation::http::meetings::update_meeting,
            dmp_api::presentation::http::meetings::delete_meeting,
            dmp_api::presentation::http::meetings::assign_user,
            dmp_api::presentation::http::meetings::unassign_user,
            dmp_api::presentation::http::meetings::link_tag,
            dmp_api::presentation::http::meetings::unlink_tag,
            dmp_api::presentation::http::topics::list_topics,
            dmp_api::presentation::http::topics::create_topic,
            dmp_api::presentation::http::topics::get_topic,
            dmp_api::presentation::http::topics::update_topic,
            dmp_api::presentation::http::topics::delete_topic,
            dmp_api::presentation::http::topics::set_status,
            dmp_api::presentation::http::topics::set_solution,
            dmp_api::presentation::http::topics::clear_solution,
            dmp_api::presentation::http::topics::assign_user,
            dmp_api::presentation::http::topics::unassign_user,
            dmp_api::presentation::http::topics::link_tag,
            dmp_api::presentation::http::topics::unlink_tag,
            dmp_api::presentation::http::actions::list_actions,
            dmp_api::presentation::http::actions::create_action,
            dmp_api::presentation::http::actions::get_action,
            dmp_api::presentation::http::actions::update_action,
            dmp_api::presentation::http::actions::delete_action,
            dmp_api::presentation::http::actions::set_status,
            dmp_api::presentation::http::actions::link_topic,
            dmp_api::presentation::http::actions::unlink_topic,
            dmp_api::presentation::http::actions::assign_user,
            dmp_api::presentation::http::actions::unassign_user,
            dmp_api::presentation::http::actions::link_tag,
            dmp_api::presentation::http::actions::unlink_tag,
            dmp_api::presentation::http::comments::list_comments,
            dmp_api::presentation::http::comments::create_comment,
            dmp_api::presentation::http::comments::update_comment,
            dmp_api::presentation::http::comments::delete_comment,
            dmp_api::presentation::http::health::health,
        ),
        components(schemas(
            dmp_api::presentation::http::users::UserBody,
            dmp_api::presentation::http::users::ChangeNameRequest,
            dmp_api::presentation::http::users::ResolvedUser,
            dmp_api::presentation::http::notifications::NotificationBody,
            dmp_api::presentation::http::notifications::MarkedCount,
            dmp_api::presentation::http::projects::ProjectBody,
            dmp_api::presentation::http::projects::ProjectRequest,
            dmp_api::presentation::http::tags::TagBody,
            dmp_api::presentation::http::tags::TagRequest,
            dmp_api::presentation::http::priorities::PriorityBody,
            dmp_api::presentation::http::priorities::PriorityRequest,
            dmp_api::presentation::http::meetings::MeetingBody,
            dmp_api::presentation::http::meetings::MeetingRequest,
            dmp_api::presentation::http::topics::TopicBody,
            dmp_api::presentation::http::topics::TopicRequest,
            dmp_api::presentation::http::topics::StatusRequest,
            dmp_api::presentation::http::actions::ActionBody,
            dmp_api::presentation::http::actions::ActionRequest,
            dmp_api::presentation::http::actions::ActionState,
            dmp_api::presentation::http::comments::CommentBody,
            dmp_api::presentation::http::comments::CommentRequest,
            dmp_api::presentation::http::health::HealthBody,
        )),
        tags(
            (name = "Users", description = "Profile and user lookup"),
            (name = "Notifications", description = "Per-user notifications"),
            (name = "Projects", description = "Projects and access grants"),
            (name = "Tags", description = "Project tags"),
            (name = "Priorities", description = "Project priorities"),
            (name = "Meetings", description = "Meetings of a project"),
            (name = "Topics", description = "Agenda topics of a meeting"),
            (name = "Actions", description = "Action items of a project"),
            (name = "Comments", description = "Comments on projects, meetings, topics and actions"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn cors_layer(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);
    match cfg.frontend_url.as_deref() {
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(v) => base.allow_origin(v).allow_credentials(true),
            Err(_) => base
                .allow_origin(AllowOrigin::mirror_request())
                .allow_credentials(true),
        },
        // FRONTEND_URL is mandatory in production; deny everything if it is somehow absent
        None if cfg.is_production => base.allow_origin(AllowOrigin::exact(
            HeaderValue::from_static("http://invalid"),
        )),
        None => base
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "dmp_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(
        port = cfg.api_port,
        production = cfg.is_production,
        frontend_url = ?cfg.frontend_url,
        jwt_issuer = ?cfg.jwt_issuer,
        "Starting DMP backend"
    );

    // Database
    let pool = db::connect_pool(&cfg.database_url, cfg.database_max_connections).await?;
    db::migrate(&pool).await?;

    let services = AppServices::new(
        Arc::new(SqlxUserRepository::new(pool.clone())),
        Arc::new(SqlxProjectRepository::new(pool.clone())),
        Arc::new(SqlxMeetingRepository::new(pool.clone())),
        Arc::new(SqlxTopicRepository::new(pool.clone())),
        Arc::new(SqlxActionRepository::new(pool.clone())),
        Arc::new(SqlxCommentRepository::new(pool.clone())),
        Arc::new(SqlxTagRepository::new(pool.clone())),
        Arc::new(SqlxPriorityRepository::new(pool.clone())),
        Arc::new(SqlxNotificationRepository::new(pool.clone())),
        Arc::new(SqlxAssignmentRepository::new(pool.clone())),
    );
    let ctx = AppContext::new(cfg.clone(), services);

    let app = Router::new()
        .nest("/api", api_http::health::routes(pool.clone()))
        .nest("/api", api_http::routes(ctx))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(&cfg))
        .layer(DefaultBodyLimit::max(cfg.body_limit_bytes))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown_signal_received");
        })
        .await?;
    Ok(())
}
